//! Tests for input hashing

#[cfg(test)]
mod tests {
    use identicon::io::configuration::DIGEST_LENGTH;
    use identicon::pipeline::hasher::hash_input;

    // Tests the known digest of the reference input
    // Verified by hashing with a different algorithm
    #[test]
    fn test_hash_input_known_digest() {
        assert_eq!(
            hash_input("hoyups"),
            [58, 80, 136, 92, 134, 191, 78, 25, 5, 220, 245, 240, 83, 82, 0, 40]
        );
    }

    // Tests empty input still yields a full digest
    // Verified by short-circuiting empty strings
    #[test]
    fn test_hash_input_empty_string() {
        let digest = hash_input("");
        assert_eq!(digest.len(), DIGEST_LENGTH);
        assert_eq!(
            digest,
            [212, 29, 140, 217, 143, 0, 178, 4, 233, 128, 9, 152, 236, 248, 66, 126]
        );
    }

    // Tests repeated hashing is deterministic and distinct inputs differ
    // Verified by salting the hash with a counter
    #[test]
    fn test_hash_input_deterministic() {
        assert_eq!(hash_input("octocat"), hash_input("octocat"));
        assert_ne!(hash_input("octocat"), hash_input("octocat "));
        assert_ne!(hash_input("a"), hash_input("b"));
    }

    // Tests multi-byte characters are hashed by their UTF-8 bytes
    // Verified by hashing chars instead of bytes
    #[test]
    fn test_hash_input_unicode() {
        let digest = hash_input("héllo wörld ✓");
        assert_eq!(digest.len(), DIGEST_LENGTH);
        assert_eq!(digest, hash_input("héllo wörld ✓"));
    }
}
