//! MD5 digest of the input string

use crate::io::configuration::DIGEST_LENGTH;
use md5::{Digest, Md5};

/// Fixed-length digest every later stage derives from
pub type HashBytes = [u8; DIGEST_LENGTH];

/// Hash the raw bytes of `input`
///
/// Any string, including the empty string, yields a 16-byte digest.
pub fn hash_input(input: &str) -> HashBytes {
    Md5::digest(input.as_bytes()).into()
}
