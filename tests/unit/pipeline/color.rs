//! Tests for colour selection from digest bytes

#[cfg(test)]
mod tests {
    use identicon::IdenticonError;
    use identicon::pipeline::color::{Color, pick_color};
    use image::Rgba;

    // Tests the first three bytes become the colour unmodified
    // Verified by reordering channels
    #[test]
    fn test_pick_color_uses_leading_bytes() {
        let digest = [58, 80, 136, 92, 134, 191, 78, 25, 5, 220, 245, 240, 83, 82, 0, 40];
        assert_eq!(pick_color(&digest).unwrap(), Color::new(58, 80, 136));
    }

    // Tests exactly three bytes is enough
    // Verified by requiring four bytes
    #[test]
    fn test_pick_color_minimum_length() {
        assert_eq!(pick_color(&[1, 2, 3]).unwrap(), Color::new(1, 2, 3));
    }

    // Tests short digests are rejected as a precondition violation
    // Verified by padding short digests with zeros
    #[test]
    fn test_pick_color_short_digest() {
        let err = pick_color(&[1, 2]).unwrap_err();
        assert!(err.is_precondition());
        match err {
            IdenticonError::MalformedDigest {
                required, actual, ..
            } => {
                assert_eq!(required, 3);
                assert_eq!(actual, 2);
            }
            other => unreachable!("Expected MalformedDigest, got {other:?}"),
        }

        assert!(pick_color(&[]).is_err());
    }

    // Tests conversion to an opaque RGBA pixel
    // Verified by using a zero alpha channel
    #[test]
    fn test_color_to_rgba_is_opaque() {
        assert_eq!(Color::new(10, 20, 30).to_rgba(), Rgba([10, 20, 30, 255]));
    }
}
