//! Signature encodings and hex helpers
//!
//! Hex output is lowercase. It is meant for diagnostics and test fixtures,
//! never for the wire.

pub mod signature;

pub use signature::{der_to_p1363, max_der_len, p1363_to_der};

/// Encode bytes as a lowercase hex string
pub fn hex_encode(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode a hex string, upper or lower case, ignoring surrounding whitespace
pub fn hex_decode(text: &str) -> Result<Vec<u8>, ::hex::FromHexError> {
    ::hex::decode(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase() {
        assert_eq!(hex_encode(&[0x30, 0xab, 0x0f]), "30ab0f");
        assert_eq!(hex_encode(&[]), "");
    }

    #[test]
    fn test_hex_decode_accepts_either_case() {
        assert_eq!(hex_decode("30AB0f\n").unwrap(), vec![0x30, 0xab, 0x0f]);
        assert!(hex_decode("30a").is_err());
        assert!(hex_decode("zz").is_err());
    }
}
