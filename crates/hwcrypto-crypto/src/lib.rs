//! Hardware Crypto primitives
//!
//! ECDSA over NIST P-256 (secp256r1) with SHA-256: validated key generation,
//! randomized signing, fail-closed verification and the P1363 / DER signature
//! codec used at the API boundary.

pub mod asymmetric;
pub mod encoding;
pub mod error;
pub mod signature;

// Re-export commonly used types for convenience
pub use asymmetric::p256::{
    generate_key_pair, PrivateKey, PublicKey, SCALAR_SIZE, UNCOMPRESSED_POINT_SIZE,
    VALIDATION_ROUNDS,
};
pub use encoding::{der_to_p1363, hex_decode, hex_encode, max_der_len, p1363_to_der};
pub use error::{Error, Result};
pub use signature::{sign, sign_p1363, verify, verify_p1363};
