//! Asymmetric key material
//!
//! Only NIST P-256 is supported; the module layout leaves room for other
//! curves behind the same key types.

pub mod p256;

pub use self::p256::{generate_key_pair, PrivateKey, PublicKey};
