//! Digital signatures

pub mod ecdsa;

pub use ecdsa::{sign, sign_p1363, verify, verify_p1363};
