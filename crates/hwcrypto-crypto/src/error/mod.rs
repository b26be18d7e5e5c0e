use thiserror::Error;

/// Errors raised by the P-256 primitives
#[derive(Error, Debug)]
pub enum Error {
    /// Generated key pair did not pass validation
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Key material failed curve validation
    #[error("Key validation failed: {0}")]
    ValidationFailed(String),

    /// The ECDSA backend refused to sign
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Signature bytes are not a well-formed DER or P1363 encoding
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// Key bytes or PEM text could not be decoded as a P-256 key
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("PKCS8 error: {0}")]
    Pkcs8Error(#[from] pkcs8::Error),

    #[error("SPKI error: {0}")]
    SpkiError(#[from] pkcs8::spki::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
