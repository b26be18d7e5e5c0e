use hwcrypto_api::ApiError;
use thiserror::Error;

/// Exit status for errors that carry no core error code
pub const EXIT_USAGE: u8 = 2;

/// Added to the core error code to form the exit status
pub const EXIT_CODE_BASE: u8 = 10;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// `10 + code` for core errors, 2 otherwise
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Api(e) => EXIT_CODE_BASE + e.code().as_i32() as u8,
            _ => EXIT_USAGE,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
