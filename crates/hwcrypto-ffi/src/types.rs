//! FFI types and enums

use std::{
    ffi::CString,
    os::raw::{c_char, c_uchar, c_uint},
    ptr,
};

use hwcrypto_api::{ApiError, ErrorCode};

// ============================================================================
// Types and Enums
// ============================================================================

/// FFI status codes
///
/// Values 1 to 11 match the core error codes one to one.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HwCryptoStatus {
    Success = 0,
    StorageUnavailable = 1,
    StorageWriteError = 2,
    KeyNotFound = 3,
    KeyCorrupted = 4,
    KeyGenerationFailed = 5,
    SigningFailed = 6,
    InvalidSignatureEncoding = 7,
    InvalidIdentifier = 8,
    InvalidKeyEncoding = 9,
    OperationAborted = 10,
    Configuration = 11,
    /// Null handle, bad pointer or non UTF-8 string
    InvalidInput = 100,
    InternalError = 101,
}

impl From<ErrorCode> for HwCryptoStatus {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::StorageUnavailable => HwCryptoStatus::StorageUnavailable,
            ErrorCode::StorageWriteError => HwCryptoStatus::StorageWriteError,
            ErrorCode::KeyNotFound => HwCryptoStatus::KeyNotFound,
            ErrorCode::KeyCorrupted => HwCryptoStatus::KeyCorrupted,
            ErrorCode::KeyGenerationFailed => HwCryptoStatus::KeyGenerationFailed,
            ErrorCode::SigningFailed => HwCryptoStatus::SigningFailed,
            ErrorCode::InvalidSignatureEncoding => HwCryptoStatus::InvalidSignatureEncoding,
            ErrorCode::InvalidIdentifier => HwCryptoStatus::InvalidIdentifier,
            ErrorCode::InvalidKeyEncoding => HwCryptoStatus::InvalidKeyEncoding,
            ErrorCode::OperationAborted => HwCryptoStatus::OperationAborted,
            ErrorCode::Configuration => HwCryptoStatus::Configuration,
        }
    }
}

/// FFI Result structure for returning data and error status
///
/// Byte results fill `data`/`data_len`; boolean results use `flag`. Release
/// with `hwcrypto_free_result`.
#[repr(C)]
pub struct HwCryptoResult {
    pub status: HwCryptoStatus,
    pub data: *mut c_uchar,
    pub data_len: c_uint,
    pub flag: bool,
    pub error_message: *mut c_char,
}

impl HwCryptoResult {
    pub fn success(data: Vec<u8>) -> Self {
        let mut boxed_data = data.into_boxed_slice();
        let data_ptr = boxed_data.as_mut_ptr();
        let data_len = boxed_data.len() as c_uint;
        std::mem::forget(boxed_data); // Released by hwcrypto_free_result

        Self {
            status: HwCryptoStatus::Success,
            data: data_ptr,
            data_len,
            flag: true,
            error_message: ptr::null_mut(),
        }
    }

    pub fn flag(flag: bool) -> Self {
        Self {
            status: HwCryptoStatus::Success,
            data: ptr::null_mut(),
            data_len: 0,
            flag,
            error_message: ptr::null_mut(),
        }
    }

    pub fn error(status: HwCryptoStatus, message: &str) -> Self {
        let c_message = CString::new(message.replace('\0', " ")).unwrap_or_default();

        Self {
            status,
            data: ptr::null_mut(),
            data_len: 0,
            flag: false,
            error_message: c_message.into_raw(),
        }
    }

    pub fn from_api_error(error: &ApiError) -> Self {
        Self::error(error.code().into(), &error.to_string())
    }

    pub fn success_boxed(data: Vec<u8>) -> *mut HwCryptoResult {
        Box::into_raw(Box::new(Self::success(data)))
    }

    pub fn flag_boxed(flag: bool) -> *mut HwCryptoResult {
        Box::into_raw(Box::new(Self::flag(flag)))
    }

    pub fn error_boxed(status: HwCryptoStatus, message: &str) -> *mut HwCryptoResult {
        Box::into_raw(Box::new(Self::error(status, message)))
    }

    pub fn api_error_boxed(error: &ApiError) -> *mut HwCryptoResult {
        Box::into_raw(Box::new(Self::from_api_error(error)))
    }
}
