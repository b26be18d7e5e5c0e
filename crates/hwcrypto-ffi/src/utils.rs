//! FFI utility functions

use std::{
    ffi::CStr,
    os::raw::{c_char, c_uchar, c_uint},
    slice,
};

use crate::types::HwCryptoStatus;

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) type InputError = (HwCryptoStatus, &'static str);

/// Borrow a NUL-terminated UTF-8 string; `None` for a null pointer
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
pub(crate) unsafe fn optional_str<'a>(
    ptr: *const c_char,
    what: &'static str,
) -> Result<Option<&'a str>, InputError> {
    if ptr.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(Some)
        .map_err(|_| (HwCryptoStatus::InvalidInput, what))
}

/// Borrow `len` bytes; `None` for a null pointer
///
/// # Safety
/// `ptr` must be null or valid for reads of `len` bytes for `'a`.
pub(crate) unsafe fn optional_bytes<'a>(ptr: *const c_uchar, len: c_uint) -> Option<&'a [u8]> {
    if ptr.is_null() {
        None
    } else {
        Some(slice::from_raw_parts(ptr, len as usize))
    }
}
