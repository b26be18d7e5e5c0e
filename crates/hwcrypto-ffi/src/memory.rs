//! Releasing results and library version

use std::{ffi::CString, os::raw::c_char, ptr};

use zeroize::Zeroize;

use crate::types::HwCryptoResult;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Free a result returned by any operation
///
/// The data buffer is wiped before it is released.
#[no_mangle]
pub extern "C" fn hwcrypto_free_result(result: *mut HwCryptoResult) {
    if result.is_null() {
        return;
    }

    unsafe {
        let result = Box::from_raw(result);

        if let Some(mut data) = reclaim_data(&result) {
            data.zeroize();
        }

        if !result.error_message.is_null() {
            let _ = CString::from_raw(result.error_message);
        }
    }
}

/// Library version as a static NUL-terminated string; do not free
#[no_mangle]
pub extern "C" fn hwcrypto_get_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// Takes back ownership of the buffer `HwCryptoResult::success` leaked
///
/// # Safety
///
/// `result.data` must be null or come from `HwCryptoResult::success` and not
/// have been reclaimed yet.
unsafe fn reclaim_data(result: &HwCryptoResult) -> Option<Box<[u8]>> {
    if result.data.is_null() || result.data_len == 0 {
        return None;
    }
    let slice = ptr::slice_from_raw_parts_mut(result.data, result.data_len as usize);
    Some(Box::from_raw(slice))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reclaimed_data_is_wiped() {
        let signature = vec![0x30, 0x45, 0x02, 0x20, 0xab, 0xcd];
        let result = HwCryptoResult::success(signature.clone());

        let mut data = unsafe { reclaim_data(&result) }.unwrap();
        assert_eq!(&data[..], &signature[..]);
        data.zeroize();
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_flag_and_error_results_carry_no_data() {
        let flag = HwCryptoResult::flag(true);
        assert!(unsafe { reclaim_data(&flag) }.is_none());

        let error = HwCryptoResult::error_boxed(crate::HwCryptoStatus::KeyNotFound, "missing");
        assert!(unsafe { reclaim_data(&*error) }.is_none());
        hwcrypto_free_result(error);
    }
}
