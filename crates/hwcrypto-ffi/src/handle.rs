//! Lifetime of the core object behind the C ABI

use std::{os::raw::c_char, path::Path, ptr};

use hwcrypto_api::{HardwareCrypto, Settings};

use crate::utils::optional_str;

/// Opaque handle owning one core instance
pub struct HwCrypto {
    pub(crate) core: HardwareCrypto,
}

/// Open a core on `storage_root`, or on the per-user default when null
///
/// Returns null if the storage root cannot be used. Release with
/// `hwcrypto_free`.
#[no_mangle]
pub extern "C" fn hwcrypto_new(storage_root: *const c_char) -> *mut HwCrypto {
    let root = match unsafe { optional_str(storage_root, "storage root is not valid UTF-8") } {
        Ok(root) => root,
        Err((_, message)) => {
            tracing::warn!("{}", message);
            return ptr::null_mut();
        }
    };

    match HardwareCrypto::open(root.map(Path::new)) {
        Ok(core) => Box::into_raw(Box::new(HwCrypto { core })),
        Err(e) => {
            tracing::warn!(error = %e, "cannot open hardware crypto core");
            ptr::null_mut()
        }
    }
}

/// Open a core configured by the TOML file at `config_path`
///
/// Returns null if the file cannot be loaded or the storage root cannot be
/// used.
#[no_mangle]
pub extern "C" fn hwcrypto_new_with_config(config_path: *const c_char) -> *mut HwCrypto {
    let path = match unsafe { optional_str(config_path, "config path is not valid UTF-8") } {
        Ok(Some(path)) => path,
        Ok(None) => return ptr::null_mut(),
        Err((_, message)) => {
            tracing::warn!("{}", message);
            return ptr::null_mut();
        }
    };

    match Settings::load(path).and_then(|settings| HardwareCrypto::from_settings(&settings)) {
        Ok(core) => Box::into_raw(Box::new(HwCrypto { core })),
        Err(e) => {
            tracing::warn!(error = %e, "cannot open hardware crypto core");
            ptr::null_mut()
        }
    }
}

/// Release a handle returned by `hwcrypto_new`
#[no_mangle]
pub extern "C" fn hwcrypto_free(handle: *mut HwCrypto) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}
