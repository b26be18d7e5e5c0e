//! Key custody and signing operations

use std::os::raw::{c_char, c_uchar, c_uint};

use hwcrypto_api::HardwareCrypto;

use crate::{
    handle::HwCrypto,
    types::{HwCryptoResult, HwCryptoStatus},
    utils::{optional_bytes, optional_str, InputError},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the handle and alias, falling back to the configured default alias
///
/// # Safety
/// `handle` must be null or a live handle; `alias` as for `optional_str`.
unsafe fn resolve<'a>(
    handle: *const HwCrypto,
    alias: *const c_char,
) -> Result<(&'a HardwareCrypto, String), InputError> {
    let core = match handle.as_ref() {
        Some(handle) => &handle.core,
        None => return Err((HwCryptoStatus::InvalidInput, "handle is null")),
    };
    let alias = optional_str(alias, "alias is not valid UTF-8")?
        .unwrap_or(core.default_alias())
        .to_string();
    Ok((core, alias))
}

fn input_error((status, message): InputError) -> *mut HwCryptoResult {
    HwCryptoResult::error_boxed(status, message)
}

// ============================================================================
// Operations
// ============================================================================

/// Whether this platform can hold keys; always true for the software backend
#[no_mangle]
pub extern "C" fn hwcrypto_is_supported() -> bool {
    true
}

/// Generate a key pair under `alias` (null for the default alias)
///
/// `flag` is true on success. An existing key is replaced.
#[no_mangle]
pub extern "C" fn hwcrypto_generate_key_pair(
    handle: *const HwCrypto,
    alias: *const c_char,
) -> *mut HwCryptoResult {
    let (core, alias) = match unsafe { resolve(handle, alias) } {
        Ok(resolved) => resolved,
        Err(e) => return input_error(e),
    };

    match core.generate_key_pair(&alias) {
        Ok(generated) => HwCryptoResult::flag_boxed(generated),
        Err(e) => HwCryptoResult::api_error_boxed(&e),
    }
}

/// Delete the key under `alias` (null for the default alias)
///
/// `flag` tells whether a key existed.
#[no_mangle]
pub extern "C" fn hwcrypto_delete_key_pair(
    handle: *const HwCrypto,
    alias: *const c_char,
) -> *mut HwCryptoResult {
    let (core, alias) = match unsafe { resolve(handle, alias) } {
        Ok(resolved) => resolved,
        Err(e) => return input_error(e),
    };

    match core.delete_key_pair(&alias) {
        Ok(deleted) => HwCryptoResult::flag_boxed(deleted),
        Err(e) => HwCryptoResult::api_error_boxed(&e),
    }
}

/// Sign `message` with the key under `alias`, returning a DER signature
///
/// A null `alias` selects the default alias; a null `message` signs the
/// default challenge.
#[no_mangle]
pub extern "C" fn hwcrypto_sign(
    handle: *const HwCrypto,
    alias: *const c_char,
    message: *const c_uchar,
    message_len: c_uint,
) -> *mut HwCryptoResult {
    let (core, alias) = match unsafe { resolve(handle, alias) } {
        Ok(resolved) => resolved,
        Err(e) => return input_error(e),
    };
    let message = unsafe { optional_bytes(message, message_len) }.unwrap_or(core.default_message());

    match core.sign(&alias, message) {
        Ok(signature) => HwCryptoResult::success_boxed(signature),
        Err(e) => HwCryptoResult::api_error_boxed(&e),
    }
}

/// Verify a DER signature against a SEC1 public key
///
/// False for any malformed input.
#[no_mangle]
pub extern "C" fn hwcrypto_verify(
    handle: *const HwCrypto,
    public_key: *const c_uchar,
    public_key_len: c_uint,
    message: *const c_uchar,
    message_len: c_uint,
    signature: *const c_uchar,
    signature_len: c_uint,
) -> bool {
    let core = match unsafe { handle.as_ref() } {
        Some(handle) => &handle.core,
        None => return false,
    };
    let (public_key, message, signature) = unsafe {
        match (
            optional_bytes(public_key, public_key_len),
            optional_bytes(message, message_len),
            optional_bytes(signature, signature_len),
        ) {
            (Some(public_key), Some(message), Some(signature)) => (public_key, message, signature),
            _ => return false,
        }
    };

    core.verify(public_key, message, signature)
}

/// Export the uncompressed SEC1 public key (65 bytes) of the key under `alias`
#[no_mangle]
pub extern "C" fn hwcrypto_export_public_key(
    handle: *const HwCrypto,
    alias: *const c_char,
) -> *mut HwCryptoResult {
    let (core, alias) = match unsafe { resolve(handle, alias) } {
        Ok(resolved) => resolved,
        Err(e) => return input_error(e),
    };

    match core.export_public_key(&alias) {
        Ok(public_key) => HwCryptoResult::success_boxed(public_key),
        Err(e) => HwCryptoResult::api_error_boxed(&e),
    }
}

/// Store a PKCS#8 or SEC1 PEM private key under `alias`
#[no_mangle]
pub extern "C" fn hwcrypto_import_pem_key(
    handle: *const HwCrypto,
    alias: *const c_char,
    pem: *const c_char,
) -> *mut HwCryptoResult {
    let (core, alias) = match unsafe { resolve(handle, alias) } {
        Ok(resolved) => resolved,
        Err(e) => return input_error(e),
    };
    let pem = match unsafe { optional_str(pem, "PEM is not valid UTF-8") } {
        Ok(Some(pem)) => pem,
        Ok(None) => {
            return HwCryptoResult::error_boxed(HwCryptoStatus::InvalidInput, "PEM is null")
        }
        Err(e) => return input_error(e),
    };

    match core.import_pem_key(&alias, pem) {
        Ok(imported) => HwCryptoResult::flag_boxed(imported),
        Err(e) => HwCryptoResult::api_error_boxed(&e),
    }
}
