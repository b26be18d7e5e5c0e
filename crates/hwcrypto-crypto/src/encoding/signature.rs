//! Conversion between IEEE P1363 and ASN.1 DER ECDSA signatures
//!
//! P1363 is the fixed-width concatenation `r || s`, each half exactly
//! `order_size` bytes. DER is `SEQUENCE { r INTEGER, s INTEGER }` with minimal,
//! non-negative integers.

use der::{asn1::UintRef, Decode, Encode, Sequence};

use crate::error::{Error, Result};

#[derive(Sequence)]
struct EcdsaSigValue<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// Worst-case DER length for a curve whose order is `order_size` bytes wide
///
/// Sequence header plus two integer headers (up to three bytes each), the two
/// length bytes of a long-form header, and one sign-padding byte per integer.
pub const fn max_der_len(order_size: usize) -> usize {
    3 + 3 + 3 + 2 + 2 * order_size
}

/// Encode a P1363 signature as DER
pub fn p1363_to_der(p1363: &[u8], order_size: usize) -> Result<Vec<u8>> {
    if order_size == 0 || p1363.len() != 2 * order_size {
        return Err(Error::InvalidSignatureEncoding(format!(
            "expected {} bytes of P1363 signature, got {}",
            2 * order_size,
            p1363.len()
        )));
    }

    let (r, s) = p1363.split_at(order_size);
    let value = EcdsaSigValue {
        r: UintRef::new(r).map_err(der_error)?,
        s: UintRef::new(s).map_err(der_error)?,
    };
    value.to_der().map_err(der_error)
}

/// Decode a DER signature into P1363 with each half `order_size` bytes wide
pub fn der_to_p1363(der: &[u8], order_size: usize) -> Result<Vec<u8>> {
    if order_size == 0 {
        return Err(Error::InvalidSignatureEncoding(
            "curve order size must be non-zero".to_string(),
        ));
    }

    let value = EcdsaSigValue::from_der(der).map_err(der_error)?;

    let mut p1363 = vec![0u8; 2 * order_size];
    let (r, s) = p1363.split_at_mut(order_size);
    left_pad(value.r.as_bytes(), r, "r")?;
    left_pad(value.s.as_bytes(), s, "s")?;
    Ok(p1363)
}

fn left_pad(magnitude: &[u8], out: &mut [u8], name: &str) -> Result<()> {
    if magnitude.len() > out.len() {
        return Err(Error::InvalidSignatureEncoding(format!(
            "{} is {} bytes, wider than the {}-byte curve order",
            name,
            magnitude.len(),
            out.len()
        )));
    }
    let offset = out.len() - magnitude.len();
    out[offset..].copy_from_slice(magnitude);
    Ok(())
}

fn der_error(err: der::Error) -> Error {
    Error::InvalidSignatureEncoding(err.to_string())
}
