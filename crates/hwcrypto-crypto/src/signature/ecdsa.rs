//! ECDSA over P-256 with SHA-256
//!
//! Signing is randomized: fresh OS randomness is mixed into every nonce, so
//! two signatures over the same message differ. DER is the interchange
//! encoding at the API boundary; P1363 is what the curve backend produces.

use p256::{
    ecdsa::{
        signature::{RandomizedSigner, Verifier},
        Signature,
    },
    elliptic_curve::rand_core::OsRng,
};

use crate::{
    asymmetric::p256::{PrivateKey, PublicKey, SCALAR_SIZE},
    encoding::{der_to_p1363, p1363_to_der},
    error::{Error, Result},
};

/// Sign `message`, returning a DER encoded signature
pub fn sign(private_key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let p1363 = sign_p1363(private_key, message)?;
    p1363_to_der(&p1363, SCALAR_SIZE).map_err(|e| Error::SigningFailed(e.to_string()))
}

/// Sign `message`, returning the fixed-width `r || s` encoding
pub fn sign_p1363(private_key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>> {
    let signature: Signature = private_key
        .signing_key()
        .try_sign_with_rng(&mut OsRng, message)
        .map_err(|e| Error::SigningFailed(e.to_string()))?;
    Ok(signature.to_bytes().to_vec())
}

/// Verify a DER encoded signature
///
/// Fail-closed: malformed encodings and mismatches both yield `false`.
pub fn verify(public_key: &PublicKey, message: &[u8], der_signature: &[u8]) -> bool {
    match der_to_p1363(der_signature, SCALAR_SIZE) {
        Ok(p1363) => verify_p1363(public_key, message, &p1363),
        Err(e) => {
            tracing::debug!("rejecting signature: {}", e);
            false
        }
    }
}

/// Verify a fixed-width `r || s` signature
pub fn verify_p1363(public_key: &PublicKey, message: &[u8], p1363_signature: &[u8]) -> bool {
    let signature = match Signature::from_slice(p1363_signature) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    public_key
        .verifying_key()
        .verify(message, &signature)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{asymmetric::p256::generate_key_pair, encoding::max_der_len};

    const MESSAGE: &[u8] = b"Hello world!";

    #[test]
    fn test_sign_verify() {
        let (private_key, public_key) = generate_key_pair().unwrap();
        let signature = sign(&private_key, MESSAGE).unwrap();
        assert!(verify(&public_key, MESSAGE, &signature));
    }

    #[test]
    fn test_der_layout() {
        let (private_key, _) = generate_key_pair().unwrap();
        let signature = sign(&private_key, MESSAGE).unwrap();

        assert_eq!(signature[0], 0x30);
        assert_eq!(signature[1] as usize, signature.len() - 2);
        assert!(signature.len() <= max_der_len(SCALAR_SIZE));
    }

    #[test]
    fn test_der_matches_backend_encoding() {
        let (private_key, _) = generate_key_pair().unwrap();
        let p1363 = sign_p1363(&private_key, MESSAGE).unwrap();
        let ours = p1363_to_der(&p1363, SCALAR_SIZE).unwrap();
        let theirs = Signature::from_slice(&p1363).unwrap().to_der();
        assert_eq!(ours.as_slice(), theirs.as_bytes());
    }

    #[test]
    fn test_signatures_are_randomized() {
        let (private_key, public_key) = generate_key_pair().unwrap();
        let first = sign(&private_key, MESSAGE).unwrap();
        let second = sign(&private_key, MESSAGE).unwrap();

        assert_ne!(first, second);
        assert!(verify(&public_key, MESSAGE, &first));
        assert!(verify(&public_key, MESSAGE, &second));
    }

    #[test]
    fn test_flipped_byte_is_rejected_at_every_position() {
        let (private_key, public_key) = generate_key_pair().unwrap();
        let signature = sign(&private_key, MESSAGE).unwrap();

        for position in 0..signature.len() {
            let mut tampered = signature.clone();
            tampered[position] ^= 0x01;
            assert!(
                !verify(&public_key, MESSAGE, &tampered),
                "flip at byte {} was accepted",
                position
            );
        }
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let (alice, _) = generate_key_pair().unwrap();
        let (_, bob_public) = generate_key_pair().unwrap();
        let signature = sign(&alice, MESSAGE).unwrap();
        assert!(!verify(&bob_public, MESSAGE, &signature));
    }

    #[test]
    fn test_wrong_message_is_rejected() {
        let (private_key, public_key) = generate_key_pair().unwrap();
        let signature = sign(&private_key, MESSAGE).unwrap();
        assert!(!verify(&public_key, b"Hello world?", &signature));
    }

    #[test]
    fn test_malformed_signatures_are_rejected() {
        let (_, public_key) = generate_key_pair().unwrap();
        assert!(!verify(&public_key, MESSAGE, &[]));
        assert!(!verify(&public_key, MESSAGE, &[0x30, 0x00]));
        assert!(!verify_p1363(&public_key, MESSAGE, &[0u8; 63]));
        assert!(!verify_p1363(&public_key, MESSAGE, &[0u8; 64]));
    }

    #[test]
    fn test_p1363_sign_verify() {
        let (private_key, public_key) = generate_key_pair().unwrap();
        let signature = sign_p1363(&private_key, MESSAGE).unwrap();
        assert_eq!(signature.len(), 2 * SCALAR_SIZE);
        assert!(verify_p1363(&public_key, MESSAGE, &signature));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn sign_then_verify(message in proptest::collection::vec(any::<u8>(), 0..256)) {
            let (private_key, public_key) = generate_key_pair().unwrap();
            let signature = sign(&private_key, &message).unwrap();

            prop_assert!(verify(&public_key, &message, &signature));

            let p1363 = der_to_p1363(&signature, SCALAR_SIZE).unwrap();
            prop_assert_eq!(p1363_to_der(&p1363, SCALAR_SIZE).unwrap(), signature);
        }
    }
}
