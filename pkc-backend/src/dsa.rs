use ::dsa::{Components, Signature, SigningKey, VerifyingKey};
use ::sha2::{Digest, Sha256};
use ::signature::{DigestSigner, DigestVerifier};
use num_bigint_dig::BigUint;

use pkc_der::{SignaturePair, decode_der_signature, encode_der_signature};

use crate::error::BackendError;

/**
    DSA-SHA256 signing capability built from the domain parameters
    (p, q, g) and the key pair integers (y public, x private).

    Signing is deterministic (RFC 6979) over a SHA-256 digest of the
    message and returns the signature in the DER (r, s) encoding.
*/
pub struct DsaSigner {
    key: SigningKey,
}

impl DsaSigner {
    pub fn from_components(
        p: BigUint,
        q: BigUint,
        g: BigUint,
        y: BigUint,
        x: BigUint,
    ) -> Result<Self, BackendError> {
        let components = Components::from_components(p, q, g)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        let verifying_key = VerifyingKey::from_components(components, y)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        let key = SigningKey::from_components(verifying_key, x)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        Ok(DsaSigner { key })
    }

    /// Sign a message, returning `SEQUENCE { INTEGER r, INTEGER s }` bytes.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, BackendError> {
        let signature: Signature = self
            .key
            .try_sign_digest(Sha256::new_with_prefix(message))
            .map_err(|e| BackendError::Signing(e.to_string()))?;
        Ok(encode_der_signature(signature.r(), signature.s())?)
    }
}

/**
    DSA-SHA256 verification capability built from the domain parameters
    (p, q, g) and the public key integer y.
*/
pub struct DsaVerifier {
    key: VerifyingKey,
}

impl DsaVerifier {
    pub fn from_components(
        p: BigUint,
        q: BigUint,
        g: BigUint,
        y: BigUint,
    ) -> Result<Self, BackendError> {
        let components = Components::from_components(p, q, g)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        let key = VerifyingKey::from_components(components, y)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        Ok(DsaVerifier { key })
    }

    /**
        Verify a DER-encoded signature over `message`.

        Malformed DER and zero components are errors, not `Ok(false)`.
    */
    pub fn verify(&self, message: &[u8], der: &[u8]) -> Result<bool, BackendError> {
        let SignaturePair { r, s } = decode_der_signature(der)?;
        let signature = Signature::from_components(r, s)
            .map_err(|e| BackendError::MalformedSignature(e.to_string()))?;
        Ok(self
            .key
            .verify_digest(Sha256::new_with_prefix(message), &signature)
            .is_ok())
    }
}
