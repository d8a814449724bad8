use ::p256::ecdsa::signature::{Signer, Verifier};
use ::p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use ::p256::{EncodedPoint, FieldBytes};
use num_bigint_dig::BigUint;

use pkc_der::{SignaturePair, decode_der_signature, encode_der_signature};

use crate::bytes::to_fixed_be;
use crate::error::BackendError;

/**
    ECDSA-P256-SHA256 signing capability built from a raw private scalar.

    Signing is deterministic (RFC 6979), hashes the message with SHA-256
    internally, and returns the signature in the DER (r, s) encoding.
*/
#[derive(Debug)]
pub struct EcdsaP256Signer {
    key: SigningKey,
}

impl EcdsaP256Signer {
    /// Build a signer from the private scalar d, 0 < d < n.
    pub fn from_scalar(d: &BigUint) -> Result<Self, BackendError> {
        let bytes: [u8; 32] = to_fixed_be(d)?;
        let key = SigningKey::from_bytes(&bytes.into())
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        Ok(EcdsaP256Signer { key })
    }

    /// Sign a message, returning `SEQUENCE { INTEGER r, INTEGER s }` bytes.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, BackendError> {
        let signature: Signature = self.key.sign(message);
        let (r, s) = signature.split_bytes();
        Ok(encode_der_signature(
            &BigUint::from_bytes_be(&r),
            &BigUint::from_bytes_be(&s),
        )?)
    }
}

/**
    ECDSA-P256-SHA256 verification capability built from the affine
    coordinates of the public point.
*/
#[derive(Debug)]
pub struct EcdsaP256Verifier {
    key: VerifyingKey,
}

impl EcdsaP256Verifier {
    pub fn from_affine(x: &BigUint, y: &BigUint) -> Result<Self, BackendError> {
        let x: [u8; 32] = to_fixed_be(x)?;
        let y: [u8; 32] = to_fixed_be(y)?;
        let point = EncodedPoint::from_affine_coordinates(&x.into(), &y.into(), false);
        let key = VerifyingKey::from_encoded_point(&point)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        Ok(EcdsaP256Verifier { key })
    }

    /**
        Verify a DER-encoded signature over `message`.

        Malformed DER and out-of-range components are errors, not
        `Ok(false)`; only a well-formed signature that fails the curve
        check verifies false.
    */
    pub fn verify(&self, message: &[u8], der: &[u8]) -> Result<bool, BackendError> {
        let SignaturePair { r, s } = decode_der_signature(der)?;
        let r: [u8; 32] = to_fixed_be(&r)?;
        let s: [u8; 32] = to_fixed_be(&s)?;
        let signature = Signature::from_scalars(FieldBytes::from(r), FieldBytes::from(s))
            .map_err(|e| BackendError::MalformedSignature(e.to_string()))?;
        Ok(self.key.verify(message, &signature).is_ok())
    }
}
