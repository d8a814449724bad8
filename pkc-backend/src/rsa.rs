use ::rsa::traits::{Decryptor, RandomizedEncryptor};
use ::rsa::{RsaPrivateKey, RsaPublicKey, oaep};
use ::sha1::Sha1;
use num_bigint_dig::BigUint;

use pkc_rsa::RsaKeyParameters;

use crate::error::BackendError;

/**
    RSA-OAEP-SHA1 encryption capability built from (modulus, public_exponent).

    Parameters match the classic provider string
    `RSA/None/OAEPWithSHA1AndMGF1Padding`:
      Hash: SHA-1
      MGF: MGF1-SHA-1
      Label: empty
*/
pub struct RsaOaepEncryptor {
    key: oaep::EncryptingKey<Sha1>,
}

impl RsaOaepEncryptor {
    pub fn from_components(
        modulus: BigUint,
        public_exponent: BigUint,
    ) -> Result<Self, BackendError> {
        let key = RsaPublicKey::new(modulus, public_exponent)
            .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        Ok(RsaOaepEncryptor {
            key: oaep::EncryptingKey::new(key),
        })
    }

    /// Encrypt a message under OAEP. Randomized: two ciphertexts of the
    /// same plaintext differ.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, BackendError> {
        let mut rng = ::rsa::rand_core::OsRng;
        self.key
            .encrypt_with_rng(&mut rng, plaintext)
            .map_err(|e| BackendError::RsaOperation(e.to_string()))
    }
}

/**
    RSA-OAEP-SHA1 decryption capability built from the CRT parameter set
    produced by [`pkc_rsa::derive_rsa_parameters`].
*/
pub struct RsaOaepDecryptor {
    key: oaep::DecryptingKey<Sha1>,
}

impl RsaOaepDecryptor {
    pub fn from_parameters(params: RsaKeyParameters) -> Result<Self, BackendError> {
        let key = RsaPrivateKey::from_components(
            params.modulus,
            params.public_exponent,
            params.private_exponent,
            vec![params.prime1, params.prime2],
        )
        .map_err(|e| BackendError::KeyRejected(e.to_string()))?;
        Ok(RsaOaepDecryptor {
            key: oaep::DecryptingKey::new(key),
        })
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, BackendError> {
        self.key
            .decrypt(ciphertext)
            .map_err(|e| BackendError::RsaOperation(e.to_string()))
    }
}
