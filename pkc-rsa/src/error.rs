use num_bigint_dig::BigUint;
use thiserror::Error;

/**
    Errors from RSA private-key parameter derivation.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    #[error("prime factor {0} is too small to form a modulus")]
    DegeneratePrime(BigUint),

    #[error("prime factors are not coprime, no CRT coefficient exists")]
    NotCoprime,
}
