use num_bigint_dig::{BigUint, ModInverse};
use num_traits::One;

use crate::error::InvalidKeyError;

/**
    Full RSA private-key material in CRT form, as consumed by private-key
    constructors (the field set of a PKCS#1 `RSAPrivateKey`).

    Invariants, established by [`derive_rsa_parameters`]:
    - `modulus = prime1 * prime2`
    - `exponent1 = private_exponent mod (prime1 - 1)`
    - `exponent2 = private_exponent mod (prime2 - 1)`
    - `coefficient = prime2⁻¹ mod prime1`

    Constructed once per key and read-only afterwards.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyParameters {
    pub modulus: BigUint,
    pub public_exponent: BigUint,
    pub private_exponent: BigUint,
    pub prime1: BigUint,
    pub prime2: BigUint,
    pub exponent1: BigUint,
    pub exponent2: BigUint,
    pub coefficient: BigUint,
}

/**
    Derive the full CRT parameter set from two prime factors and the
    public/private exponent pair.

    Pure and deterministic: no randomness, no I/O, no hidden state. Fails
    with [`InvalidKeyError::DegeneratePrime`] when a factor is below 2 (the
    CRT exponent reduction would divide by zero) and with
    [`InvalidKeyError::NotCoprime`] when the factors share a divisor, in
    which case no CRT coefficient exists. Primality itself is not checked;
    that is the key generator's contract.
*/
pub fn derive_rsa_parameters(
    prime1: BigUint,
    prime2: BigUint,
    public_exponent: BigUint,
    private_exponent: BigUint,
) -> Result<RsaKeyParameters, InvalidKeyError> {
    let one = BigUint::one();
    if prime1 <= one {
        return Err(InvalidKeyError::DegeneratePrime(prime1));
    }
    if prime2 <= one {
        return Err(InvalidKeyError::DegeneratePrime(prime2));
    }

    let modulus = &prime1 * &prime2;
    let exponent1 = &private_exponent % (&prime1 - &one);
    let exponent2 = &private_exponent % (&prime2 - &one);

    // No inverse means gcd(prime1, prime2) != 1: the supplied "primes"
    // are not actually coprime.
    let coefficient = (&prime2)
        .mod_inverse(&prime1)
        .and_then(|inverse| inverse.to_biguint())
        .ok_or(InvalidKeyError::NotCoprime)?;

    Ok(RsaKeyParameters {
        modulus,
        public_exponent,
        private_exponent,
        prime1,
        prime2,
        exponent1,
        exponent2,
        coefficient,
    })
}
