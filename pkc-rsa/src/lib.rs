/*!
    RSA private-key parameter derivation.

    An RSA private key is fully determined by its two prime factors and the
    exponent pair, but key-construction APIs want the whole CRT parameter
    set. [`derive_rsa_parameters`] reconstructs it: the modulus, both CRT
    exponents and the CRT coefficient, with the non-coprime and degenerate
    prime cases surfaced as explicit errors instead of arithmetic faults.
*/

mod error;
mod params;

pub use self::error::InvalidKeyError;
pub use self::params::{RsaKeyParameters, derive_rsa_parameters};
