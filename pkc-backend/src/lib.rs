/*!
    Cryptographic provider seam: per-algorithm capability objects built
    from raw numeric key material.

    The classic provider pattern registers a backend in process-global
    state and builds key objects ambiently. Here every capability is an
    explicit object instead — the handle carries all of its state, there is
    no registration step and nothing to initialize twice, and two backends
    share nothing.

    Signature backends speak the DER (r, s) encoding from [`pkc_der`]:
    `sign` returns it and `verify` consumes it, with malformed DER surfaced
    as an error rather than a failed verification. RSA decryption consumes
    the CRT parameter set from [`pkc_rsa`]. The underlying number-theoretic
    work is delegated to the `dsa`, `p256` and `rsa` crates.
*/

mod bytes;
mod dsa;
mod ecdsa;
mod error;
mod rsa;

pub use self::dsa::{DsaSigner, DsaVerifier};
pub use self::ecdsa::{EcdsaP256Signer, EcdsaP256Verifier};
pub use self::error::BackendError;
pub use self::rsa::{RsaOaepDecryptor, RsaOaepEncryptor};
