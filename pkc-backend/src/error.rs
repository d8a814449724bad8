use thiserror::Error;

/// Errors from provider-backed key construction and use.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("key material rejected: {0}")]
    KeyRejected(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("signature components out of range: {0}")]
    MalformedSignature(String),

    #[error("RSA operation failed: {0}")]
    RsaOperation(String),

    #[error("value does not fit a {width}-byte field")]
    FieldOverflow { width: usize },

    #[error("signature encoding failed: {0}")]
    Encoding(#[from] pkc_der::EncodingError),

    #[error("signature decoding failed: {0}")]
    Decoding(#[from] pkc_der::DecodingError),

    #[error("invalid RSA key: {0}")]
    InvalidKey(#[from] pkc_rsa::InvalidKeyError),
}
