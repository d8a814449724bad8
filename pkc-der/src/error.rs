use thiserror::Error;

/**
    Errors from DER signature encoding.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("sequence content is {total} bytes, short-form DER length tops out at 127")]
    Oversize { total: usize },
}

/**
    Errors from DER signature decoding.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    #[error("expected SEQUENCE tag 0x30, found {0:#04x}")]
    NotASequence(u8),

    #[error("expected INTEGER tag 0x02, found {0:#04x}")]
    NotAnInteger(u8),

    #[error("buffer ends {missing} bytes short at offset {at}")]
    Truncated { at: usize, missing: usize },

    #[error("unsupported length encoding ({0:#04x})")]
    BadLength(u8),

    #[error("INTEGER with empty body")]
    EmptyInteger,

    #[error("{0} bytes of trailing data")]
    TrailingBytes(usize),
}
