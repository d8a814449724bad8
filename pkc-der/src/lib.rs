/*!
    ASN.1 DER codec for two-integer signature values.

    DSA and ECDSA signatures are a pair of non-negative big integers (r, s)
    that travel on the wire as `SEQUENCE { INTEGER r, INTEGER s }`:

    `30 LL 02 L1 <r bytes> 02 L2 <s bytes>`

    This crate converts between the pair and that exact shape, nothing more.
    It is not a general ASN.1 parser: nested fields, third integers and
    trailing bytes are rejected, and encoding is restricted to short-form
    lengths (always sufficient for integers up to 256 bits).
*/

mod error;
mod reader;
mod signature;

pub use self::error::{DecodingError, EncodingError};
pub use self::reader::Reader;
pub use self::signature::{SignaturePair, decode_der_signature, encode_der_signature};
