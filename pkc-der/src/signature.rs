use num_bigint_dig::BigUint;

use crate::error::{DecodingError, EncodingError};
use crate::reader::Reader;

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/**
    A decoded (r, s) signature value pair.

    Both components are non-negative by construction. The codec enforces no
    relationship between them; range checks against the group order belong
    to the signature algorithm, not the encoding.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignaturePair {
    pub r: BigUint,
    pub s: BigUint,
}

impl SignaturePair {
    pub fn new(r: BigUint, s: BigUint) -> Self {
        SignaturePair { r, s }
    }

    /// Encode as `SEQUENCE { INTEGER r, INTEGER s }`. See [`encode_der_signature`].
    pub fn to_der(&self) -> Result<Vec<u8>, EncodingError> {
        encode_der_signature(&self.r, &self.s)
    }

    /// Decode from DER bytes. See [`decode_der_signature`].
    pub fn from_der(der: &[u8]) -> Result<Self, DecodingError> {
        decode_der_signature(der)
    }
}

/// Minimal big-endian INTEGER body: no leading zeros beyond the single
/// mandatory sign-padding byte. DER INTEGERs are two's-complement, so a
/// non-negative value whose top bit is set must be prefixed with 0x00 or
/// it reads back negative.
fn integer_body(value: &BigUint) -> Vec<u8> {
    let bytes = value.to_bytes_be(); // `[0x00]` for zero, no leading zeros otherwise
    if bytes[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(bytes.len() + 1);
        padded.push(0x00);
        padded.extend_from_slice(&bytes);
        padded
    } else {
        bytes
    }
}

/**
    Encode an (r, s) pair as the DER `SEQUENCE { INTEGER r, INTEGER s }`
    used by DSA and ECDSA signatures:

    `30 LL 02 L1 <r bytes> 02 L2 <s bytes>`

    Short-form lengths only. Two 256-bit integers with sign padding come to
    70 content bytes (72 total), well under the 128-byte short-form ceiling,
    but the ceiling is still checked so that oversize input fails instead of
    letting the length byte wrap.
*/
pub fn encode_der_signature(r: &BigUint, s: &BigUint) -> Result<Vec<u8>, EncodingError> {
    let rb = integer_body(r);
    let sb = integer_body(s);

    let total = 2 + rb.len() + 2 + sb.len();
    if total >= 0x80 {
        return Err(EncodingError::Oversize { total });
    }

    let mut der = Vec::with_capacity(2 + total);
    der.push(TAG_SEQUENCE);
    der.push(total as u8);
    der.push(TAG_INTEGER);
    der.push(rb.len() as u8);
    der.extend_from_slice(&rb);
    der.push(TAG_INTEGER);
    der.push(sb.len() as u8);
    der.extend_from_slice(&sb);
    Ok(der)
}

/**
    Decode a DER `SEQUENCE { INTEGER r, INTEGER s }` back into its value pair.

    The SEQUENCE header accepts both short-form and long-form lengths: some
    encoders emit `30 81 LL ...` even for payloads under 128 bytes, and the
    first INTEGER must still be located correctly. INTEGER bodies are read
    as unsigned big-endian with any sign-padding byte stripped by
    [`BigUint::from_bytes_be`].

    Exactly two INTEGERs are accepted. Wrong tags, lengths running past the
    end of the buffer, extra fields inside the SEQUENCE and bytes after it
    are all [`DecodingError`]s.
*/
pub fn decode_der_signature(der: &[u8]) -> Result<SignaturePair, DecodingError> {
    let mut reader = Reader::new(der);

    let tag = reader.read_u8()?;
    if tag != TAG_SEQUENCE {
        return Err(DecodingError::NotASequence(tag));
    }

    // The declared content length must cover the rest of the buffer exactly.
    let content_len = read_sequence_length(&mut reader)?;
    if content_len > reader.remaining() {
        return Err(DecodingError::Truncated {
            at: reader.position(),
            missing: content_len - reader.remaining(),
        });
    }
    if content_len < reader.remaining() {
        return Err(DecodingError::TrailingBytes(reader.remaining() - content_len));
    }

    let r = read_integer(&mut reader)?;
    let s = read_integer(&mut reader)?;

    if !reader.is_empty() {
        return Err(DecodingError::TrailingBytes(reader.remaining()));
    }

    Ok(SignaturePair { r, s })
}

/// SEQUENCE length field: one byte below 0x80, otherwise the low seven bits
/// give the number of big-endian length bytes that follow. 0x80 itself is
/// the indefinite form, which DER forbids.
fn read_sequence_length(reader: &mut Reader<'_>) -> Result<usize, DecodingError> {
    let first = reader.read_u8()?;
    if first & 0x80 == 0 {
        return Ok(first as usize);
    }

    let count = (first & 0x7F) as usize;
    if count == 0 || count > std::mem::size_of::<usize>() {
        return Err(DecodingError::BadLength(first));
    }

    let mut length: usize = 0;
    for _ in 0..count {
        length = (length << 8) | reader.read_u8()? as usize;
    }
    Ok(length)
}

/// One `02 LL <body>` INTEGER field, returned as an unsigned value. INTEGER
/// lengths never need the long form at the supported field widths, so a
/// length byte with the high bit set is malformed here.
fn read_integer(reader: &mut Reader<'_>) -> Result<BigUint, DecodingError> {
    let tag = reader.read_u8()?;
    if tag != TAG_INTEGER {
        return Err(DecodingError::NotAnInteger(tag));
    }

    let len = reader.read_u8()?;
    if len & 0x80 != 0 {
        return Err(DecodingError::BadLength(len));
    }
    if len == 0 {
        return Err(DecodingError::EmptyInteger);
    }

    let body = reader.take(len as usize)?;
    Ok(BigUint::from_bytes_be(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use proptest::prelude::*;

    fn int(value: u64) -> BigUint {
        BigUint::from(value)
    }

    fn from_hex(bytes: &[u8]) -> BigUint {
        BigUint::from_bytes_be(bytes)
    }

    #[test]
    fn encodes_one_one() {
        let der = encode_der_signature(&int(1), &int(1)).unwrap();
        assert_eq!(der, hex!("30 06 02 01 01 02 01 01"));
    }

    #[test]
    fn encodes_zero_components() {
        // Zero is a single 0x00 body byte, not an empty field
        let der = encode_der_signature(&int(0), &int(0)).unwrap();
        assert_eq!(der, hex!("30 06 02 01 00 02 01 00"));
    }

    #[test]
    fn pads_high_bit_value() {
        // 0x80 reads as -128 without the sign-padding byte
        let der = encode_der_signature(&int(0x80), &int(1)).unwrap();
        assert_eq!(der, hex!("30 07 02 02 00 80 02 01 01"));
    }

    #[test]
    fn pads_full_width_value() {
        let r = from_hex(&[0xFF; 32]);
        let der = encode_der_signature(&r, &int(1)).unwrap();
        // 33-byte INTEGER body: 0x00 then 32 bytes of 0xFF
        assert_eq!(der[2], 0x02);
        assert_eq!(der[3], 33);
        assert_eq!(der[4], 0x00);
        assert_eq!(&der[5..37], &[0xFF; 32]);
    }

    #[test]
    fn worst_case_256_bit_pair_is_72_bytes() {
        let r = from_hex(&[0xFF; 32]);
        let s = from_hex(&[0xFF; 32]);
        let der = encode_der_signature(&r, &s).unwrap();
        assert_eq!(der.len(), 72);
    }

    #[test]
    fn emits_minimal_bodies() {
        // Leading zero bytes in the input representation must not survive
        let r = from_hex(&hex!("00 00 01"));
        let der = encode_der_signature(&r, &int(1)).unwrap();
        assert_eq!(der, hex!("30 06 02 01 01 02 01 01"));
    }

    #[test]
    fn rejects_oversize_content() {
        let r = from_hex(&[0xFF; 128]);
        let err = encode_der_signature(&r, &int(1)).unwrap_err();
        // 129-byte padded body + headers never fits a short-form length
        assert!(matches!(err, EncodingError::Oversize { total } if total >= 0x80));
    }

    #[test]
    fn short_form_ceiling_is_exact() {
        // 2 + 61 + 2 + 62 = 127 content bytes: the largest encodable pair
        let r = from_hex(&[0x7F; 61]);
        let s = from_hex(&[0x7F; 62]);
        let der = encode_der_signature(&r, &s).unwrap();
        assert_eq!(der[1], 127);

        // One more body byte tips it over
        let s = from_hex(&[0x7F; 63]);
        let err = encode_der_signature(&r, &s).unwrap_err();
        assert_eq!(err, EncodingError::Oversize { total: 128 });
    }

    #[test]
    fn decodes_known_vector() {
        let pair = decode_der_signature(&hex!("30 06 02 01 01 02 01 01")).unwrap();
        assert_eq!(pair.r, int(1));
        assert_eq!(pair.s, int(1));
    }

    #[test]
    fn decodes_padded_integer() {
        let pair = decode_der_signature(&hex!("30 07 02 02 00 80 02 01 01")).unwrap();
        assert_eq!(pair.r, int(0x80));
        assert_eq!(pair.s, int(1));
    }

    #[test]
    fn decodes_long_form_sequence_length() {
        // Some encoders emit `81 LL` even for short payloads
        let pair = decode_der_signature(&hex!("30 81 06 02 01 01 02 01 01")).unwrap();
        assert_eq!(pair.r, int(1));
        assert_eq!(pair.s, int(1));
    }

    #[test]
    fn decodes_two_byte_long_form_length() {
        let pair = decode_der_signature(&hex!("30 82 00 06 02 01 01 02 01 01")).unwrap();
        assert_eq!(pair.r, int(1));
        assert_eq!(pair.s, int(1));
    }

    #[test]
    fn rejects_wrong_sequence_tag() {
        let err = decode_der_signature(&hex!("31 06 02 01 01 02 01 01")).unwrap_err();
        assert_eq!(err, DecodingError::NotASequence(0x31));
    }

    #[test]
    fn rejects_wrong_integer_tag() {
        let err = decode_der_signature(&hex!("30 06 03 01 01 02 01 01")).unwrap_err();
        assert_eq!(err, DecodingError::NotAnInteger(0x03));
    }

    #[test]
    fn rejects_declared_length_past_end() {
        // Claims 10 content bytes, provides 5
        let err = decode_der_signature(&hex!("30 0A 02 01 01 02 01")).unwrap_err();
        assert!(matches!(err, DecodingError::Truncated { missing: 5, .. }));
    }

    #[test]
    fn rejects_integer_length_past_end() {
        let err = decode_der_signature(&hex!("30 05 02 06 01 02 01")).unwrap_err();
        assert!(matches!(err, DecodingError::Truncated { .. }));
    }

    #[test]
    fn rejects_empty_buffer() {
        assert!(matches!(
            decode_der_signature(&[]),
            Err(DecodingError::Truncated { .. })
        ));
    }

    #[test]
    fn rejects_missing_second_integer() {
        let err = decode_der_signature(&hex!("30 03 02 01 01")).unwrap_err();
        assert!(matches!(err, DecodingError::Truncated { .. }));
    }

    #[test]
    fn rejects_empty_integer_body() {
        let err = decode_der_signature(&hex!("30 05 02 00 02 01 01")).unwrap_err();
        assert_eq!(err, DecodingError::EmptyInteger);
    }

    #[test]
    fn rejects_long_form_integer_length() {
        let err = decode_der_signature(&hex!("30 07 02 81 01 01 02 01 01")).unwrap_err();
        assert_eq!(err, DecodingError::BadLength(0x81));
    }

    #[test]
    fn rejects_indefinite_sequence_length() {
        let err = decode_der_signature(&hex!("30 80 02 01 01 02 01 01 00 00")).unwrap_err();
        assert_eq!(err, DecodingError::BadLength(0x80));
    }

    #[test]
    fn rejects_extra_field_inside_sequence() {
        // A third INTEGER is not this shape
        let err = decode_der_signature(&hex!("30 09 02 01 01 02 01 01 02 01 01")).unwrap_err();
        assert_eq!(err, DecodingError::TrailingBytes(3));
    }

    #[test]
    fn rejects_bytes_after_sequence() {
        let err = decode_der_signature(&hex!("30 06 02 01 01 02 01 01 FF")).unwrap_err();
        assert_eq!(err, DecodingError::TrailingBytes(1));
    }

    #[test]
    fn pair_round_trips_through_methods() {
        let pair = SignaturePair::new(from_hex(&hex!("DEADBEEF")), int(7));
        let der = pair.to_der().unwrap();
        assert_eq!(SignaturePair::from_der(&der).unwrap(), pair);
    }

    proptest! {
        #[test]
        fn round_trips_arbitrary_pairs(
            rb in proptest::collection::vec(any::<u8>(), 0..=32),
            sb in proptest::collection::vec(any::<u8>(), 0..=32),
        ) {
            let r = BigUint::from_bytes_be(&rb);
            let s = BigUint::from_bytes_be(&sb);
            let der = encode_der_signature(&r, &s).unwrap();
            let decoded = decode_der_signature(&der).unwrap();
            prop_assert_eq!(decoded.r, r);
            prop_assert_eq!(decoded.s, s);
        }

        #[test]
        fn never_emits_non_minimal_bodies(
            rb in proptest::collection::vec(any::<u8>(), 1..=32),
        ) {
            let r = BigUint::from_bytes_be(&rb);
            let der = encode_der_signature(&r, &BigUint::from(1u8)).unwrap();
            let body_len = der[3] as usize;
            let body = &der[4..4 + body_len];
            if body.len() > 1 {
                // A leading zero is only ever sign padding for a set high bit
                prop_assert!(body[0] != 0x00 || body[1] & 0x80 != 0);
            }
        }
    }
}
