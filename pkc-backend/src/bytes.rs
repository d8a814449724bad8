use num_bigint_dig::BigUint;

use crate::error::BackendError;

/// Fixed-width big-endian encoding of a non-negative integer, left-padded
/// with zeros. Errors when the value needs more than `N` bytes.
pub(crate) fn to_fixed_be<const N: usize>(value: &BigUint) -> Result<[u8; N], BackendError> {
    let bytes = value.to_bytes_be();
    if bytes.len() > N {
        return Err(BackendError::FieldOverflow { width: N });
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}
