use crate::error::DecodingError;

/**
    Byte cursor over a DER buffer: a position plus bounds-checked reads.

    Every read validates against the end of the buffer before touching it,
    so a declared length that runs past the input surfaces as
    [`DecodingError::Truncated`] instead of a panic.
*/
#[derive(Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read one byte, advancing the cursor.
    pub fn read_u8(&mut self) -> Result<u8, DecodingError> {
        let byte = *self.data.get(self.pos).ok_or(DecodingError::Truncated {
            at: self.pos,
            missing: 1,
        })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Take the next `len` bytes as a subslice, advancing the cursor.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodingError> {
        if len > self.remaining() {
            return Err(DecodingError::Truncated {
                at: self.pos,
                missing: len - self.remaining(),
            });
        }
        let out = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }
}
