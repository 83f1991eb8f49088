use crate::error::DecodeError;

/// Sequential bounds-checked reader over an immutable byte buffer.
///
/// The position only ever advances; there is no backward seeking. Every
/// read consumes exactly the stated number of bytes or fails with
/// [`DecodeError::TruncatedInput`], in which case the cursor must be
/// abandoned.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < n {
            return Err(DecodeError::TruncatedInput {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f32_le(&mut self) -> Result<f32, DecodeError> {
        let b = self.take(4)?;
        Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        self.take(n).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_fields_in_sequence() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&7u32.to_le_bytes());
        buf.extend_from_slice(&2.5f32.to_le_bytes());
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_u32_le().unwrap(), 7);
        assert_eq!(cursor.read_f32_le().unwrap(), 2.5);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn skip_advances_exactly_n_bytes() {
        let buf = [0u8; 10];
        let mut cursor = ByteCursor::new(&buf);
        cursor.skip(6).unwrap();
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn read_past_end_is_truncated_input() {
        let buf = [1u8, 2, 3];
        let mut cursor = ByteCursor::new(&buf);
        let err = cursor.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedInput {
                offset: 0,
                needed: 4,
                remaining: 3,
            }
        );
    }

    #[test]
    fn skip_past_end_is_truncated_input() {
        let mut cursor = ByteCursor::new(&[0u8; 4]);
        assert!(matches!(
            cursor.skip(5),
            Err(DecodeError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn empty_buffer_rejects_any_read() {
        let mut cursor = ByteCursor::new(&[]);
        assert!(cursor.read_f32_le().is_err());
    }
}
