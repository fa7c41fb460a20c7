//! Binary reader for bounds-checked parsing of byte slices.
//!
//! This module provides [`BinaryReader`], a cursor-like type that reads
//! little-endian fields from a byte slice without copying.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A binary reader over a byte slice.
///
/// Every read is bounds-checked; running past the end of the buffer yields
/// [`Error::TruncatedData`] instead of panicking.
///
/// # Example
///
/// ```
/// use bzredux_common::BinaryReader;
///
/// let data = [0x00, 0x01, 0x03, 0x00, 0x04, 0x00, 0x00, 0x00];
/// let mut reader = BinaryReader::new(&data);
///
/// assert_eq!(reader.read_u16().unwrap(), 0x0100);
/// assert_eq!(reader.read_u16().unwrap(), 3);
/// assert_eq!(reader.read_u32().unwrap(), 4);
/// assert!(reader.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a new reader from a byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Get the number of bytes remaining to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.data[self.position.min(self.data.len())..]
    }

    /// Peek at bytes without advancing the position.
    #[inline]
    pub fn peek_bytes(&self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::TruncatedData {
                needed: count,
                available: self.remaining(),
            });
        }
        Ok(&self.data[self.position..self.position + count])
    }

    /// Read bytes and advance the position.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        let bytes = self.peek_bytes(count)?;
        self.position += count;
        Ok(bytes)
    }

    /// Read a fixed-size array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_bytes(1).map(|b| b[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array::<2>().map(u16::from_le_bytes)
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array::<4>().map(i32::from_le_bytes)
    }

    /// Read a struct using zerocopy.
    ///
    /// The struct must implement `FromBytes` from the zerocopy crate.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::TruncatedData {
            needed: size,
            available: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // u32: 0x04030201
            0xFF, 0xFF, 0xFF, 0xFF, // i32: -1
        ];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u32().unwrap(), 0x04030201);
        assert_eq!(reader.read_i32().unwrap(), -1);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0x01, 0x02, 0x03, 0x04];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.peek_bytes(2).unwrap(), &[0x01, 0x02]);
        assert_eq!(reader.remaining(), 4);
        assert_eq!(reader.read_u16().unwrap(), 0x0201);
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_truncated_reports_sizes() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);

        match reader.read_u32() {
            Err(Error::TruncatedData { needed, available }) => {
                assert_eq!(needed, 4);
                assert_eq!(available, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        // A failed read leaves the cursor where it was.
        assert_eq!(reader.remaining(), 2);
    }

    #[test]
    fn test_remaining_bytes_after_read() {
        let data = [1, 2, 3, 4, 5];
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_bytes(3).unwrap(), &[1, 2, 3]);
        assert_eq!(reader.remaining_bytes(), &[4, 5]);
        assert!(reader.read_bytes(10).is_err());
        assert_eq!(reader.remaining_bytes(), &[4, 5]);
        reader.read_bytes(2).unwrap();
        assert!(reader.remaining_bytes().is_empty());
        assert!(reader.is_empty());
    }
}
