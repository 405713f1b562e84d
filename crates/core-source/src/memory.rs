use crate::{ByteSource, Result, SourceError};
use tracing::trace;

/// In-memory byte source backed by a `Vec<u8>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hand the materialized content back (e.g. to a save routine).
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn index(&self, address: u64) -> Option<usize> {
        usize::try_from(address).ok().filter(|i| *i < self.bytes.len())
    }

    fn out_of_bounds(&self, address: u64) -> SourceError {
        SourceError::OutOfBounds {
            address,
            len: self.len(),
        }
    }
}

impl From<Vec<u8>> for MemorySource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for MemorySource {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl ByteSource for MemorySource {
    fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn read_range(&self, start: u64, count: usize) -> Result<Vec<u8>> {
        let Some(start) = self.index(start) else {
            return Ok(Vec::new());
        };
        let end = start.saturating_add(count).min(self.bytes.len());
        Ok(self.bytes[start..end].to_vec())
    }

    fn write_byte(&mut self, address: u64, value: u8) -> Result<()> {
        let i = self.index(address).ok_or_else(|| self.out_of_bounds(address))?;
        self.bytes[i] = value;
        trace!(target: "source", address, value, "write_byte");
        Ok(())
    }

    fn delete_range(&mut self, start: u64, count: u64) -> Result<u64> {
        let Some(start) = self.index(start) else {
            return Ok(0);
        };
        let available = self.bytes.len() - start;
        let n = usize::try_from(count).unwrap_or(usize::MAX).min(available);
        self.bytes.drain(start..start + n);
        trace!(target: "source", start, removed = n, len = self.bytes.len(), "delete_range");
        Ok(n as u64)
    }

    fn insert_bytes(&mut self, address: u64, bytes: &[u8]) -> Result<()> {
        let at = usize::try_from(address)
            .ok()
            .filter(|i| *i <= self.bytes.len())
            .ok_or_else(|| self.out_of_bounds(address))?;
        self.bytes.splice(at..at, bytes.iter().copied());
        trace!(target: "source", address, inserted = bytes.len(), len = self.bytes.len(), "insert_bytes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_read_at_end_is_not_padded() {
        let src = MemorySource::from(&b"Hello"[..]);
        assert_eq!(src.read_range(3, 10).unwrap(), b"lo");
        assert!(src.read_range(5, 10).unwrap().is_empty());
        assert!(src.read_range(u64::MAX, 10).unwrap().is_empty());
    }

    #[test]
    fn write_past_end_fails_and_leaves_content() {
        let mut src = MemorySource::from(&b"ab"[..]);
        assert!(matches!(
            src.write_byte(2, 0),
            Err(SourceError::OutOfBounds { address: 2, len: 2 })
        ));
        assert_eq!(src.as_bytes(), b"ab");
    }

    #[test]
    fn delete_clamps_to_tail() {
        let mut src = MemorySource::from(&b"Hello, world!"[..]);
        assert_eq!(src.delete_range(7, 3).unwrap(), 3);
        assert_eq!(src.as_bytes(), b"Hello, ld!");
        assert_eq!(src.delete_range(7, 100).unwrap(), 3);
        assert_eq!(src.as_bytes(), b"Hello, ");
        assert_eq!(src.delete_range(7, 1).unwrap(), 0);
    }

    #[test]
    fn insert_at_end_appends() {
        let mut src = MemorySource::default();
        src.insert_bytes(0, &[0]).unwrap();
        src.insert_bytes(1, b"xy").unwrap();
        src.insert_bytes(1, b"-").unwrap();
        assert_eq!(src.into_bytes(), vec![0, b'-', b'x', b'y']);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut src = MemorySource::from(&b"a"[..]);
        assert!(src.insert_bytes(2, b"z").is_err());
        assert_eq!(src.len(), 1);
    }

    proptest! {
        #[test]
        fn delete_shrinks_by_reported_count(len in 0usize..64, start in 0u64..80, count in 0u64..80) {
            let mut src = MemorySource::new(vec![7u8; len]);
            let removed = src.delete_range(start, count).unwrap();
            prop_assert_eq!(src.len(), len as u64 - removed);
            prop_assert!(removed <= count);
        }
    }
}
