//! Byte source abstraction.
//!
//! A `ByteSource` is the randomly addressable byte sequence a window edits.
//! The window engine only ever talks to this trait, so whether content is
//! memory-backed, file-backed or streamed stays a concern of whoever builds
//! the source. `MemorySource` is the `Vec<u8>` implementation used by the
//! binary and by tests.
//!
//! Contract:
//! * `len()` is the current total byte count and shrinks/grows only through
//!   `delete_range` / `insert_bytes`.
//! * `read_range` may return fewer than `count` bytes at end of content; the
//!   caller pads (the snapshot zero-fills).
//! * Failures surface as `SourceError` and are never retried here.

use std::io::Read;
use thiserror::Error;
use tracing::trace;

mod memory;
pub use memory::MemorySource;

/// Errors produced by a byte source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Underlying read/write failure of the backing store.
    #[error("byte source i/o failure: {0}")]
    Io(#[from] std::io::Error),
    /// A write or insert addressed a byte outside the current content.
    #[error("address {address:#x} out of bounds (length {len:#x})")]
    OutOfBounds { address: u64, len: u64 },
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// Randomly addressable, mutable byte sequence.
pub trait ByteSource {
    /// Current total byte count.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read up to `count` bytes starting at `start`. Reads starting at or past
    /// the end return an empty vector.
    fn read_range(&self, start: u64, count: usize) -> Result<Vec<u8>>;

    /// Overwrite the byte at `address` (must be `< len()`).
    fn write_byte(&mut self, address: u64, value: u8) -> Result<()>;

    /// Remove `min(count, len() - start)` bytes at `start`, shifting the tail
    /// left. Returns the number of bytes removed.
    fn delete_range(&mut self, start: u64, count: u64) -> Result<u64>;

    /// Insert `bytes` before `address` (`address <= len()`), shifting the tail
    /// right.
    fn insert_bytes(&mut self, address: u64, bytes: &[u8]) -> Result<()>;

    /// Single byte read; `OutOfBounds` past the end.
    fn byte_at(&self, address: u64) -> Result<u8> {
        match self.read_range(address, 1)?.first() {
            Some(b) => Ok(*b),
            None => Err(SourceError::OutOfBounds {
                address,
                len: self.len(),
            }),
        }
    }
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    fn len(&self) -> u64 {
        (**self).len()
    }
    fn read_range(&self, start: u64, count: usize) -> Result<Vec<u8>> {
        (**self).read_range(start, count)
    }
    fn write_byte(&mut self, address: u64, value: u8) -> Result<()> {
        (**self).write_byte(address, value)
    }
    fn delete_range(&mut self, start: u64, count: u64) -> Result<u64> {
        (**self).delete_range(start, count)
    }
    fn insert_bytes(&mut self, address: u64, bytes: &[u8]) -> Result<()> {
        (**self).insert_bytes(address, bytes)
    }
}

/// Drain a reader into a `MemorySource` (initial load handed over by a
/// persistence collaborator).
pub fn load_reader<R: Read>(mut reader: R) -> Result<MemorySource> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    trace!(target: "source", size_bytes = bytes.len(), "load_reader");
    Ok(MemorySource::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("stream fault"))
        }
    }

    #[test]
    fn load_reader_collects_all_bytes() {
        let src = load_reader(&b"Hello, world!"[..]).unwrap();
        assert_eq!(src.len(), 13);
        assert_eq!(src.byte_at(7).unwrap(), b'w');
    }

    #[test]
    fn load_reader_surfaces_io_error() {
        let err = load_reader(Broken).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
        assert!(err.to_string().contains("stream fault"));
    }

    #[test]
    fn byte_at_past_end_is_out_of_bounds() {
        let src = MemorySource::new(vec![1, 2, 3]);
        match src.byte_at(3) {
            Err(SourceError::OutOfBounds { address, len }) => {
                assert_eq!(address, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn boxed_source_forwards() {
        let mut boxed: Box<dyn ByteSource> = Box::new(MemorySource::new(b"abc".to_vec()));
        boxed.write_byte(1, b'X').unwrap();
        assert_eq!(boxed.read_range(0, 8).unwrap(), b"aXc");
        assert_eq!(boxed.delete_range(0, 1).unwrap(), 1);
        assert_eq!(boxed.len(), 2);
    }
}
