//! I/O adapters for checksum computation.
//!
//! This module provides [`ChecksumReader`] and [`ChecksumWriter`] which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations to compute checksums
//! transparently during I/O operations.
//!
//! # Example
//!
//! ```rust
//! use std::io::{Cursor, Read};
//!
//! use bytecrc::{Checksum, Crc32c};
//!
//! let mut reader = Crc32c::reader(Cursor::new(b"hello world".to_vec()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! assert_eq!(contents, b"hello world");
//! assert_eq!(reader.crc(), Crc32c::checksum(&contents));
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{ChecksumReader, ChecksumWriter};

#[cfg(test)]
mod tests {
  extern crate std;

  use std::io::{Cursor, Read, Write};
  use std::vec::Vec;

  use traits::Checksum;

  use crate::{Crc16Xmodem, Crc32c};

  #[test]
  fn reader_matches_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog".to_vec();
    let mut reader = Crc32c::reader(Cursor::new(data.clone()));

    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();

    assert_eq!(out, data);
    assert_eq!(reader.crc(), Crc32c::checksum(&data));
  }

  #[test]
  fn writer_matches_oneshot() {
    let mut writer = Crc16Xmodem::writer(Vec::new());
    writer.write_all(b"hello ").unwrap();
    writer.write_all(b"world").unwrap();

    let (out, crc) = writer.into_parts();
    assert_eq!(out, b"hello world".to_vec());
    assert_eq!(crc, Crc16Xmodem::checksum(b"hello world"));
  }

  #[test]
  fn reader_short_reads() {
    let data = b"0123456789abcdef".to_vec();
    let mut reader = Crc32c::reader(Cursor::new(data.clone()));

    let mut buf = [0u8; 5];
    loop {
      let n = reader.read(&mut buf).unwrap();
      if n == 0 {
        break;
      }
    }

    assert_eq!(reader.crc(), Crc32c::checksum(&data));
  }
}
