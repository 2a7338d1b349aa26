//! CRC checksums over byte sequences.
//!
//! This crate provides two checksum algorithms, each a pure deterministic
//! function of the input bytes:
//!
//! | Type | Polynomial | Output | Use Cases |
//! |------|------------|--------|-----------|
//! | [`Crc32c`] | 0x1EDC6F41 | `u32` | iSCSI, SCTP, ext4, Btrfs |
//! | [`Crc16Xmodem`] | 0x1021 | `u16` | XMODEM, ZMODEM, Acorn |
//!
//! Both algorithms support one-shot, streaming, resumed, and parallel
//! (combine-based) computation. Lookup tables are generated at compile time
//! into read-only statics, so any number of threads may checksum concurrently
//! with no coordination.
//!
//! # Example
//!
//! ```rust
//! use bytecrc::{Checksum, ChecksumCombine, Crc16Xmodem, Crc32c};
//!
//! // One-shot computation (fastest for complete data)
//! let data = b"123456789";
//! assert_eq!(Crc32c::checksum(data), 0xE306_9283);
//! assert_eq!(Crc16Xmodem::checksum(data), 0x31C3);
//!
//! // Streaming computation
//! let mut hasher = Crc32c::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xE306_9283);
//!
//! // Parallel combine (useful for multi-threaded processing)
//! let (a, b) = data.split_at(4);
//! let crc_a = Crc32c::checksum(a);
//! let crc_b = Crc32c::checksum(b);
//! assert_eq!(Crc32c::combine(crc_a, crc_b, b.len()), 0xE306_9283);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! bytecrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bitwise;
pub mod combine;
mod constants;
pub mod crc16;
pub mod crc32c;
#[cfg(feature = "std")]
pub mod io;

pub use crc16::{Crc16, Crc16Xmodem};
pub use crc32c::{Crc32, Crc32c};
#[cfg(feature = "std")]
pub use io::{ChecksumReader, ChecksumWriter};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};

/// Compute the CRC-32C of `data` in one shot.
///
/// Equivalent to [`Crc32c::checksum`].
///
/// ```
/// assert_eq!(bytecrc::crc32(b"123456789"), 0xE306_9283);
/// ```
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  Crc32c::checksum(data)
}

/// Compute the CRC-16/XMODEM of `data` in one shot.
///
/// Equivalent to [`Crc16Xmodem::checksum`].
///
/// ```
/// assert_eq!(bytecrc::crc16(b"123456789"), 0x31C3);
/// ```
#[inline]
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
  Crc16Xmodem::checksum(data)
}
