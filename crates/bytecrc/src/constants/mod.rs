//! Precomputed constants for the CRC algorithms.
//!
//! This module contains the polynomials and lookup tables for the two CRC
//! variants this crate ships. All tables are computed at compile time.
//!
//! # Cache Alignment
//!
//! The slicing tables are 64-byte (cache line) aligned using [`Aligned64`] to
//! prevent cache line splits during table lookups.

#[cfg(not(feature = "no-tables"))]
pub mod tables;

pub mod crc16_xmodem;
pub mod crc32c;

/// Wrapper type to force 64-byte (cache line) alignment.
///
/// Used to align lookup tables for optimal cache behavior.
/// The inner type `T` is accessible via `.0`.
#[cfg(not(feature = "no-tables"))]
#[repr(align(64))]
pub struct Aligned64<T>(pub T);
