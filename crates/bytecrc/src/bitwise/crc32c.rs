//! Table-less CRC-32C (Castagnoli) implementation.
//!
//! This module provides a zero-table CRC-32C implementation using optimized
//! bitwise computation with branchless masking.
//!
//! # Algorithm
//!
//! - **Branchless conditional XOR** using wrapping arithmetic (no branch mispredictions)
//! - **Unrolled loop** for better instruction pipelining
//! - **4-byte chunk processing** to reduce loop overhead
//!
//! # Performance
//!
//! ~200 MB/s on modern CPUs (compared to ~500 MB/s for slicing-by-8).
//! For anything throughput-sensitive, prefer [`crate::Crc32c`] with the
//! default table-driven kernel.

use crate::constants::crc32c::POLYNOMIAL;

/// Compute CRC-32C over a byte slice without using lookup tables.
///
/// `crc` is the raw register value (no pre/post XOR applied).
///
/// # Example
///
/// ```
/// use bytecrc::bitwise::crc32c::compute;
///
/// let crc = compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF;
/// assert_eq!(crc, 0xE306_9283);
/// ```
#[inline]
pub fn compute(mut crc: u32, data: &[u8]) -> u32 {
  // Process 4 bytes at a time for better instruction-level parallelism.
  // The inner loop is still serial per byte, but grouping reduces loop overhead.
  let mut chunks = data.chunks_exact(4);

  for chunk in chunks.by_ref() {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(chunk);
    crc = compute_byte(crc, bytes[0]);
    crc = compute_byte(crc, bytes[1]);
    crc = compute_byte(crc, bytes[2]);
    crc = compute_byte(crc, bytes[3]);
  }

  for &byte in chunks.remainder() {
    crc = compute_byte(crc, byte);
  }

  crc
}

/// Compute CRC-32C for a single byte using branchless bitwise reduction.
///
/// This is a `const fn` to allow compile-time CRC computation for known data.
///
/// For each of the 8 bits: `mask` is all-zeros or all-ones depending on the
/// register LSB (`0u32.wrapping_sub(bit)`), which conditionally applies the
/// polynomial without a branch.
#[inline]
pub const fn compute_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  let mask = 0u32.wrapping_sub(crc & 1);
  crc = (crc >> 1) ^ (POLYNOMIAL & mask);

  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_value() {
    // Standard CRC-32C check value: "123456789" -> 0xE3069283
    let crc = compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF;
    assert_eq!(crc, 0xE306_9283);
  }

  #[test]
  fn test_empty() {
    let crc = compute(0xFFFF_FFFF, b"") ^ 0xFFFF_FFFF;
    assert_eq!(crc, 0x0000_0000);
  }

  #[test]
  fn test_single_byte() {
    let crc = compute(0xFFFF_FFFF, &[0x00]) ^ 0xFFFF_FFFF;
    assert_eq!(crc, 0x527D_5351);
  }

  #[test]
  fn test_incremental() {
    let data = b"hello world";
    let oneshot = compute(0xFFFF_FFFF, data) ^ 0xFFFF_FFFF;

    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      let mut crc = compute(0xFFFF_FFFF, a);
      crc = compute(crc, b);
      crc ^= 0xFFFF_FFFF;
      assert_eq!(crc, oneshot, "mismatch at split {}", split);
    }
  }

  #[test]
  fn test_const_computation() {
    // compute_byte is usable in const context.
    const CRC_OF_ZERO: u32 = compute_byte(0xFFFF_FFFF, 0x00);
    assert_eq!(CRC_OF_ZERO ^ 0xFFFF_FFFF, 0x527D_5351);
  }
}
