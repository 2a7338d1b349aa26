//! CRC-32C (Castagnoli) checksum.
//!
//! CRC-32C uses polynomial 0x1EDC6F41, which was specifically designed to have
//! excellent error detection properties for data storage and networking.
//!
//! # Parameters (CRC Catalogue)
//!
//! - width: 32
//! - poly: 0x1EDC6F41 (reflected: 0x82F63B78)
//! - init: 0xFFFFFFFF
//! - refin/refout: true
//! - xorout: 0xFFFFFFFF
//!
//! # Usage
//!
//! ```
//! use bytecrc::Crc32c;
//!
//! // One-shot computation (fastest for single buffers)
//! let crc = Crc32c::checksum(b"hello world");
//!
//! // Incremental computation (for streaming)
//! let mut hasher = Crc32c::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! assert_eq!(hasher.finalize(), crc);
//! ```

pub(crate) mod portable;

use traits::{Checksum, ChecksumCombine};

/// CRC-32C (Castagnoli) checksum.
///
/// This struct implements streaming CRC-32C computation.
///
/// # Thread Safety
///
/// `Crc32c` is `Send` and `Sync`. Multiple hashers can operate in parallel
/// on different data, and results can be combined using [`combine`](Self::combine).
#[derive(Clone, Debug)]
pub struct Crc32c {
  /// Current CRC state (inverted - XOR applied on finalize)
  state: u32,
  /// Initial value for reset
  initial: u32,
}

/// Convenience alias: the only 32-bit variant this crate ships.
pub type Crc32 = Crc32c;

impl Crc32c {
  /// Initial value for CRC-32C (all ones).
  const INIT: u32 = 0xFFFF_FFFF;

  /// Create a new hasher with the default initial value.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      state: Self::INIT,
      initial: Self::INIT,
    }
  }

  /// Create a new hasher that will resume from a previous CRC.
  ///
  /// This is useful for continuing a checksum computation that was
  /// interrupted or for implementing parallel computation.
  ///
  /// # Example
  ///
  /// ```
  /// use bytecrc::Crc32c;
  ///
  /// let data = b"hello world";
  /// let (first, second) = data.split_at(6);
  ///
  /// let crc1 = Crc32c::checksum(first);
  ///
  /// let mut hasher = Crc32c::resume(crc1);
  /// hasher.update(second);
  ///
  /// assert_eq!(hasher.finalize(), Crc32c::checksum(data));
  /// ```
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self {
      // Invert back to internal state
      state: crc ^ Self::INIT,
      initial: crc ^ Self::INIT,
    }
  }

  /// Compute CRC-32C of data in one shot.
  ///
  /// This is the fastest path for data that fits in memory.
  ///
  /// # Example
  ///
  /// ```
  /// use bytecrc::Crc32c;
  ///
  /// assert_eq!(Crc32c::checksum(b"123456789"), 0xE3069283);
  /// ```
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u32 {
    dispatch(Self::INIT, data) ^ Self::INIT
  }

  /// Update the hasher with additional data.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = dispatch(self.state, data);
  }

  /// Finalize and return the checksum.
  ///
  /// This does not consume the hasher, allowing further updates.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    self.state ^ Self::INIT
  }

  /// Reset the hasher to its initial state.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.initial;
  }

  /// Get the current CRC state.
  ///
  /// This returns the same value as [`finalize`](Self::finalize) and is
  /// provided for API consistency with other checksum implementations.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> u32 {
    self.finalize()
  }

  /// Combine two CRCs: `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)`.
  ///
  /// This operation runs in O(log n) time where n is `len_b`.
  ///
  /// # Example
  ///
  /// ```
  /// use bytecrc::Crc32c;
  ///
  /// let data = b"hello world";
  /// let (a, b) = data.split_at(6);
  ///
  /// let crc_a = Crc32c::checksum(a);
  /// let crc_b = Crc32c::checksum(b);
  /// let crc_ab = Crc32c::checksum(data);
  ///
  /// assert_eq!(Crc32c::combine(crc_a, crc_b, b.len()), crc_ab);
  /// ```
  #[inline]
  #[must_use]
  pub fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    crate::combine::crc32c_combine(crc_a, crc_b, len_b)
  }
}

impl Default for Crc32c {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Crc32c {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Crc32c::new()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Self {
      state: initial ^ Self::INIT,
      initial: initial ^ Self::INIT,
    }
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc32c::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Crc32c::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Crc32c::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    Crc32c::checksum(data)
  }
}

impl ChecksumCombine for Crc32c {
  #[inline]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output {
    Crc32c::combine(crc_a, crc_b, len_b)
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Crc32c {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.update(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// Returns the CRC-32C backend used by this build.
#[doc(hidden)]
#[inline]
#[must_use]
pub fn selected_backend() -> &'static str {
  #[cfg(feature = "no-tables")]
  return "portable/bitwise";

  #[cfg(not(feature = "no-tables"))]
  "portable/slice8"
}

#[inline]
fn dispatch(crc: u32, data: &[u8]) -> u32 {
  portable::compute(crc, data)
}
