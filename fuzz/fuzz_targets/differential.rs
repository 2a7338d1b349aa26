//! Differential fuzzing against reference implementations.
//!
//! Compares our CRC implementations against well-established crates
//! to catch any discrepancies.

#![no_main]

use libfuzzer_sys::fuzz_target;

const CRC16_XMODEM: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM);

fuzz_target!(|data: &[u8]| {
  test_crc32c_differential(data);
  test_crc16_differential(data);
});

fn test_crc32c_differential(data: &[u8]) {
  let ours = bytecrc::Crc32c::checksum(data);
  let reference = crc32c::crc32c(data);

  assert_eq!(
    ours,
    reference,
    "CRC-32C differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours,
    reference,
    data.len()
  );

  // Self-consistency check: streaming should match one-shot
  let mut hasher = bytecrc::Crc32c::new();
  hasher.update(data);
  assert_eq!(hasher.finalize(), ours, "CRC-32C self-consistency mismatch");
}

fn test_crc16_differential(data: &[u8]) {
  let ours = bytecrc::Crc16Xmodem::checksum(data);
  let reference = CRC16_XMODEM.checksum(data);

  assert_eq!(
    ours,
    reference,
    "CRC-16/XMODEM differential mismatch: ours={:#06x}, reference={:#06x}, len={}",
    ours,
    reference,
    data.len()
  );

  let mut hasher = bytecrc::Crc16Xmodem::new();
  hasher.update(data);
  assert_eq!(hasher.finalize(), ours, "CRC-16/XMODEM self-consistency mismatch");
}
