//! Fuzz target for the CRC-16/XMODEM implementation.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume and combine produce correct results

#![no_main]

use arbitrary::Arbitrary;
use bytecrc::Crc16Xmodem;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = Crc16Xmodem::checksum(data);

  let (a, b) = data.split_at(split);
  let mut hasher = Crc16Xmodem::new();
  hasher.update(a);
  hasher.update(b);
  let incremental = hasher.finalize();

  assert_eq!(oneshot, incremental, "incremental mismatch");

  let crc_a = Crc16Xmodem::checksum(a);
  let mut resumed = Crc16Xmodem::resume(crc_a);
  resumed.update(b);
  let resume_result = resumed.finalize();

  assert_eq!(oneshot, resume_result, "resume mismatch");

  let crc_b = Crc16Xmodem::checksum(b);
  let combined = Crc16Xmodem::combine(crc_a, crc_b, b.len());

  assert_eq!(oneshot, combined, "combine mismatch");
});
