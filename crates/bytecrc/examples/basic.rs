//! Basic checksum usage: one-shot, streaming, and resumed computation.
//!
//! Run with: `cargo run --example basic -p bytecrc`

use bytecrc::{Crc16Xmodem, Crc32c};

fn main() {
  one_shot();
  streaming();
  resume();
}

/// One-shot computation: fastest when you have all data in memory.
fn one_shot() {
  let data = b"123456789";

  let crc32 = Crc32c::checksum(data);
  println!("CRC-32C:        0x{crc32:08X}");
  assert_eq!(crc32, 0xE306_9283);

  let crc16 = Crc16Xmodem::checksum(data);
  println!("CRC-16/XMODEM:  0x{crc16:04X}");
  assert_eq!(crc16, 0x31C3);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming() {
  let data = b"123456789";

  let mut hasher = Crc32c::new();
  hasher.update(b"1234");
  hasher.update(b"56789");
  let crc = hasher.finalize();

  println!("Streaming CRC-32C: 0x{crc:08X}");
  assert_eq!(crc, Crc32c::checksum(data));

  // finalize() is non-consuming: can continue after
  hasher.update(b"...");
  let extended = hasher.finalize();
  println!("Extended CRC-32C:  0x{extended:08X}");

  // reset() clears state for reuse
  hasher.reset();
  hasher.update(b"new data");
  println!("Reset CRC-32C:     0x{:08X}", hasher.finalize());

  println!();
}

/// Resume computation from a saved checksum state.
fn resume() {
  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let mut hasher = Crc16Xmodem::new();
  hasher.update(part1);
  let saved_state = hasher.finalize();
  println!("Saved state after part1: 0x{saved_state:04X}");

  let mut resumed = Crc16Xmodem::resume(saved_state);
  resumed.update(part2);
  let final_crc = resumed.finalize();
  println!("Final CRC after resume:  0x{final_crc:04X}");

  let mut full = Crc16Xmodem::new();
  full.update(part1);
  full.update(part2);
  assert_eq!(final_crc, full.finalize());
  println!("Verified: matches full computation");
}
