//! Known-answer vectors for the shipped CRC variants.
//!
//! These pin the exact parameterization of both algorithms: any change to
//! polynomial, init, reflection, or xorout breaks at least one vector here.

use bytecrc::{crc16, crc32, Crc16, Crc16Xmodem, Crc32, Crc32c};

/// (input, CRC-32C, CRC-16/XMODEM)
const VECTORS: [(&[u8], u32, u16); 4] = [
  (b"test1", 1_409_163_093, 4768),
  (b"test2", 1_085_205_665, 8899),
  (b"true", 151_551_613, 62787),
  (b"false", 118_305_666, 29756),
];

#[test]
fn crc32c_fixed_vectors() {
  for (input, expected, _) in VECTORS {
    assert_eq!(
      Crc32c::checksum(input),
      expected,
      "crc32c mismatch for {:?}",
      core::str::from_utf8(input)
    );
  }
}

#[test]
fn crc16_xmodem_fixed_vectors() {
  for (input, _, expected) in VECTORS {
    assert_eq!(
      Crc16Xmodem::checksum(input),
      expected,
      "crc16 mismatch for {:?}",
      core::str::from_utf8(input)
    );
  }
}

#[test]
fn free_functions_match_hasher_types() {
  for (input, expected32, expected16) in VECTORS {
    assert_eq!(crc32(input), expected32);
    assert_eq!(crc16(input), expected16);
  }
}

#[test]
fn check_strings() {
  // Standard CRC catalogue check values for "123456789".
  assert_eq!(crc32(b"123456789"), 0xE306_9283);
  assert_eq!(crc16(b"123456789"), 0x31C3);
}

#[test]
fn empty_input_constants() {
  // Both parameter sets finalize the empty input to zero
  // (init ^ xorout == 0 in each case).
  assert_eq!(crc32(b""), 0x0000_0000);
  assert_eq!(crc16(b""), 0x0000);
}

#[test]
fn aliases_match_concrete_types() {
  let data = b"alias check";
  assert_eq!(Crc32::checksum(data), Crc32c::checksum(data));
  assert_eq!(Crc16::checksum(data), Crc16Xmodem::checksum(data));
}

#[test]
fn determinism() {
  let data = b"same input, same answer";
  let first32 = crc32(data);
  let first16 = crc16(data);
  for _ in 0..10 {
    assert_eq!(crc32(data), first32);
    assert_eq!(crc16(data), first16);
  }
}

#[test]
fn nearby_inputs_disagree() {
  // Not a guarantee of the algorithm, just a spot check that single-bit and
  // single-byte edits move the checksum.
  let base = b"checksum sensitivity".to_vec();
  let mut flipped = base.clone();
  flipped[0] ^= 0x01;
  let mut extended = base.clone();
  extended.push(0x00);

  assert_ne!(crc32(&base), crc32(&flipped));
  assert_ne!(crc32(&base), crc32(&extended));
  assert_ne!(crc16(&base), crc16(&flipped));
  assert_ne!(crc16(&base), crc16(&extended));
}
