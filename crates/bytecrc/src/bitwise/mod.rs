//! Table-less bitwise CRC kernels.
//!
//! These kernels trade throughput for zero table footprint. They back the
//! `no-tables` feature and double as reference implementations for the
//! table-driven kernels.

pub mod crc32c;
