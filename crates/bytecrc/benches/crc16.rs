//! CRC-16/XMODEM benchmarks.
//!
//! Run: `cargo bench -p bytecrc -- crc16`

use bytecrc::Crc16Xmodem;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Standard benchmark sizes.
const SIZES: [usize; 7] = [64, 256, 1024, 4096, 16384, 65536, 1048576];

/// Benchmark the CRC-16/XMODEM dispatch path.
fn bench_xmodem(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc16/xmodem");
  eprintln!("crc16/xmodem backend: {}", bytecrc::crc16::xmodem::selected_backend());

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc16Xmodem::checksum(data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_xmodem);
criterion_main!(benches);
