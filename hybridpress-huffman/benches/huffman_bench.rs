//! Performance benchmarks for hybridpress-huffman
//!
//! This benchmark suite evaluates:
//! - Encode/decode throughput over char streams
//! - Tree construction cost as the alphabet grows

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hybridpress_huffman::{FrequencyTable, HuffmanTree, compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<char>;

mod test_data {
    /// Space-separated decimal codes, the shape the hybrid pipeline feeds in
    pub fn rendered_codes(size: usize) -> Vec<char> {
        let mut out = String::with_capacity(size + 8);
        let mut seed: u64 = 0x0F1E2D3C4B5A6978;
        while out.len() < size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let code = (seed >> 33) % 4096;
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&code.to_string());
        }
        out.chars().take(size).collect()
    }

    /// English prose
    pub fn prose(size: usize) -> Vec<char> {
        "The quick brown fox jumps over the lazy dog. \
         Pack my box with five dozen liquor jugs. "
            .chars()
            .cycle()
            .take(size)
            .collect()
    }

    /// Mixed-script text with multi-byte chars
    pub fn unicode(size: usize) -> Vec<char> {
        "héllo wörld ☃ ünïcödé ✓ こんにちは "
            .chars()
            .cycle()
            .take(size)
            .collect()
    }
}

const SIZES: [(&str, usize); 3] = [
    ("small_16K", 16 * 1024),
    ("medium_256K", 256 * 1024),
    ("large_1M", 1024 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("codes", test_data::rendered_codes as PatternGenerator),
    ("prose", test_data::prose as PatternGenerator),
    ("unicode", test_data::unicode as PatternGenerator),
];

fn bench_encode_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let encoded = compress(black_box(data));
                    black_box(encoded);
                });
            });
        }
    }

    group.finish();
}

fn bench_decode_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let (bits, model) = compress(&generator(size));
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &bits, |b, bits| {
                b.iter(|| {
                    let decoded = decompress(black_box(bits), &model).unwrap();
                    black_box(decoded);
                });
            });
        }
    }

    group.finish();
}

/// Tree construction over alphabets of increasing size
fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");

    for alphabet in [2u32, 16, 256, 4096] {
        let symbols: Vec<u32> = (0..alphabet * 8).map(|i| i % alphabet + i % 3).collect();
        let freq = FrequencyTable::from_symbols(&symbols);

        group.bench_with_input(BenchmarkId::from_parameter(alphabet), &freq, |b, freq| {
            b.iter(|| black_box(HuffmanTree::build(black_box(freq))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_speed,
    bench_decode_speed,
    bench_tree_build
);
criterion_main!(benches);
