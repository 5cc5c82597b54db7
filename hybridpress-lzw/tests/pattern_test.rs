//! Larger structured inputs that exercise the deferred-insertion path many
//! times over.

use hybridpress_lzw::{LzwConfig, LzwDecoder, LzwEncoder};

/// Repeating diagonal ramp, (x + y) mod 256.
fn create_modulo_pattern(width: u64, height: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    data
}

/// Slow gradient, long runs of equal bytes.
fn create_gradient_pattern(width: u64, height: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) / 4) as u8);
        }
    }
    data
}

fn roundtrip_with(data: &[u8], config: LzwConfig) {
    let mut encoder = LzwEncoder::new(config).expect("Failed to create encoder");
    let encoded = encoder.encode(data);

    let mut decoder = LzwDecoder::new(config).expect("Failed to create decoder");
    let (decoded, snapshot) = decoder
        .decode_with_snapshot(&encoded.codes)
        .expect("Failed to decode");

    assert_eq!(decoded.len(), data.len(), "Size mismatch");
    assert_eq!(decoded, data, "Data mismatch");
    assert_eq!(snapshot, encoded.dictionary, "Dictionary mismatch");
}

#[test]
fn test_modulo_pattern_512() {
    let data = create_modulo_pattern(512, 512);
    roundtrip_with(&data, LzwConfig::CAPPED);
}

#[test]
fn test_gradient_pattern_512() {
    let data = create_gradient_pattern(512, 512);
    roundtrip_with(&data, LzwConfig::CAPPED);
}

#[test]
fn test_modulo_pattern_unbounded() {
    let data = create_modulo_pattern(256, 256);
    roundtrip_with(&data, LzwConfig::UNBOUNDED);
}

#[test]
fn test_gradient_pattern_small_freeze() {
    let data = create_gradient_pattern(256, 256);
    roundtrip_with(&data, LzwConfig::new(512));
}
