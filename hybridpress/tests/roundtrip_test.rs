//! End-to-end tests for the hybrid codec.

use hybridpress::{
    Artifact, CodecConfig, DictionaryLimit, HybridCodec, HybridError, LzwConfig, compress,
    decompress,
};
use hybridpress_huffman::{HuffmanError, PackedBits};
use hybridpress_lzw::LzwError;

/// Deterministic pseudo-random text drawn from `alphabet`.
fn lcg_text(size: usize, alphabet: &[char], mut seed: u64) -> String {
    let mut text = String::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        text.push(alphabet[((seed >> 33) as usize) % alphabet.len()]);
    }
    text
}

fn roundtrip_with(codec: &HybridCodec, text: &str) -> Artifact {
    let artifact = codec.encode(text).expect("encode failed");
    let restored = codec.decode(&artifact).expect("decode failed");
    assert_eq!(restored, text);
    artifact
}

fn roundtrip(text: &str) -> Artifact {
    roundtrip_with(&HybridCodec::default(), text)
}

/// Replace the payload with the Huffman coding of a hand-written rendering.
fn with_rendered(mut artifact: Artifact, rendered: &str) -> Artifact {
    let symbols: Vec<char> = rendered.chars().collect();
    let (payload, model) = hybridpress_huffman::encode(&symbols);
    artifact.payload = payload;
    artifact.model = model;
    artifact
}

#[test]
fn test_roundtrip_edge_cases() {
    for text in ["", "a", "aaaa", "ab", " ", "\n\n", "0 1 2", "€", "🦀🦀🦀"] {
        roundtrip(text);
    }
}

#[test]
fn test_roundtrip_multibyte() {
    roundtrip("Grüße aus Köln! Ελληνικά, русский, 中文, العربية 🎉");
    roundtrip(&"日本語のテキスト".repeat(50));
}

#[test]
fn test_roundtrip_random() {
    let alphabets: [&[char]; 3] = [
        &['a', 'b'],
        &['x', 'y', 'z', ' ', '\n'],
        &['é', 'ü', '☃', '1', 'q', 'w', 'e', 'r', 't', 'y'],
    ];

    for (i, alphabet) in alphabets.iter().enumerate() {
        for size in [1, 9, 100, 5000] {
            roundtrip(&lcg_text(size, alphabet, 1000 + i as u64));
        }
    }
}

#[test]
fn test_roundtrip_past_dictionary_limit() {
    // Enough distinct material to fill a 4096-code dictionary
    let text = lcg_text(60_000, &['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'], 5);

    let artifact = roundtrip(&text);
    assert_eq!(artifact.dictionary.len(), 4096);

    let artifact = roundtrip_with(&HybridCodec::new(CodecConfig::UNBOUNDED), &text);
    assert!(artifact.dictionary.len() > 4096);
}

#[test]
fn test_empty_input() {
    let artifact = roundtrip("");
    assert_eq!(artifact.payload.bit_len(), 0);
    assert_eq!(artifact.compressed_size, 0);
    assert_eq!(artifact.original_size, 0);
    assert_eq!(artifact.ratio, 0.0);
}

#[test]
fn test_abcabcabc() {
    let artifact = roundtrip("abcabcabc");
    let stats = artifact.stats();

    assert!(stats.code_count < 9);
    assert_eq!(artifact.dictionary.entry(256), Some(&b"ab"[..]));
    assert_eq!(artifact.dictionary.entry(257), Some(&b"bc"[..]));
    assert_eq!(artifact.dictionary.entry(258), Some(&b"ca"[..]));
}

#[test]
fn test_compressed_size_is_ceil_of_bits() {
    for text in ["a", "hello", "abcabcabc", "the quick brown fox"] {
        let artifact = roundtrip(text);
        assert_eq!(
            artifact.compressed_size,
            artifact.payload.bit_len().div_ceil(8)
        );
        assert_eq!(
            artifact.ratio,
            artifact.original_size as f64 / artifact.compressed_size as f64
        );
    }
}

#[test]
fn test_small_alphabet_compresses() {
    for text in ["aaaaaaaaa", "ababababab"] {
        let artifact = roundtrip(text);
        assert!(
            artifact.compressed_size < artifact.original_size,
            "{:?}: {} >= {}",
            text,
            artifact.compressed_size,
            artifact.original_size
        );
    }

    for size in [128, 1000] {
        let artifact = roundtrip(&lcg_text(size, &['a', 'b', 'c'], 77));
        assert!(artifact.compressed_size < artifact.original_size);
        assert!(artifact.ratio > 1.0);
    }
}

#[test]
fn test_deterministic() {
    let text = lcg_text(3000, &['l', 'o', 'r', 'e', 'm', ' '], 3);

    let a = compress(&text).unwrap();
    let b = compress(&text).unwrap();

    assert_eq!(a.payload, b.payload);
    assert_eq!(a.model, b.model);
    assert_eq!(a.dictionary, b.dictionary);
}

#[test]
fn test_json_persistence() {
    let text = "It was the best of times, it was the worst of times.";
    let artifact = compress(text).unwrap();

    let json = artifact.to_json().unwrap();
    let loaded = Artifact::from_json(&json).unwrap();
    assert_eq!(loaded, artifact);
    assert_eq!(decompress(&loaded).unwrap(), text);
}

#[test]
fn test_parallel_encode() {
    let codec = HybridCodec::default();
    let texts: Vec<String> = (0..8)
        .map(|i| lcg_text(2000, &['p', 'a', 'r', ' '], i))
        .collect();

    std::thread::scope(|scope| {
        for text in &texts {
            let codec = &codec;
            scope.spawn(move || roundtrip_with(codec, text));
        }
    });
}

#[test]
fn test_truncated_payload() {
    let artifact = compress("abcabcabc").unwrap();

    // No symbol of the rendered text has a 1-bit code, so dropping a bit
    // leaves the stream inside a code
    let bits = artifact.payload.to_bit_string();
    let mut truncated = artifact.clone();
    truncated.payload = PackedBits::from_bit_str(&bits[..bits.len() - 1]).unwrap();

    assert!(matches!(
        decompress(&truncated),
        Err(HybridError::Huffman(HuffmanError::CorruptStream { .. }))
    ));
}

#[test]
fn test_tampered_dictionary() {
    let mut artifact = compress("abcabcabc").unwrap();
    artifact.dictionary.entries[1] = b"zz".to_vec();

    assert!(matches!(
        decompress(&artifact),
        Err(HybridError::DictionaryMismatch { code: 257 })
    ));

    // Without verification the snapshot is not consulted
    let lenient = HybridCodec::new(CodecConfig::default().with_verify_dictionary(false));
    assert_eq!(lenient.decode(&artifact).unwrap(), "abcabcabc");
}

#[test]
fn test_huge_dictionary_limit() {
    let codec = HybridCodec::new(CodecConfig::default().with_lzw(LzwConfig::new(u32::MAX)));
    let text = lcg_text(2000, &['a', 'b', 'é', ' '], 17);
    let artifact = roundtrip_with(&codec, &text);
    assert_eq!(artifact.dictionary.limit, DictionaryLimit::Freeze(u32::MAX));

    // A stored artifact carrying a huge limit decodes without reserving it up front
    let mut stored = compress("abcabcabc").unwrap();
    stored.dictionary.limit = DictionaryLimit::Freeze(u32::MAX);
    let reloaded = Artifact::from_json(&stored.to_json().unwrap()).unwrap();
    assert_eq!(decompress(&reloaded).unwrap(), "abcabcabc");
}

#[test]
fn test_truncated_dictionary() {
    let mut artifact = compress("abcabcabc").unwrap();
    artifact.dictionary.entries.pop();
    let missing = 256 + artifact.dictionary.entries.len() as u32;

    assert!(matches!(
        decompress(&artifact),
        Err(HybridError::DictionaryMismatch { code }) if code == missing
    ));
}

#[test]
fn test_invalid_token() {
    let artifact = with_rendered(compress("ab").unwrap(), "97 x8");

    match decompress(&artifact) {
        Err(HybridError::InvalidToken { index, token }) => {
            assert_eq!(index, 1);
            assert_eq!(token, "x8");
        }
        other => panic!("expected InvalidToken, got {:?}", other),
    }
}

#[test]
fn test_unknown_code() {
    let artifact = with_rendered(compress("ab").unwrap(), "97 300");

    assert!(matches!(
        decompress(&artifact),
        Err(HybridError::Lzw(LzwError::UnknownCode {
            code: 300,
            next_code: 256
        }))
    ));
}

#[test]
fn test_capped_and_unbounded_agree_on_short_text() {
    let text = "she sells sea shells by the sea shore";
    let capped = roundtrip(text);
    let unbounded = roundtrip_with(
        &HybridCodec::new(CodecConfig::default().with_lzw(LzwConfig::UNBOUNDED)),
        text,
    );

    assert_eq!(capped.payload, unbounded.payload);
    assert_eq!(capped.dictionary.entries, unbounded.dictionary.entries);
    assert_ne!(capped.dictionary.limit, unbounded.dictionary.limit);
}
