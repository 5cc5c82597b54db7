//! MSB-first packed bit storage for Huffman payloads.
//!
//! Bits are packed from the most significant bit of each byte downwards.
//! The final byte is zero-padded; [`PackedBits::bit_len`] records how many
//! bits are meaningful, so the payload behaves exactly like the logical
//! `0`/`1` string it replaces.

use serde::{Deserialize, Serialize};

/// A bit string packed into bytes, MSB first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedBits {
    /// Packed bytes (last byte zero-padded).
    bytes: Vec<u8>,
    /// Number of meaningful bits.
    bit_len: u64,
}

impl PackedBits {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-packed bytes. Fails if `bytes` is not exactly
    /// `ceil(bit_len / 8)` long.
    pub fn from_parts(bytes: Vec<u8>, bit_len: u64) -> Option<Self> {
        let bits = Self { bytes, bit_len };
        bits.is_consistent().then_some(bits)
    }

    /// Parse a logical bit string of `0` and `1` characters.
    pub fn from_bit_str(bits: &str) -> Option<Self> {
        let mut writer = MsbBitWriter::new();
        for c in bits.chars() {
            match c {
                '0' => writer.write_bit(false),
                '1' => writer.write_bit(true),
                _ => return None,
            }
        }
        Some(writer.finish())
    }

    /// Render as a logical bit string of `0` and `1` characters.
    pub fn to_bit_string(&self) -> String {
        MsbBitReader::new(self)
            .map(|bit| if bit { '1' } else { '0' })
            .collect()
    }

    /// Number of meaningful bits.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Packed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Packed size in bytes, `ceil(bit_len / 8)`.
    pub fn byte_len(&self) -> u64 {
        self.bit_len.div_ceil(8)
    }

    /// Check if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Check that the byte buffer matches the declared bit length.
    ///
    /// Deserialized payloads are not trusted to satisfy this.
    pub fn is_consistent(&self) -> bool {
        self.bytes.len() as u64 == self.byte_len()
    }

    /// Iterate over the meaningful bits.
    pub fn bits(&self) -> MsbBitReader<'_> {
        MsbBitReader::new(self)
    }
}

/// MSB-first bit reader over a [`PackedBits`] value.
#[derive(Debug)]
pub struct MsbBitReader<'a> {
    /// Input bytes.
    data: &'a [u8],
    /// Number of meaningful bits in `data`.
    bit_len: u64,
    /// Total bits read so far.
    position: u64,
}

impl<'a> MsbBitReader<'a> {
    /// Create a new MSB bit reader.
    pub fn new(bits: &'a PackedBits) -> Self {
        Self {
            data: &bits.bytes,
            bit_len: bits.bit_len,
            position: 0,
        }
    }

    /// Read one bit, or `None` at the end of the meaningful bits.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.position >= self.bit_len {
            return None;
        }

        let byte = *self.data.get((self.position / 8) as usize)?;
        let shift = 7 - (self.position % 8) as u32;
        self.position += 1;

        Some((byte >> shift) & 1 == 1)
    }

    /// Get total bits read.
    pub fn bits_read(&self) -> u64 {
        self.position
    }

    /// Bits left before the end of the stream.
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.position
    }
}

impl Iterator for MsbBitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }
}

/// MSB-first bit writer producing a [`PackedBits`] value.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u8,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    bit_len: u64,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bits` bits.
    pub fn with_capacity(bits: u64) -> Self {
        Self {
            output: Vec::with_capacity(bits.div_ceil(8) as usize),
            ..Self::default()
        }
    }

    /// Append a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u8::from(bit);
        self.bits_in_buffer += 1;
        self.bit_len += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Append a code given as a `0`/`1` string.
    pub fn write_code(&mut self, code: &str) {
        for b in code.bytes() {
            self.write_bit(b == b'1');
        }
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Flush remaining bits, padding with zeros, and return the packed bits.
    pub fn finish(mut self) -> PackedBits {
        if self.bits_in_buffer > 0 {
            let remaining = 8 - self.bits_in_buffer;
            self.output.push(self.buffer << remaining);
        }

        PackedBits {
            bytes: self.output,
            bit_len: self.bit_len,
        }
    }
}
