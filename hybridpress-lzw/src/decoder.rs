//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary one entry behind it. When
//! the encoder emits a code it created on the very step before, the decoder
//! has not built that entry yet and synthesizes it from the previous string.

use crate::config::{LzwConfig, SEED_CODES};
use crate::dictionary::{DictionarySnapshot, LzwDictionary};
use crate::error::{LzwError, Result};

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Decode a code sequence back into bytes.
    ///
    /// Fails with [`LzwError::UnknownCode`] on the first code that is neither
    /// in the table nor the next code about to be assigned.
    pub fn decode(&mut self, codes: &[u32]) -> Result<Vec<u8>> {
        self.decode_with_snapshot(codes).map(|(output, _)| output)
    }

    /// Decode a code sequence and also return the dictionary rebuilt along
    /// the way.
    ///
    /// For a well-formed stream the snapshot equals the one the encoder
    /// produced.
    pub fn decode_with_snapshot(&mut self, codes: &[u32]) -> Result<(Vec<u8>, DictionarySnapshot)> {
        self.dict.reset();

        let mut output = Vec::with_capacity(codes.len() * 2);

        let Some((&first, rest)) = codes.split_first() else {
            return Ok((output, self.dict.snapshot()));
        };

        // Nothing has been learned yet, only seed codes are valid
        if first >= SEED_CODES {
            return Err(LzwError::UnknownCode {
                code: first,
                next_code: self.dict.next_code(),
            });
        }
        output.extend_from_slice(self.dict.get_string(first)?);

        let mut prev_code = first;

        for &code in rest {
            let next_code = self.dict.next_code();

            let string = if code < next_code {
                self.dict.get_string(code)?.to_vec()
            } else if code == next_code && !self.dict.is_full() {
                // Deferred insertion: the encoder used this entry right after
                // creating it, so it must be prev + prev[0]
                let prev_string = self.dict.get_string(prev_code)?;
                let mut new_string = prev_string.to_vec();
                new_string.push(prev_string[0]);
                new_string
            } else {
                return Err(LzwError::UnknownCode { code, next_code });
            };

            output.extend_from_slice(&string);

            // prev + first byte of the current string
            let _ = self.dict.add_child_decode(prev_code, string[0]);

            prev_code = code;
        }

        Ok((output, self.dict.snapshot()))
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
