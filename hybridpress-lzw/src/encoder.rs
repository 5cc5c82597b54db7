//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::{DictionarySnapshot, LzwDictionary};
use crate::error::Result;

/// Output of one encode call: the code stream and the dictionary it built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Emitted codes, one per longest match.
    pub codes: Vec<u32>,
    /// Entries added while encoding.
    pub dictionary: DictionarySnapshot,
}

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::new(config)?;
        Ok(Self { dict })
    }

    /// Encode data into a sequence of dictionary codes.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the 256 single-byte seed entries
    /// 2. Extend the current match one byte at a time while it stays in the
    ///    dictionary
    /// 3. On the first miss, emit the match's code, add the failed extension
    ///    under the next code (unless the dictionary is frozen), and restart
    ///    the match at the unmatched byte
    /// 4. Emit the code of whatever match remains at the end
    ///
    /// Every call starts from a fresh seed table, so the encoder can be
    /// reused.
    pub fn encode(&mut self, input: &[u8]) -> Encoded {
        self.dict.reset();

        let mut codes = Vec::with_capacity(input.len() / 2 + 1);

        let Some((&first, rest)) = input.split_first() else {
            return Encoded {
                codes,
                dictionary: self.dict.snapshot(),
            };
        };

        // Code of the current match; seed codes equal their byte value
        let mut current = u32::from(first);

        for &byte in rest {
            match self.dict.find_child(current, byte) {
                Some(code) => current = code,
                None => {
                    codes.push(current);
                    // Frozen dictionaries simply stop learning
                    let _ = self.dict.add_child(current, byte);
                    current = u32::from(byte);
                }
            }
        }

        codes.push(current);

        Encoded {
            codes,
            dictionary: self.dict.snapshot(),
        }
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}
