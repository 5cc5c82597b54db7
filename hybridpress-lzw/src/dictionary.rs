//! LZW dictionary (code table) management.

use crate::config::{DictionaryLimit, LzwConfig, SEED_CODES};
use crate::error::{LzwError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// LZW dictionary for encoding and decoding.
///
/// The table maps code -> byte sequence. The encoder also keeps a trie-style
/// reverse index keyed by `(prefix code, next byte)` so extending the current
/// match never has to hash the whole string.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> byte sequence.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: (prefix code, byte) -> code (for encoding only).
    children: HashMap<(u32, u8), u32>,
    /// Configuration.
    config: LzwConfig,
}

impl LzwDictionary {
    /// Create a new LZW dictionary with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;

        // Only the seed is reserved; a frozen limit may be far larger than any input needs
        let mut dict = Self {
            table: Vec::with_capacity(SEED_CODES as usize),
            children: HashMap::new(),
            config,
        };

        dict.reset();
        Ok(dict)
    }

    /// Reset the dictionary to the 256 seed entries.
    pub fn reset(&mut self) {
        self.table.clear();
        self.children.clear();
        self.table.extend((0..=u8::MAX).map(|byte| vec![byte]));
    }

    /// Add `prefix + byte` as a new entry (for encoding).
    ///
    /// Returns the assigned code, or `None` once the dictionary is frozen.
    pub fn add_child(&mut self, prefix: u32, byte: u8) -> Option<u32> {
        let code = self.push_entry(prefix, byte)?;
        self.children.insert((prefix, byte), code);
        Some(code)
    }

    /// Add `prefix + byte` as a new entry (for decoding).
    ///
    /// Same as [`add_child`](Self::add_child) but leaves the reverse index
    /// untouched, the decoder only ever looks codes up by number.
    pub fn add_child_decode(&mut self, prefix: u32, byte: u8) -> Option<u32> {
        self.push_entry(prefix, byte)
    }

    fn push_entry(&mut self, prefix: u32, byte: u8) -> Option<u32> {
        let code = self.next_code();
        if !self.config.allows(code) {
            return None;
        }

        let mut entry = self.table.get(prefix as usize)?.clone();
        entry.push(byte);
        self.table.push(entry);
        Some(code)
    }

    /// Get the byte sequence for a code.
    pub fn get_string(&self, code: u32) -> Result<&[u8]> {
        self.table
            .get(code as usize)
            .map(|v| v.as_slice())
            .ok_or_else(|| LzwError::UnknownCode {
                code,
                next_code: self.next_code(),
            })
    }

    /// Find the code for `prefix + byte` (for encoding).
    pub fn find_child(&self, prefix: u32, byte: u8) -> Option<u32> {
        self.children.get(&(prefix, byte)).copied()
    }

    /// Check if the dictionary has stopped growing.
    pub fn is_full(&self) -> bool {
        !self.config.allows(self.next_code())
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.table.len() as u32
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Capture every entry added beyond the seed table.
    pub fn snapshot(&self) -> DictionarySnapshot {
        DictionarySnapshot {
            limit: self.config.limit,
            entries: self.table[SEED_CODES as usize..].to_vec(),
        }
    }
}

/// Persistable copy of a dictionary after one encode or decode call.
///
/// The 256 seed entries are implied; `entries[i]` holds code `256 + i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySnapshot {
    /// Growth policy the dictionary was built under.
    pub limit: DictionaryLimit,
    /// Entries for codes 256 upwards, in code order.
    pub entries: Vec<Vec<u8>>,
}

impl DictionarySnapshot {
    /// Configuration that rebuilds a dictionary with the same policy.
    pub fn config(&self) -> LzwConfig {
        LzwConfig { limit: self.limit }
    }

    /// Number of entries added beyond the seed table.
    pub fn added(&self) -> usize {
        self.entries.len()
    }

    /// Total number of codes (seed entries included).
    pub fn len(&self) -> usize {
        SEED_CODES as usize + self.entries.len()
    }

    /// Always false; the seed table is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Byte sequence for `code`, seed entries included.
    pub fn entry(&self, code: u32) -> Option<&[u8]> {
        if code < SEED_CODES {
            return Some(std::slice::from_ref(&SEED_BYTES[code as usize]));
        }
        self.entries
            .get((code - SEED_CODES) as usize)
            .map(|v| v.as_slice())
    }

    /// First code at which two snapshots disagree, if any.
    pub fn first_difference(&self, other: &Self) -> Option<u32> {
        let shared = self.entries.len().min(other.entries.len());
        let differing = (0..shared).find(|&i| self.entries[i] != other.entries[i]);
        match differing {
            Some(i) => Some(SEED_CODES + i as u32),
            None if self.entries.len() != other.entries.len() => {
                Some(SEED_CODES + shared as u32)
            }
            None => None,
        }
    }
}

/// Every byte value in order, so seed entries can be lent out as slices.
static SEED_BYTES: [u8; 256] = {
    let mut bytes = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        bytes[i] = i as u8;
        i += 1;
    }
    bytes
};
