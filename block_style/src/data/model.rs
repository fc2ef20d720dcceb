// Host-supplied block payloads and the seed derived from them.
// Only the hash prefix and the transaction count reach the derivation;
// the remaining fields ride along so fixtures can be real block dumps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

/// Number of leading hash characters that form the seed. A `0x` prefix
/// counts towards them, leaving 14 hex digits.
pub const SEED_HASH_CHARS: usize = 16;

/// A block as handed over by the rendering host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockData {
    pub hash: String,
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub transactions: Vec<TxPayload>,
}

/// A single transaction. Opaque to the derivation: only its position counts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxPayload {
    pub hash: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub value_eth: f64,
}

impl BlockData {
    pub fn new(hash: impl Into<String>, transactions: Vec<TxPayload>) -> Self {
        Self {
            hash: hash.into(),
            number: None,
            transactions,
        }
    }

    pub fn with_number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn seed(&self) -> StyleResult<Seed> {
        Seed::from_hash(&self.hash)
    }
}

/// Seed parsed from the first 16 characters of a block hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seed(pub u64);

impl Seed {
    /// Parses the seed from the leading [`SEED_HASH_CHARS`] characters of a
    /// block hash, read as one radix-16 number. A `0x`/`0X` at the start is
    /// part of that window, so prefixed hashes contribute 14 digits.
    pub fn from_hash(hash: &str) -> StyleResult<Self> {
        let head = match hash.char_indices().nth(SEED_HASH_CHARS) {
            Some((end, _)) => &hash[..end],
            None if hash.chars().count() == SEED_HASH_CHARS => hash,
            None => return Err(malformed(hash, "fewer than 16 characters")),
        };

        let digits = head
            .strip_prefix("0x")
            .or_else(|| head.strip_prefix("0X"))
            .unwrap_or(head);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed(hash, "not hexadecimal"));
        }

        u64::from_str_radix(digits, 16)
            .map(Seed)
            .map_err(|_| malformed(hash, "not hexadecimal"))
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// 32-bit generator key. The seed is rounded to the nearest f64 and then
    /// reduced modulo 2^32, which is how a double-precision host keys the
    /// same generator, so both produce identical streams for a block.
    pub fn generator_key(self) -> u32 {
        const TWO_32: f64 = 4_294_967_296.0;
        let rounded = self.0 as f64;
        (rounded % TWO_32) as u32
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

fn malformed(hash: &str, reason: &'static str) -> StyleError {
    StyleError::MalformedHash {
        hash: hash.to_string(),
        reason,
    }
}
