//! Built-in blocks for previewing a style without a host.

use crate::data::model::{BlockData, TxPayload};

const SAMPLES: [(u64, &str, usize); 3] = [
    (
        12_345_678,
        "0x3f1a8b2c9d4e5f60718293a4b5c6d7e8f90112233445566778899aabbccddeef",
        9,
    ),
    (
        13_000_000,
        "0xabcdef0123456789fedcba98765432100123456789abcdef0123456789abcdef",
        4,
    ),
    (
        14_250_001,
        "0x000000000000ff5c4e3d2b1a09f8e7d6c5b4a392817065f4e3d2c1b0a99887aa",
        17,
    ),
];

pub fn sample_blocks() -> Vec<BlockData> {
    SAMPLES
        .iter()
        .map(|&(number, hash, tx_count)| {
            let transactions = (0..tx_count)
                .map(|i| TxPayload {
                    hash: Some(format!("0x{number:016x}{i:048x}")),
                    value_eth: i as f64 * 0.25,
                    ..TxPayload::default()
                })
                .collect();
            BlockData::new(hash, transactions).with_number(number)
        })
        .collect()
}
