mod channel;
mod model;
mod samples;

pub use channel::{
    init_block_channel, init_fixture_channel, load_fixture, BlockChannel, DEFAULT_PACING,
};
pub use model::{BlockData, Seed, TxPayload, SEED_HASH_CHARS};
pub use samples::sample_blocks;
