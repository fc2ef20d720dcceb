use std::path::Path;
use std::thread;
use std::time::Duration;

use bevy::log::info;
use crossbeam_channel::Receiver;

use crate::data::model::BlockData;
use crate::error::{StyleError, StyleResult};

/// Delay between replayed blocks, long enough to see each style settle.
pub const DEFAULT_PACING: Duration = Duration::from_secs(4);

/// Bevy resource holding the channel the host pushes blocks into.
/// Systems drain this in `ingest_blocks`.
#[derive(bevy::prelude::Resource)]
pub struct BlockChannel(pub Receiver<BlockData>);

/// Replay `blocks` on a dedicated thread, one every `pacing`.
/// The thread exits once every block is sent or the receiver is dropped.
pub fn init_block_channel(blocks: Vec<BlockData>, pacing: Duration) -> BlockChannel {
    let (tx, rx) = crossbeam_channel::bounded(8);

    thread::spawn(move || {
        for block in blocks {
            if tx.send(block).is_err() {
                return;
            }
            thread::sleep(pacing);
        }
    });

    BlockChannel(rx)
}

/// Read a JSON array of blocks from disk.
pub fn load_fixture(path: &Path) -> StyleResult<Vec<BlockData>> {
    let json = std::fs::read_to_string(path).map_err(|source| StyleError::Fixture {
        path: path.to_path_buf(),
        source,
    })?;
    let blocks: Vec<BlockData> =
        serde_json::from_str(&json).map_err(|source| StyleError::FixtureFormat {
            path: path.to_path_buf(),
            source,
        })?;
    info!("loaded {} blocks from {}", blocks.len(), path.display());
    Ok(blocks)
}

/// Create a block channel that replays pre-recorded blocks from a JSON fixture file.
pub fn init_fixture_channel(path: &Path, pacing: Duration) -> StyleResult<BlockChannel> {
    let blocks = load_fixture(path)?;
    Ok(init_block_channel(blocks, pacing))
}
