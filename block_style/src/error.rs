//! Error type shared by every derivation pass.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    /// The block hash cannot produce a seed.
    #[error("malformed block hash {hash:?}: {reason}")]
    MalformedHash { hash: String, reason: &'static str },

    /// The skip-walk did not return to vertex 0 within `n` steps.
    #[error("skip-walk over {n} vertices with skips {skip:?} never returned to vertex 0")]
    DegenerateTopology { n: usize, skip: [usize; 3] },

    /// An explicitly constructed topology violates the vertex/skip bounds.
    #[error("invalid star topology (n = {n}, skips = {skip:?}): {reason}")]
    InvalidTopology {
        n: usize,
        skip: [usize; 3],
        reason: &'static str,
    },

    #[error("failed to read block fixture {}: {source}", path.display())]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse block fixture {}: {source}", path.display())]
    FixtureFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StyleResult<T> = Result<T, StyleError>;
