//! Attribute shuffling: block hash → color, scale and one trajectory per transaction.
//!
//! Every value comes from a single [`ShuffleBag`] consumed in a fixed order:
//! three color draws, one scale draw, then three draws per transaction.
//! Reordering any of these changes every value after it.

use std::fmt;

use bevy::log::debug;
use bevy::math::DVec3;
use serde::{Deserialize, Serialize};

use crate::data::{BlockData, Seed};
use crate::error::StyleResult;
use crate::rng::ShuffleBag;

/// Trajectory components are scaled by this before sign flipping.
pub const TRAJECTORY_MULTIPLIER: f64 = 1.5;

/// Draws spent before the first transaction.
pub const PREAMBLE_DRAWS: usize = 4;

/// An 8-bit-per-channel sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_color(self) -> bevy::color::Color {
        bevy::color::Color::srgb_u8(self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Everything reproducible about a block's look. Built once per block.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedAttributes {
    pub seed: Seed,
    pub color: Rgb8,
    pub scale: f64,
    pub trajectories: Vec<DVec3>,
    draws: u64,
}

impl DerivedAttributes {
    /// Values taken from the stream while deriving these attributes.
    pub fn draws_consumed(&self) -> u64 {
        self.draws
    }
}

/// Sign pattern for the `index`-th trajectory: x flips on odd indices,
/// y unless divisible by 3, z unless divisible by 4.
pub fn trajectory_flips(index: usize) -> DVec3 {
    let flip = |negate: bool| if negate { -1.0 } else { 1.0 };
    DVec3::new(
        flip(index % 2 != 0),
        flip(index % 3 != 0),
        flip(index % 4 != 0),
    )
}

/// Derive the attributes for `block` from a fresh stream keyed by its hash.
pub fn shuffle_attributes(block: &BlockData) -> StyleResult<DerivedAttributes> {
    let seed = block.seed()?;
    let mut bag = ShuffleBag::from_seed(seed);
    debug!("shuffling block {seed} ({} txs)", block.tx_count());

    let color = Rgb8 {
        r: bag.next_byte(),
        g: bag.next_byte(),
        b: bag.next_byte(),
    };
    let scale = bag.next_unit() / 100.0;

    let trajectories = (0..block.tx_count())
        .map(|i| {
            let flips = trajectory_flips(i);
            let x = bag.next_unit() * TRAJECTORY_MULTIPLIER * flips.x;
            let y = bag.next_unit() * TRAJECTORY_MULTIPLIER * flips.y;
            let z = bag.next_unit() * TRAJECTORY_MULTIPLIER * flips.z;
            DVec3::new(x, y, z)
        })
        .collect();

    Ok(DerivedAttributes {
        seed,
        color,
        scale,
        trajectories,
        draws: bag.draws(),
    })
}
