//! Star rosettes: a skip-polygon walk turned into a network of cubic curves.

mod curves;
mod topology;

use serde::{Deserialize, Serialize};

use crate::data::Seed;
use crate::error::StyleResult;
use crate::rng::ShuffleBag;

pub use curves::{CatmullRom, CubicBezier, PathCurve};
pub use topology::{skip_walk, StarTopology, MAX_VERTICES, MIN_VERTICES, STAR_RADIUS};

/// Depth of the smooth curve, just behind the tube layer.
pub const SMOOTH_CURVE_Z: f32 = -1.0;

/// Range of the per-instance animation phase.
pub const PHASE_RANGE: f64 = 10_000.0;

/// Where a star instance gets its topology draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologySource {
    /// Per-instance stream keyed from the block seed: same block, same stars.
    #[default]
    Seeded,
    /// OS entropy: star shapes change on every build.
    Entropy,
}

impl TopologySource {
    pub fn bag_for(self, seed: Seed, index: u32) -> ShuffleBag {
        match self {
            TopologySource::Seeded => ShuffleBag::for_instance(seed, index),
            TopologySource::Entropy => ShuffleBag::from_entropy(),
        }
    }
}

impl std::str::FromStr for TopologySource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seeded" => Ok(TopologySource::Seeded),
            "entropy" => Ok(TopologySource::Entropy),
            other => Err(format!("unknown topology source {other:?}")),
        }
    }
}

/// One walk step as two curves over the same four vertices: a control-polygon
/// Bézier at z = 0 for the tube and a smooth curve through the points behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentPair {
    pub indices: [usize; 4],
    pub bezier: CubicBezier,
    pub smooth: CatmullRom,
}

/// The full curve network of one star.
#[derive(Clone, Debug, PartialEq)]
pub struct StarNetwork {
    pub topology: StarTopology,
    pub segments: Vec<SegmentPair>,
}

impl StarNetwork {
    pub fn build(topology: StarTopology) -> StyleResult<Self> {
        let walk = topology.walk()?;
        let verts = topology.vertices();
        let segments = walk
            .into_iter()
            .map(|indices| {
                let at = |z: f32| indices.map(|i| verts[i].extend(z));
                SegmentPair {
                    indices,
                    bezier: CubicBezier::new(at(0.0)),
                    smooth: CatmullRom::new(at(SMOOTH_CURVE_Z)),
                }
            })
            .collect();
        Ok(Self { topology, segments })
    }
}

/// A star's geometry plus its animation phase, drawn from one stream:
/// phase first, then topology.
#[derive(Clone, Debug, PartialEq)]
pub struct StarInstance {
    pub phase: f32,
    pub network: StarNetwork,
}

impl StarInstance {
    pub fn build(bag: &mut ShuffleBag) -> StyleResult<Self> {
        let phase = (bag.next_unit() * PHASE_RANGE) as f32;
        let topology = StarTopology::generate(bag);
        let network = StarNetwork::build(topology)?;
        Ok(Self { phase, network })
    }
}
