//! Block-seeded star rosettes.
//!
//! A block hash keys a Mersenne Twister stream that shuffles out a color, a
//! scale and one trajectory per transaction; each star instance walks a
//! skip-polygon into a closed network of cubic curves that are extruded into
//! tubes. The Bevy layer composes both into a scene and reports NFT metadata.

pub mod attributes;
pub mod composer;
pub mod config;
pub mod data;
pub mod error;
pub mod metadata;
pub mod render;
pub mod rng;
pub mod scene;
pub mod star;
mod ui;

pub mod prelude;
pub mod sdk;

pub use attributes::{shuffle_attributes, DerivedAttributes, Rgb8};
pub use composer::{camera_zoom, StyleComposer};
pub use data::{BlockData, Seed, TxPayload};
pub use error::{StyleError, StyleResult};
pub use metadata::NftMetadata;
pub use rng::ShuffleBag;
pub use star::{StarInstance, StarNetwork, StarTopology, TopologySource};
