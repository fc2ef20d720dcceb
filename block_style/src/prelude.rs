//! Minimal prelude for SDK consumers.

pub use crate::attributes::{shuffle_attributes, DerivedAttributes, Rgb8};
pub use crate::composer::{
    camera_zoom, default_stars, MetadataHook, StarSpec, StyleComposer, StylePass,
};
pub use crate::config::{style_options, StyleOptions};
pub use crate::data::{sample_blocks, BlockData, Seed, TxPayload};
pub use crate::error::{StyleError, StyleResult};
pub use crate::metadata::{AttributeValue, MetadataAttribute, NftMetadata, StyleMetadata};
pub use crate::render::{StarRenderer, TubeStarRenderer};
pub use crate::sdk::StyleAppBuilder;
pub use crate::star::{StarInstance, StarNetwork, StarTopology, TopologySource};
