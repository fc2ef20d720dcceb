//! Host-facing composition: block changes, viewport sizing, and the metadata
//! callback, with no hidden state beyond the last committed pass.

use std::f32::consts::PI;
use std::sync::Arc;

use bevy::color::Color;
use bevy::log::info;
use bevy::math::Vec3;

use crate::attributes::{shuffle_attributes, DerivedAttributes};
use crate::config::StyleOptions;
use crate::data::BlockData;
use crate::error::StyleResult;
use crate::metadata::NftMetadata;
use crate::star::StarInstance;

/// Viewport edge, in pixels, at which the reference zoom applies.
pub const DEFAULT_VIEWPORT: f32 = 1000.0;
/// Orthographic zoom (pixels per world unit) at the reference viewport.
pub const REFERENCE_ZOOM: f32 = 200.0;

/// Orthographic zoom for a viewport: `min(width, height) / 1000 * 200`.
pub fn camera_zoom(width: f32, height: f32) -> f32 {
    width.min(height) / DEFAULT_VIEWPORT * REFERENCE_ZOOM
}

/// Placement of one star instance in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct StarSpec {
    pub color: Color,
    pub scale: f32,
    pub position: Vec3,
    pub rotation_z: f32,
}

/// Three stars: cyan and orange up front, white further back.
pub fn default_stars() -> Vec<StarSpec> {
    let star = |color, position| StarSpec {
        color,
        scale: 0.002,
        position,
        rotation_z: PI / 3.0,
    };
    vec![
        star(Color::srgb(0.0, 1.0, 1.0), Vec3::new(2.0, 0.0, -2.0)),
        star(Color::srgb(1.0, 0.647, 0.0), Vec3::new(-2.0, 0.0, -2.0)),
        star(Color::WHITE, Vec3::new(0.0, 2.0, -10.0)),
    ]
}

/// Everything one block produced. Immutable once committed.
#[derive(Clone, Debug)]
pub struct StylePass {
    pub hash: String,
    pub number: Option<u64>,
    pub attributes: DerivedAttributes,
    pub stars: Vec<StarInstance>,
}

impl StylePass {
    pub fn metadata(&self) -> NftMetadata {
        NftMetadata::describe(&self.attributes, &self.stars)
    }
}

/// Callback the host invokes when it captures the final image.
pub type MetadataHook = Arc<dyn Fn() -> Option<NftMetadata> + Send + Sync>;

pub struct StyleComposer {
    options: StyleOptions,
    stars: Vec<StarSpec>,
    current: Option<Arc<StylePass>>,
    zoom: f32,
}

impl Default for StyleComposer {
    fn default() -> Self {
        Self::new(StyleOptions::default(), default_stars())
    }
}

impl StyleComposer {
    pub fn new(options: StyleOptions, stars: Vec<StarSpec>) -> Self {
        Self {
            options,
            stars,
            current: None,
            zoom: REFERENCE_ZOOM,
        }
    }

    pub fn options(&self) -> &StyleOptions {
        &self.options
    }

    pub fn star_specs(&self) -> &[StarSpec] {
        &self.stars
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn current(&self) -> Option<&Arc<StylePass>> {
        self.current.as_ref()
    }

    pub fn on_viewport_resize(&mut self, width: f32, height: f32) -> f32 {
        self.zoom = camera_zoom(width, height);
        self.zoom
    }

    /// Derive attributes and every star for `block`. Nothing is committed
    /// unless all of it succeeds; on error the previous pass stays current.
    pub fn on_block_change(&mut self, block: &BlockData) -> StyleResult<Arc<StylePass>> {
        let attributes = shuffle_attributes(block)?;
        let stars = (0..self.stars.len() as u32)
            .map(|i| StarInstance::build(&mut self.options.topology.bag_for(attributes.seed, i)))
            .collect::<StyleResult<Vec<_>>>()?;

        info!(
            "stellate: block {} -> color {}, {} trajectories, stars {:?}",
            attributes.seed,
            attributes.color,
            attributes.trajectories.len(),
            stars.iter().map(|s| s.network.topology.n()).collect::<Vec<_>>(),
        );

        let pass = Arc::new(StylePass {
            hash: block.hash.clone(),
            number: block.number,
            attributes,
            stars,
        });
        self.current = Some(Arc::clone(&pass));
        Ok(pass)
    }

    /// Metadata of the last committed pass; never recomputed.
    pub fn get_metadata(&self) -> Option<NftMetadata> {
        self.current.as_ref().map(|pass| pass.metadata())
    }

    /// A callback bound to the pass current at the time of the call.
    pub fn attributes_callback(&self) -> MetadataHook {
        let pass = self.current.clone();
        Arc::new(move || pass.as_ref().map(|p| p.metadata()))
    }
}
