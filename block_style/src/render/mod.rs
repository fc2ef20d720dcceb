//! Renderer traits and the default tube renderer.

mod tube;
mod tubes;

use bevy::prelude::*;

use crate::attributes::DerivedAttributes;
use crate::composer::StarSpec;
use crate::config::StyleOptions;
use crate::star::StarInstance;

pub use tube::TubeGeometry;
pub use tubes::{TrajectorySettings, TubeSettings, TubeStarRenderer, TubeStarSettings};

/// Turns one committed pass into entities. Implementations own mesh and
/// material choices; the scene owns lifecycle and animation.
pub trait StarRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}

    /// Spawn one star instance and return its root entity.
    #[allow(clippy::too_many_arguments)]
    fn spawn_star(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        spec: &StarSpec,
        index: usize,
        instance: &StarInstance,
        options: &StyleOptions,
    ) -> Entity;

    fn spawn_trajectories(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        attributes: &DerivedAttributes,
        options: &StyleOptions,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn StarRenderer>);

impl RendererResource {
    pub fn new(renderer: impl StarRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
