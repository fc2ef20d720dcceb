use bevy::prelude::*;

use crate::attributes::DerivedAttributes;
use crate::composer::StarSpec;
use crate::config::StyleOptions;
use crate::render::{StarRenderer, TubeGeometry};
use crate::scene::{StarBody, StarSegment, TrajectoryMarker, BOB_BASELINE};
use crate::star::StarInstance;

#[derive(Clone, Debug)]
pub struct TubeSettings {
    pub tubular_segments: usize,
    pub radial_segments: usize,
}

#[derive(Clone, Debug)]
pub struct TrajectorySettings {
    /// Tube thickness of a marker torus relative to its outer radius.
    pub ring_ratio: f32,
}

#[derive(Clone, Debug)]
pub struct TubeStarSettings {
    pub tube: TubeSettings,
    pub trajectories: TrajectorySettings,
}

impl Default for TubeStarSettings {
    fn default() -> Self {
        Self {
            tube: TubeSettings {
                tubular_segments: 100,
                radial_segments: 3,
            },
            trajectories: TrajectorySettings { ring_ratio: 0.35 },
        }
    }
}

/// Extrudes every Bézier of a star into an unlit tube; trajectories become
/// small tori in the block color.
#[derive(Default)]
pub struct TubeStarRenderer {
    pub settings: TubeStarSettings,
}

impl StarRenderer for TubeStarRenderer {
    fn spawn_star(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        spec: &StarSpec,
        index: usize,
        instance: &StarInstance,
        options: &StyleOptions,
    ) -> Entity {
        let tube = &self.settings.tube;
        let material = materials.add(StandardMaterial {
            base_color: spec.color,
            unlit: true,
            ..default()
        });
        let placement = Transform::from_translation(spec.position)
            .with_rotation(Quat::from_rotation_z(spec.rotation_z))
            .with_scale(Vec3::splat(spec.scale));
        let radius = options.tube_radius();

        commands
            .spawn((
                StarBody { index },
                Transform::from_xyz(0.0, BOB_BASELINE, 0.0),
                Visibility::Visible,
            ))
            .with_children(|group| {
                for (k, segment) in instance.network.segments.iter().enumerate() {
                    let geometry = TubeGeometry::extrude(
                        &segment.bezier,
                        tube.tubular_segments,
                        radius,
                        tube.radial_segments,
                    );
                    group.spawn((
                        Mesh3d(meshes.add(Mesh::from(geometry))),
                        MeshMaterial3d(material.clone()),
                        placement,
                        StarSegment { index: k },
                    ));
                }
            })
            .id()
    }

    fn spawn_trajectories(
        &self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        attributes: &DerivedAttributes,
        options: &StyleOptions,
    ) {
        let size = options.marker_size() * (1.0 + attributes.scale as f32 * 100.0);
        if attributes.trajectories.is_empty() || size <= 0.0 {
            return;
        }

        let mesh = meshes.add(Torus::new(
            size * (1.0 - self.settings.trajectories.ring_ratio),
            size,
        ));
        let material = materials.add(StandardMaterial {
            base_color: attributes.color.to_color(),
            unlit: true,
            ..default()
        });

        for (index, trajectory) in attributes.trajectories.iter().enumerate() {
            commands.spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(trajectory.as_vec3()),
                TrajectoryMarker {
                    index,
                    trajectory: *trajectory,
                },
            ));
        }
    }
}
