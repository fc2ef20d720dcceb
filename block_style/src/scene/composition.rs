//! Scene composition: camera, lights, and rebuilding the scene per block.

use std::sync::Arc;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::composer::StyleComposer;
use crate::data::BlockChannel;
use crate::render::RendererResource;
use crate::scene::stars::{StarBody, StarNetworkCache};
use crate::scene::trajectories::TrajectoryMarker;

/// Composer of the running scene.
#[derive(Resource, Default)]
pub struct StyleState(pub StyleComposer);

/// Marker for the orthographic camera the style renders through.
#[derive(Component)]
pub struct StyleCamera;

const AMBIENT_BRIGHTNESS: f32 = 0.3;

pub fn setup_scene(mut commands: Commands, state: Res<StyleState>) {
    let options = state.0.options();
    commands.insert_resource(ClearColor(options.background()));
    commands.insert_resource(AmbientLight {
        color: options.color1(),
        brightness: AMBIENT_BRIGHTNESS,
    });
    commands.insert_resource(StarNetworkCache::default());
    commands.spawn((
        Camera3d::default(),
        Projection::from(OrthographicProjection {
            scale: 1.0 / state.0.zoom(),
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 0.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
        StyleCamera,
    ));
}

/// Applies every block that arrived since the last frame and rebuilds the
/// scene from the newest one that derived cleanly. Blocks that fail leave the
/// current scene untouched.
#[allow(clippy::too_many_arguments)]
pub fn ingest_blocks(
    mut commands: Commands,
    channel: Res<BlockChannel>,
    renderer: Res<RendererResource>,
    mut state: ResMut<StyleState>,
    mut cache: ResMut<StarNetworkCache>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    stale: Query<Entity, Or<(With<StarBody>, With<TrajectoryMarker>)>>,
) {
    let mut latest = None;
    for block in channel.0.try_iter() {
        match state.0.on_block_change(&block) {
            Ok(pass) => latest = Some(pass),
            Err(err) => warn!("stellate: skipping block: {err}"),
        }
    }
    let Some(pass) = latest else {
        return;
    };

    for entity in &stale {
        commands.entity(entity).despawn_recursive();
    }

    let options = state.0.options();
    for (index, (spec, instance)) in state.0.star_specs().iter().zip(&pass.stars).enumerate() {
        let entity = renderer.0.spawn_star(
            &mut commands,
            &mut meshes,
            &mut materials,
            spec,
            index,
            instance,
            options,
        );
        cache.insert(entity, Arc::new(instance.clone()));
    }
    renderer.0.spawn_trajectories(
        &mut commands,
        &mut meshes,
        &mut materials,
        &pass.attributes,
        options,
    );
}

/// Re-derives the orthographic zoom whenever the primary window changes size.
pub fn viewport_zoom_system(
    windows: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut state: ResMut<StyleState>,
    mut cameras: Query<&mut Projection, With<StyleCamera>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let (width, height) = (window.width(), window.height());
    if (width, height) == (0.0, 0.0) {
        return;
    }
    let zoom = state.0.on_viewport_resize(width, height);
    debug!("stellate: viewport {width}x{height}, zoom {zoom}");

    for mut projection in &mut cameras {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = 1.0 / zoom.max(f32::EPSILON);
        }
    }
}
