//! Trajectory markers: one per transaction of the current block.

use bevy::math::DVec3;
use bevy::prelude::*;

const SPIN_RATE: f32 = 0.4;

#[derive(Component, Clone, Copy, Debug)]
pub struct TrajectoryMarker {
    pub index: usize,
    pub trajectory: DVec3,
}

/// Turns each marker about its own trajectory direction.
pub fn spin_markers_system(
    time: Res<Time>,
    mut markers: Query<(&TrajectoryMarker, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (marker, mut transform) in &mut markers {
        let axis = marker.trajectory.as_vec3().normalize_or(Vec3::Y);
        transform.rotate(Quat::from_axis_angle(axis, SPIN_RATE * dt));
    }
}
