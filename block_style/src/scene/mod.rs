mod capture;
mod composition;
mod stars;
mod trajectories;

pub use capture::{capture_plugin, CaptureMode};
pub use composition::{ingest_blocks, setup_scene, viewport_zoom_system, StyleCamera, StyleState};
pub use stars::{
    evict_removed_stars, star_bob_system, StarBody, StarNetworkCache, StarSegment, BOB_BASELINE,
};
pub use trajectories::{spin_markers_system, TrajectoryMarker};
