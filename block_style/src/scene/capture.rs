//! Capture mode: once a block is on screen, wait N frames, save a screenshot
//! plus the metadata the host would mint with, then exit.

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::scene::StyleState;

#[derive(Resource)]
pub struct CaptureMode {
    pub path: PathBuf,
    pub frames_remaining: u32,
    pub captured: bool,
}

impl CaptureMode {
    pub fn new(path: PathBuf, delay_frames: u32) -> Self {
        Self {
            path,
            frames_remaining: delay_frames,
            captured: false,
        }
    }

    /// Metadata sits next to the image with a `.json` extension.
    pub fn metadata_path(&self) -> PathBuf {
        self.path.with_extension("json")
    }
}

pub fn capture_system(
    mut commands: Commands,
    mut mode: ResMut<CaptureMode>,
    state: Res<StyleState>,
    mut exit: EventWriter<AppExit>,
) {
    if mode.captured {
        exit.send(AppExit::Success);
        return;
    }

    // Nothing to capture until a block has been composed.
    if state.0.current().is_none() {
        return;
    }

    if mode.frames_remaining > 0 {
        mode.frames_remaining -= 1;
        return;
    }

    let hook = state.0.attributes_callback();
    if let Some(metadata) = hook() {
        let written = metadata
            .to_json()
            .map_err(|err| err.to_string())
            .and_then(|json| {
                std::fs::write(mode.metadata_path(), json).map_err(|err| err.to_string())
            });
        match written {
            Ok(()) => info!("stellate: wrote {}", mode.metadata_path().display()),
            Err(err) => warn!("stellate: failed to write metadata: {err}"),
        }
    }

    let path = mode.path.clone();
    commands
        .spawn(Screenshot::primary_window())
        .observe(save_to_disk(path));
    mode.captured = true;
}

pub fn capture_plugin(app: &mut App) {
    app.add_systems(Update, capture_system);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_lands_beside_the_image() {
        let mode = CaptureMode::new(PathBuf::from("out/block.png"), 10);
        assert_eq!(mode.metadata_path(), PathBuf::from("out/block.json"));
        assert!(!mode.captured);
    }
}
