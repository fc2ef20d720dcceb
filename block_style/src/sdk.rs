//! SDK entry points and builder for composing the style preview app.

use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;

use crate::composer::{default_stars, StarSpec, StyleComposer};
use crate::config::{self, StyleOptions};
use crate::data::{
    init_block_channel, init_fixture_channel, sample_blocks, BlockData, DEFAULT_PACING,
};
use crate::error::StyleResult;
use crate::render::{RendererResource, StarRenderer, TubeStarRenderer};
use crate::scene::{
    capture_plugin, evict_removed_stars, ingest_blocks, setup_scene, spin_markers_system,
    star_bob_system, viewport_zoom_system, CaptureMode, StyleState,
};
use crate::ui::hud_plugin;

enum BlockSource {
    Blocks(Vec<BlockData>),
    Fixture(PathBuf),
}

/// Builder for constructing a Stellate app with customizable plugins.
pub struct StyleAppBuilder {
    source: Option<BlockSource>,
    options: Option<StyleOptions>,
    stars: Vec<StarSpec>,
    renderer: Option<Box<dyn StarRenderer>>,
    pacing: Duration,
    window_title: String,
    window_resolution: (f32, f32),
    capture: Option<(PathBuf, u32)>,
    enable_hud: bool,
    enable_bob: bool,
}

impl Default for StyleAppBuilder {
    fn default() -> Self {
        Self {
            source: None,
            options: None,
            stars: default_stars(),
            renderer: None,
            pacing: DEFAULT_PACING,
            window_title: "Stellate".to_string(),
            window_resolution: (1000.0, 1000.0),
            capture: None,
            enable_hud: true,
            enable_bob: true,
        }
    }
}

impl StyleAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay these blocks instead of the built-in samples.
    pub fn blocks(mut self, blocks: Vec<BlockData>) -> Self {
        self.source = Some(BlockSource::Blocks(blocks));
        self
    }

    /// Replay blocks from a JSON fixture file.
    pub fn fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(BlockSource::Fixture(path.into()));
        self
    }

    pub fn options(mut self, options: StyleOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Load style options and fixture path from environment variables.
    pub fn from_env(mut self) -> Self {
        self.options = Some(config::style_options());
        if let Some(path) = config::fixture_path() {
            self.source = Some(BlockSource::Fixture(path));
        }
        self
    }

    pub fn stars(mut self, stars: Vec<StarSpec>) -> Self {
        self.stars = stars;
        self
    }

    /// Provide a custom star renderer implementation.
    pub fn renderer(mut self, renderer: impl StarRenderer) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    /// Save a screenshot and metadata `delay_frames` after the first block, then exit.
    pub fn capture(mut self, path: impl Into<PathBuf>, delay_frames: u32) -> Self {
        self.capture = Some((path.into(), delay_frames));
        self
    }

    pub fn disable_hud(mut self) -> Self {
        self.enable_hud = false;
        self
    }

    pub fn disable_bob(mut self) -> Self {
        self.enable_bob = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> StyleResult<App> {
        let channel = match self.source {
            Some(BlockSource::Fixture(path)) => init_fixture_channel(&path, self.pacing)?,
            Some(BlockSource::Blocks(blocks)) => init_block_channel(blocks, self.pacing),
            None => init_block_channel(sample_blocks(), self.pacing),
        };
        let options = self.options.unwrap_or_default();
        let renderer = self
            .renderer
            .unwrap_or_else(|| Box::new(TubeStarRenderer::default()));

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(StyleState(StyleComposer::new(options, self.stars)))
        .insert_resource(channel)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                viewport_zoom_system,
                ingest_blocks,
                evict_removed_stars,
                spin_markers_system,
            ),
        );

        renderer.setup(&mut app);
        app.insert_resource(RendererResource(renderer));

        if self.enable_bob {
            app.add_systems(Update, star_bob_system);
        }
        if self.enable_hud {
            app.add_plugins(hud_plugin);
        }
        if let Some((path, delay)) = self.capture {
            app.insert_resource(CaptureMode::new(path, delay))
                .add_plugins(capture_plugin);
        }

        Ok(app)
    }
}
