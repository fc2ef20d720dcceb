//! Style options, env parsing, and constants.

use std::path::PathBuf;

use bevy::color::{Color, Srgba};
use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::star::TopologySource;

const ENV_MOD1: &str = "STYLE_MOD1";
const ENV_MOD2: &str = "STYLE_MOD2";
const ENV_MOD3: &str = "STYLE_MOD3";
const ENV_COLOR1: &str = "STYLE_COLOR1";
const ENV_BACKGROUND: &str = "STYLE_BACKGROUND";
const ENV_TOPOLOGY: &str = "STYLE_TOPOLOGY";
const ENV_FIXTURE: &str = "STYLE_FIXTURE";
const ENV_CAPTURE: &str = "STYLE_CAPTURE";

/// Tube radius at mod1 = 0, in star units.
const TUBE_RADIUS_BASE: f32 = 4.0;
const TUBE_RADIUS_PER_MOD: f32 = 12.5;
const MARKER_SIZE_PER_MOD: f32 = 0.25;

/// Host-tunable options of the style. Modifiers live in [0, 1]; colors are
/// hex strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    pub mod1: f32,
    pub mod2: f32,
    pub mod3: f32,
    pub color1: String,
    pub background: String,
    pub topology: TopologySource,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            mod1: 0.4,
            mod2: 0.1,
            mod3: 0.4,
            color1: "#fff000".to_string(),
            background: "#000000".to_string(),
            topology: TopologySource::Seeded,
        }
    }
}

impl StyleOptions {
    /// Radius of each star tube; 9 units at the default mod1.
    pub fn tube_radius(&self) -> f32 {
        TUBE_RADIUS_BASE + TUBE_RADIUS_PER_MOD * self.mod1
    }

    /// Vertical bob amplitude of each star.
    pub fn bob_amplitude(&self) -> f32 {
        self.mod2
    }

    /// Size of a trajectory marker.
    pub fn marker_size(&self) -> f32 {
        MARKER_SIZE_PER_MOD * self.mod3
    }

    pub fn color1(&self) -> Color {
        parse_color(&self.color1).unwrap_or(Color::srgb(1.0, 0.94, 0.0))
    }

    pub fn background(&self) -> Color {
        parse_color(&self.background).unwrap_or(Color::BLACK)
    }
}

pub fn parse_color(raw: &str) -> Option<Color> {
    Srgba::hex(raw.trim()).ok().map(Color::from)
}

/// Builds style options from the environment, falling back to defaults for
/// anything missing or invalid.
pub fn style_options() -> StyleOptions {
    let defaults = StyleOptions::default();
    StyleOptions {
        mod1: env_modifier(ENV_MOD1, defaults.mod1),
        mod2: env_modifier(ENV_MOD2, defaults.mod2),
        mod3: env_modifier(ENV_MOD3, defaults.mod3),
        color1: env_color(ENV_COLOR1, defaults.color1),
        background: env_color(ENV_BACKGROUND, defaults.background),
        topology: match std::env::var(ENV_TOPOLOGY) {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                warn!("stellate: {ENV_TOPOLOGY}: {err}, using seeded");
                TopologySource::Seeded
            }),
            Err(_) => defaults.topology,
        },
    }
}

/// Path of a JSON block fixture to replay, if one is configured.
pub fn fixture_path() -> Option<PathBuf> {
    std::env::var_os(ENV_FIXTURE).map(PathBuf::from)
}

/// Where to save a capture (screenshot plus metadata), if one is requested.
pub fn capture_path() -> Option<PathBuf> {
    std::env::var_os(ENV_CAPTURE).map(PathBuf::from)
}

fn env_modifier(key: &str, default: f32) -> f32 {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => {
            warn!("stellate: invalid modifier in {key}: {raw:?}");
            default
        }
    }
}

fn env_color(key: &str, default: String) -> String {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    if parse_color(&raw).is_some() {
        raw.trim().to_string()
    } else {
        warn!("stellate: invalid color in {key}: {raw:?}");
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            for key in keys {
                std::env::remove_var(key);
            }
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 8] = [
        ENV_MOD1,
        ENV_MOD2,
        ENV_MOD3,
        ENV_COLOR1,
        ENV_BACKGROUND,
        ENV_TOPOLOGY,
        ENV_FIXTURE,
        ENV_CAPTURE,
    ];

    #[test]
    fn empty_env_gives_defaults() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        assert_eq!(style_options(), StyleOptions::default());
        assert_eq!(fixture_path(), None);
        assert_eq!(capture_path(), None);
    }

    #[test]
    fn env_overrides_are_applied() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(ENV_MOD1, "0.8");
        std::env::set_var(ENV_COLOR1, "#4f83f1");
        std::env::set_var(ENV_BACKGROUND, "#ccc");
        std::env::set_var(ENV_TOPOLOGY, "entropy");
        std::env::set_var(ENV_FIXTURE, "fixtures/blocks.json");

        let options = style_options();
        assert_eq!(options.mod1, 0.8);
        assert_eq!(options.color1, "#4f83f1");
        assert_eq!(options.background, "#ccc");
        assert_eq!(options.topology, TopologySource::Entropy);
        assert_eq!(fixture_path(), Some(PathBuf::from("fixtures/blocks.json")));
    }

    #[test]
    fn invalid_values_fall_back() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(ENV_MOD2, "lots");
        std::env::set_var(ENV_MOD3, "7.5");
        std::env::set_var(ENV_COLOR1, "not-a-color");
        std::env::set_var(ENV_TOPOLOGY, "dice");

        let options = style_options();
        assert_eq!(options.mod2, 0.1);
        assert_eq!(options.mod3, 1.0, "out-of-range modifiers are clamped");
        assert_eq!(options.color1, "#fff000");
        assert_eq!(options.topology, TopologySource::Seeded);
    }

    #[test]
    fn default_tube_radius_is_nine() {
        assert!((StyleOptions::default().tube_radius() - 9.0).abs() < 1e-6);
    }

    #[test]
    fn options_deserialize_partially() {
        let options: StyleOptions = serde_json::from_str(r#"{"mod2":0.25}"#).unwrap();
        assert_eq!(options.mod2, 0.25);
        assert_eq!(options.mod1, StyleOptions::default().mod1);
    }
}
