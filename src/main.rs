//! Stellate — previews the block style on sample or fixture blocks.

use bevy::app::AppExit;
use block_style::config;
use block_style::sdk::StyleAppBuilder;

const CAPTURE_DELAY_FRAMES: u32 = 30;

fn main() {
    let _ = dotenvy::dotenv();

    let mut builder = StyleAppBuilder::new().from_env();
    if let Some(path) = config::capture_path() {
        builder = builder.capture(path, CAPTURE_DELAY_FRAMES).disable_hud();
    }

    match builder.build() {
        Ok(mut app) => {
            if let AppExit::Error(code) = app.run() {
                std::process::exit(i32::from(code.get()));
            }
        }
        Err(err) => {
            eprintln!("stellate: {err}");
            std::process::exit(1);
        }
    }
}
