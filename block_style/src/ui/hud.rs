//! HUD overlay: the attributes of the block currently on screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::scene::StyleState;
use crate::star::TopologySource;

/// Controls HUD visibility. Toggled with `H`.
#[derive(Resource)]
pub struct HudSettings {
    pub visible: bool,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self { visible: true }
    }
}

pub fn hud_plugin(app: &mut App) {
    app.add_plugins(EguiPlugin)
        .init_resource::<HudSettings>()
        .add_systems(Update, (toggle_hud_system, hud_overlay_system));
}

fn toggle_hud_system(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<HudSettings>) {
    if keys.just_pressed(KeyCode::KeyH) {
        settings.visible = !settings.visible;
    }
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    settings: Res<HudSettings>,
    state: Res<StyleState>,
) {
    if !settings.visible {
        return;
    }
    let composer = &state.0;
    let Some(pass) = composer.current() else {
        return;
    };
    let attrs = &pass.attributes;

    egui::Window::new("Stellate")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            let title = match pass.number {
                Some(n) => format!("Block #{n}"),
                None => "Block".to_string(),
            };
            ui.label(
                egui::RichText::new(title)
                    .size(16.0)
                    .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.label(format!("Seed  {}", attrs.seed));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(
                    rect,
                    2.0,
                    egui::Color32::from_rgb(attrs.color.r, attrs.color.g, attrs.color.b),
                );
                ui.label(format!("Color {}", attrs.color));
            });
            ui.label(format!("Scale {:.6}", attrs.scale));
            ui.label(format!("Trajectories {}", attrs.trajectories.len()));
            ui.add_space(4.0);

            ui.separator();
            for (i, star) in pass.stars.iter().enumerate() {
                let topo = &star.network.topology;
                ui.label(format!(
                    "Star {}  n={:<2} skip {:?}  {} tubes",
                    i + 1,
                    topo.n(),
                    topo.skip(),
                    star.network.segments.len()
                ));
            }
            if composer.options().topology == TopologySource::Entropy {
                ui.label(
                    egui::RichText::new("Star shapes unseeded")
                        .size(11.0)
                        .color(egui::Color32::from_rgb(200, 180, 100)),
                );
            }

            ui.separator();
            ui.label(format!("Zoom  {:.1}", composer.zoom()));
        });
}
