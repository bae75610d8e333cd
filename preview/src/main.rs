//! Desktop preview app for light-switch-composer
//!
//! Renders the switch in a window and forwards clicks as tap intents.
//! Uses the SwitchRenderer + TapChannel API for all state changes.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use light_switch_composer::{Instant, SwitchConfig, SwitchRenderer, TapChannel, TapIntent, TapSender};

/// Frame-buffer width in pixels
const WIDTH: usize = 300;

/// Frame-buffer height in pixels
const HEIGHT: usize = 300;

/// Tap channel size
const TAP_CHANNEL_SIZE: usize = 16;

/// Static tap channel for communication between UI and renderer
static TAP_CHANNEL: TapChannel<TAP_CHANNEL_SIZE> = TapChannel::<TAP_CHANNEL_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 460.0])
            .with_title("Light Switch Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "light-switch-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The renderer instance
    renderer: SwitchRenderer<'static, WIDTH, HEIGHT, TAP_CHANNEL_SIZE>,
    /// Tap sender for pointer clicks
    tap_sender: TapSender<'static, TAP_CHANNEL_SIZE>,
    /// Texture holding the current frame
    texture: Option<egui::TextureHandle>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
}

impl PreviewApp {
    fn new() -> Self {
        let renderer = SwitchRenderer::<WIDTH, HEIGHT, TAP_CHANNEL_SIZE>::new(
            TAP_CHANNEL.receiver(),
            &SwitchConfig::default(),
        );
        let tap_sender = TAP_CHANNEL.sender();

        Self {
            renderer,
            tap_sender,
            texture: None,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update synthetic time
        self.update_time();

        // Render the frame using synthetic time
        let now = Instant::from_millis(self.t_ms);
        let frame = self.renderer.render(now);

        let mut bytes = Vec::with_capacity(WIDTH * HEIGHT * 3);
        for px in frame {
            bytes.extend_from_slice(&[px.r, px.g, px.b]);
        }
        let image = egui::ColorImage::from_rgb([WIDTH, HEIGHT], &bytes);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("switch-frame", image, egui::TextureOptions::NEAREST));
            }
        }

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            // <PlaybackControls>
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.toggle_playing();
                }

                ui.add_space(8.0);

                let secs = self.t_ms / 1000;
                let ms = self.t_ms % 1000;
                ui.label(format!("Time: {secs}.{ms:03}s"));

                ui.add_space(8.0);

                ui.label("Speed:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
            });
            // </PlaybackControls>

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label(if self.renderer.is_on() {
                    "State: ON"
                } else {
                    "State: OFF"
                });
                if self.renderer.model().is_transitioning() {
                    ui.label("(transitioning)");
                }
            });

            ui.add_space(8.0);

            // === Switch Display ===
            if let Some(texture) = &self.texture {
                #[allow(clippy::cast_precision_loss)]
                let size = egui::vec2(WIDTH as f32, HEIGHT as f32);
                let response = ui.add(
                    egui::Image::from_texture(texture)
                        .fit_to_exact_size(size)
                        .sense(egui::Sense::click()),
                );
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = pos - response.rect.min;
                        let _ = self.tap_sender.try_send(TapIntent {
                            x: local.x,
                            y: local.y,
                        });
                    }
                }
            }
        });
    }
}
