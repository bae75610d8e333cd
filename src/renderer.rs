use embassy_time::Instant;

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::input::{InputProcessor, TapReceiver};
use crate::layout::SwitchLayout;
use crate::model::{SwitchConfig, SwitchModel};
use crate::theme;

/// Switch engine - the main orchestrator
///
/// Owns the frame buffer, the view-model, and the input processor.
/// `W` and `H` are the frame-buffer dimensions in pixels.
pub struct SwitchRenderer<'a, const W: usize, const H: usize, const TAP_CHANNEL_SIZE: usize> {
    // External dependencies
    input: InputProcessor<'a, TAP_CHANNEL_SIZE>,

    // Internal state
    model: SwitchModel,
    frame_buffer: [[Rgb; W]; H],
}

impl<'a, const W: usize, const H: usize, const TAP_CHANNEL_SIZE: usize>
    SwitchRenderer<'a, W, H, TAP_CHANNEL_SIZE>
{
    /// Create a new switch engine reading taps from the given receiver
    pub fn new(taps: TapReceiver<'a, TAP_CHANNEL_SIZE>, config: &SwitchConfig) -> Self {
        Self {
            input: InputProcessor::new(taps),
            model: SwitchModel::new(config),
            frame_buffer: [[Rgb::default(); W]; H],
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Drains pending taps, advances
    /// the tweens, and repaints every layer. Returns the finished frame
    /// in row-major order.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        let bezel = SwitchLayout::bezel_for(W, H);
        self.input.process_pending(bezel, &mut self.model, now);
        self.model.tick(now);

        let values = self.model.values();
        let layout = SwitchLayout::compute(W, H, &values);
        let mut canvas = Canvas::new(self.frame_buffer.as_flattened_mut(), W, H);

        canvas.fill(theme::BACKGROUND);
        canvas.fill_rounded_rect(layout.frame, theme::FRAME_CORNER, theme::FRAME_FILL, 255);
        canvas.fill_rounded_rect(layout.bezel, theme::BEZEL_CORNER, theme::BEZEL_FILL, 255);
        canvas.stroke_rounded_rect(
            layout.bezel,
            theme::BEZEL_CORNER,
            theme::BEZEL_BORDER_WIDTH,
            theme::BEZEL_BORDER,
            255,
        );

        // Both cross-fade passes share the same shadow, so it is painted
        // once below them.
        canvas.shadow_rounded_rect(
            layout.panel,
            theme::PANEL_CORNER,
            theme::PANEL_SHADOW_BLUR,
            0.0,
            0.0,
            theme::PANEL_SHADOW,
            255,
        );

        // Cross-fade: outgoing content first, incoming on top, with
        // complementary opacities from the shared fade ratio.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let on_alpha = (values.fade.clamp(0.0, 1.0) * 255.0) as u8;
        let off_alpha = 255 - on_alpha;

        let forward = theme::PANEL_GRADIENT;
        let reversed = [forward[2], forward[1], forward[0]];
        let mut passes = [(reversed, off_alpha), (forward, on_alpha)];
        if !self.model.is_on() {
            passes.swap(0, 1);
        }
        for (stops, alpha) in passes {
            if alpha == 0 {
                continue;
            }
            canvas.fill_rounded_rect_gradient(layout.panel, theme::PANEL_CORNER, stops, alpha);
            canvas.stroke_rounded_rect(
                layout.panel,
                theme::PANEL_CORNER,
                theme::PANEL_BORDER_WIDTH,
                theme::PANEL_BORDER,
                alpha,
            );
        }

        // Lamp color follows the boolean state directly; only the
        // position is tweened.
        let lamp_color = if self.model.is_on() {
            theme::LAMP_ON
        } else {
            theme::LAMP_OFF
        };
        let radius = theme::LAMP_SIZE * 0.5;
        let (cx, cy) = layout.lamp.center();
        canvas.shadow_rounded_rect(
            layout.lamp,
            radius,
            theme::LAMP_GLOW_BLUR,
            0.0,
            0.0,
            lamp_color,
            255,
        );
        canvas.fill_circle(cx, cy, radius, lamp_color, 255);

        self.frame_buffer.as_flattened()
    }

    /// Get a reference to the view-model
    pub const fn model(&self) -> &SwitchModel {
        &self.model
    }

    /// Whether the switch is in the ON state
    pub const fn is_on(&self) -> bool {
        self.model.is_on()
    }

    /// Layout for the current animated values
    pub fn layout(&self) -> SwitchLayout {
        SwitchLayout::compute(W, H, &self.model.values())
    }

    /// Frame-buffer width in pixels
    pub const fn width(&self) -> usize {
        W
    }

    /// Frame-buffer height in pixels
    pub const fn height(&self) -> usize {
        H
    }
}
