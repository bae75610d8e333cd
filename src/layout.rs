//! Per-frame layout of the switch layers
//!
//! The outer frame and bezel depend only on the canvas size; the panel
//! and lamp also depend on the animated value snapshot.

use crate::geometry::{Rect, bias_align};
use crate::model::SwitchValues;
use crate::theme;

/// Resolved rectangles of the switch layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchLayout {
    /// Outer rounded frame
    pub frame: Rect,
    /// Inner bezel, the tappable region
    pub bezel: Rect,
    /// Animated gradient panel
    pub panel: Rect,
    /// Indicator lamp bounds
    pub lamp: Rect,
}

impl SwitchLayout {
    /// Bezel rectangle for a canvas size
    ///
    /// The frame occupies a fixed square area centered in the canvas;
    /// the bezel is a fixed inset of the frame. Neither moves during a
    /// transition, so hit testing uses this without a value snapshot.
    pub fn bezel_for(width: usize, height: usize) -> Rect {
        Self::frame_for(width, height).inset(theme::BEZEL_INSET)
    }

    fn frame_for(width: usize, height: usize) -> Rect {
        #[allow(clippy::cast_precision_loss)]
        let canvas = Rect::new(0.0, 0.0, width as f32, height as f32);
        let side = theme::FRAME_AREA - 2.0 * theme::FRAME_MARGIN;
        bias_align(canvas, side, side, 0.0, 0.0)
    }

    /// Compute the full layout for a canvas size and value snapshot
    pub fn compute(width: usize, height: usize, values: &SwitchValues) -> Self {
        let frame = Self::frame_for(width, height);
        let bezel = frame.inset(theme::BEZEL_INSET);
        let panel = bezel.inset_each(
            values.top_inset,
            theme::PANEL_SIDE_INSET,
            values.bottom_inset,
            theme::PANEL_SIDE_INSET,
        );
        let lamp = bias_align(
            bezel,
            theme::LAMP_SIZE,
            theme::LAMP_SIZE,
            theme::LAMP_BIAS_X,
            values.lamp_bias,
        );
        Self {
            frame,
            bezel,
            panel,
            lamp,
        }
    }
}
