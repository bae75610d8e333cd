//! Switch view-model
//!
//! Owns the single boolean state of the switch and the tween records
//! derived from it. Rendering reads a value snapshot each frame; the
//! only mutation is `toggle`.

use embassy_time::{Duration, Instant};

use crate::theme;
use crate::tween::ValueTween;

/// Durations of the toggle transitions
#[derive(Debug, Clone, Copy)]
pub struct SwitchTimings {
    /// Duration of the panel inset and lamp position tweens
    pub slide: Duration,
    /// Duration of the panel cross-fade
    pub fade: Duration,
}

impl Default for SwitchTimings {
    fn default() -> Self {
        Self {
            slide: theme::TOGGLE_DURATION,
            fade: theme::TOGGLE_DURATION,
        }
    }
}

/// Configuration for the switch engine
#[derive(Debug, Clone, Copy)]
pub struct SwitchConfig {
    /// Initial state
    pub light_on: bool,
    pub timings: SwitchTimings,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            light_on: true,
            timings: SwitchTimings::default(),
        }
    }
}

/// Snapshot of the animated values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchValues {
    /// Top inset of the panel inside the bezel
    pub top_inset: f32,
    /// Bottom inset of the panel inside the bezel
    pub bottom_inset: f32,
    /// Vertical bias of the indicator lamp
    pub lamp_bias: f32,
    /// Cross-fade position: 1.0 fully ON content, 0.0 fully OFF
    pub fade: f32,
}

/// View-model of the switch
///
/// The top and bottom insets are kept as two independent tweens rather
/// than one mirrored value; their curves match today but the rendering
/// contract treats them as separate.
#[derive(Debug, Clone)]
pub struct SwitchModel {
    light_on: bool,
    timings: SwitchTimings,
    top_inset: ValueTween<f32>,
    bottom_inset: ValueTween<f32>,
    lamp_bias: ValueTween<f32>,
    fade: ValueTween<f32>,
}

/// Rest targets for a given state
const fn targets(light_on: bool) -> (f32, f32, f32, f32) {
    if light_on {
        (
            theme::TOP_INSET_ON,
            theme::BOTTOM_INSET_ON,
            theme::LAMP_BIAS_ON,
            1.0,
        )
    } else {
        (
            theme::TOP_INSET_OFF,
            theme::BOTTOM_INSET_OFF,
            theme::LAMP_BIAS_OFF,
            0.0,
        )
    }
}

impl SwitchModel {
    /// Create a model at rest in the configured state
    pub const fn new(config: &SwitchConfig) -> Self {
        let (top, bottom, bias, fade) = targets(config.light_on);
        Self {
            light_on: config.light_on,
            timings: config.timings,
            top_inset: ValueTween::new_f32(top),
            bottom_inset: ValueTween::new_f32(bottom),
            lamp_bias: ValueTween::new_f32(bias),
            fade: ValueTween::new_f32(fade),
        }
    }

    /// Whether the switch is in the ON state
    pub const fn is_on(&self) -> bool {
        self.light_on
    }

    /// Whether any tween is still running
    pub const fn is_transitioning(&self) -> bool {
        self.top_inset.is_transitioning()
            || self.bottom_inset.is_transitioning()
            || self.lamp_bias.is_transitioning()
            || self.fade.is_transitioning()
    }

    /// Flip the state and retarget all tweens
    ///
    /// Unconditional; toggling twice returns to the original state. A
    /// toggle during a running transition retargets from the currently
    /// interpolated values.
    pub fn toggle(&mut self, now: Instant) {
        self.light_on = !self.light_on;
        let (top, bottom, bias, fade) = targets(self.light_on);
        self.top_inset.set(top, self.timings.slide, now);
        self.bottom_inset.set(bottom, self.timings.slide, now);
        self.lamp_bias.set(bias, self.timings.slide, now);
        self.fade.set(fade, self.timings.fade, now);
    }

    /// Advance all tweens to the given time
    pub fn tick(&mut self, now: Instant) {
        self.top_inset.tick(now);
        self.bottom_inset.tick(now);
        self.lamp_bias.tick(now);
        self.fade.tick(now);
    }

    /// Read the current animated values
    pub const fn values(&self) -> SwitchValues {
        SwitchValues {
            top_inset: self.top_inset.current(),
            bottom_inset: self.bottom_inset.current(),
            lamp_bias: self.lamp_bias.current(),
            fade: self.fade.current(),
        }
    }
}

impl Default for SwitchModel {
    fn default() -> Self {
        Self::new(&SwitchConfig::default())
    }
}
