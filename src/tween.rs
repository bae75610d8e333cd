use embassy_time::{Duration, Instant};

use crate::color::{Rgb, blend_colors};
use crate::math::{ease_in_out_quadf, lerpf, progress8, unitf};

/// Blends two values of type `T` using a progress value (0-255)
pub type ValueBlender<T> = fn(T, T, u8) -> T;

/// Interruptible tween for values of type `T`
///
/// Each retarget captures the currently interpolated value as the new
/// source, so an interrupted animation continues from where it was
/// rather than snapping back.
#[derive(Debug, Clone)]
pub struct ValueTween<T: Copy> {
    /// Blender function
    blend: ValueBlender<T>,
    /// Current interpolated value
    current: T,
    /// Value at the start of the tween
    source: T,
    /// Target value (None if no tween in progress)
    target: Option<T>,
    /// Total tween duration
    duration: Duration,
    /// Time at which the tween started
    start_time: Instant,
}

impl<T: Copy> ValueTween<T> {
    /// Create a new value tween at rest
    pub const fn new(initial: T, blend: ValueBlender<T>) -> Self {
        Self {
            blend,
            current: initial,
            source: initial,
            target: None,
            duration: Duration::from_millis(0),
            start_time: Instant::from_millis(0),
        }
    }

    /// Get current value
    pub const fn current(&self) -> T {
        self.current
    }

    /// Check if a tween is in progress
    pub const fn is_transitioning(&self) -> bool {
        self.target.is_some()
    }

    /// Retarget the tween
    ///
    /// A zero duration applies the value immediately. Otherwise the
    /// current value becomes the new source and interpolation restarts.
    pub fn set(&mut self, value: T, duration: Duration, start_time: Instant) {
        self.start_time = start_time;
        if duration.as_millis() == 0 {
            // Immediate
            self.current = value;
            self.source = value;
            self.target = None;
            self.duration = Duration::from_millis(0);
        } else {
            // Smooth
            self.source = self.current;
            self.target = Some(value);
            self.duration = duration;
        }
    }

    /// Update tween state
    ///
    /// Call this once per frame. Snaps to the target once the duration
    /// has fully elapsed.
    pub fn tick(&mut self, now: Instant) {
        let Some(target) = self.target else {
            return;
        };

        let elapsed = now.duration_since(self.start_time);
        if elapsed >= self.duration {
            self.current = target;
            self.source = target;
            self.target = None;
            return;
        }

        let progress = progress8(elapsed, self.duration);
        self.current = (self.blend)(self.source, target, progress);
    }
}

/// Eased float blender (quadratic ease in/out)
fn blend_f32_eased(a: f32, b: f32, progress: u8) -> f32 {
    lerpf(a, b, ease_in_out_quadf(unitf(progress)))
}

/// Linear float blender
fn blend_f32_linear(a: f32, b: f32, progress: u8) -> f32 {
    lerpf(a, b, unitf(progress))
}

impl ValueTween<f32> {
    /// Create a new eased f32 tween
    pub const fn new_f32(initial: f32) -> Self {
        Self::new(initial, blend_f32_eased)
    }

    /// Create a new linear f32 tween
    pub const fn new_f32_linear(initial: f32) -> Self {
        Self::new(initial, blend_f32_linear)
    }
}

impl ValueTween<Rgb> {
    /// Create a new rgb tween
    pub const fn new_rgb(initial: Rgb) -> Self {
        Self::new(initial, blend_colors)
    }
}
