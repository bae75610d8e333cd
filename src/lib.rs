#![no_std]

pub mod canvas;
pub mod channel;
pub mod color;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod math;
pub mod model;
pub mod renderer;
pub mod scheduler;
pub mod theme;
pub mod tween;

pub use input::{InputProcessor, TapChannel, TapIntent, TapReceiver, TapSender};
pub use layout::SwitchLayout;
pub use model::{SwitchConfig, SwitchModel, SwitchTimings, SwitchValues};
pub use renderer::SwitchRenderer;
pub use scheduler::{FrameResult, FrameScheduler};

pub use color::Rgb;
pub use math::{ease_in_out_quad, ease_in_out_quadf};
pub use embassy_time::{Duration, Instant};

/// Abstract display surface trait
///
/// Implement this trait to present rendered frames on different hosts.
/// The switch engine is generic over this trait.
pub trait Surface {
    /// Present a finished frame, stored in row-major order.
    fn present(&mut self, frame: &[Rgb], width: usize, height: usize);
}
