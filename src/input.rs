//! Input processing module
//!
//! Converts pointer taps from the host shell into switch toggles. Taps
//! arrive through a bounded channel and are drained once per frame;
//! only taps landing inside the bezel count.

use embassy_time::Instant;

use crate::channel::{Channel, Receiver, Sender};
use crate::geometry::Rect;
use crate::model::SwitchModel;

/// A pointer tap in frame-buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapIntent {
    pub x: f32,
    pub y: f32,
}

/// Type alias for tap sender
pub type TapSender<'a, const SIZE: usize> = Sender<'a, TapIntent, SIZE>;

/// Type alias for tap receiver
pub type TapReceiver<'a, const SIZE: usize> = Receiver<'a, TapIntent, SIZE>;

/// Type alias for the tap channel
pub type TapChannel<const SIZE: usize> = Channel<TapIntent, SIZE>;

/// Drains pending taps and applies them to the view-model
pub struct InputProcessor<'a, const SIZE: usize> {
    taps: TapReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> InputProcessor<'a, SIZE> {
    /// Create a new input processor
    pub const fn new(taps: TapReceiver<'a, SIZE>) -> Self {
        Self { taps }
    }

    /// Process all pending taps from the channel (non-blocking)
    ///
    /// Each tap inside `bezel` toggles the model. Queued duplicates are
    /// applied in order; a double tap simply toggles twice, which is the
    /// intended idempotent behavior. Returns the number of toggles.
    pub fn process_pending(
        &mut self,
        bezel: Rect,
        model: &mut SwitchModel,
        now: Instant,
    ) -> usize {
        let mut toggles = 0;

        while let Ok(tap) = self.taps.try_receive() {
            if !bezel.contains(tap.x, tap.y) {
                continue;
            }
            model.toggle(now);
            toggles += 1;

            #[cfg(feature = "log")]
            log::debug!(
                "tap at ({}, {}): light_on={}",
                tap.x,
                tap.y,
                model.is_on()
            );
        }

        toggles
    }
}
