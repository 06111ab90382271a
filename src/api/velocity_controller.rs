use tracing::{trace, warn};

use crate::core::VelocitySignal;
use crate::render::StripRenderer;

use super::TickerEngine;
use super::ticker_model::LoopState;

impl<R: StripRenderer> TickerEngine<R> {
    /// Records the latest scroll velocity.
    ///
    /// Only updates the inputs read by the next [`step`](Self::step); it never
    /// moves the strip, so it is safe to call on every scroll notification.
    /// Negative or non-finite speed is clamped to zero.
    pub fn on_velocity_update(&mut self, signal: VelocitySignal) {
        if self.model.loop_state == LoopState::Disposed {
            return;
        }
        if !signal.speed.is_finite() || signal.speed < 0.0 {
            warn!(speed = signal.speed, "clamping invalid scroll speed to zero");
        }

        let reversal_requested = self.playback.apply_signal(
            signal,
            self.config.invert_direction,
            self.config.reversal_speed_threshold,
        );
        trace!(
            speed = self.playback.speed(),
            requested = ?self.playback.requested_direction(),
            reversal_requested,
            "ticker velocity updated"
        );
    }
}
