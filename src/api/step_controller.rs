use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{TickerDirection, wrap_offset};
use crate::extensions::TickerEvent;
use crate::render::{StripFrame, StripRenderer};

use super::TickerEngine;
use super::ticker_model::LoopState;

/// Outcome of a single [`TickerEngine::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// `false` when the loop is not running or the timestamp was unusable.
    pub stepped: bool,
    /// Elapsed time actually integrated, after clamping.
    pub elapsed_seconds: f64,
    pub position_px: f64,
    pub translate_x_px: f64,
    pub direction: TickerDirection,
}

impl<R: StripRenderer> TickerEngine<R> {
    /// Advances the strip to `now_ms` (a monotonic frame timestamp in ms).
    ///
    /// The first frame after (re)start integrates zero time. Long gaps are
    /// clamped to `max_step_seconds` and backwards clocks integrate zero, so
    /// the strip never jumps. Renderer failures are logged, not returned.
    pub fn step(&mut self, now_ms: f64) -> StepReport {
        if self.model.loop_state != LoopState::Running {
            return self.step_report(false, 0.0);
        }
        if !now_ms.is_finite() {
            warn!(now_ms, "ignoring non-finite frame timestamp");
            return self.step_report(false, 0.0);
        }

        let elapsed_seconds = self.elapsed_since_last_frame(now_ms);
        self.model.last_frame_timestamp_ms = Some(now_ms);

        if self.model.half_span_px > 0.0 {
            let from = self.playback.applied_direction();
            let advance = self.playback.advance(
                elapsed_seconds,
                self.model.baseline_rate_px_per_sec(),
                self.speed_multiplier(),
                self.config.reversal_policy,
            );
            self.model.position_px = wrap_offset(
                self.model.position_px + advance.displacement_px,
                self.model.half_span_px,
            );

            if advance.ramp_started {
                debug!(?from, to = ?self.playback.requested_direction(), "ticker reversal ramp started");
                self.emit_ticker_event(TickerEvent::ReversalRampStarted {
                    from,
                    to: self.playback.requested_direction(),
                });
            }
            if advance.direction_changed {
                debug!(direction = ?self.playback.applied_direction(), "ticker direction changed");
                self.emit_ticker_event(TickerEvent::DirectionChanged {
                    direction: self.playback.applied_direction(),
                });
            }
        } else {
            // Unmeasured strip: hold still but keep direction inputs current.
            self.model.position_px = 0.0;
            if self.playback.settle() {
                self.emit_ticker_event(TickerEvent::DirectionChanged {
                    direction: self.playback.applied_direction(),
                });
            }
        }

        let frame = StripFrame::new(
            self.model.position_px,
            self.model.half_span_px,
            self.playback.applied_direction(),
        );
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "ticker render target rejected frame");
        }

        self.step_report(true, elapsed_seconds)
    }

    fn elapsed_since_last_frame(&self, now_ms: f64) -> f64 {
        let Some(previous_ms) = self.model.last_frame_timestamp_ms else {
            return 0.0;
        };
        let raw = (now_ms - previous_ms) / 1000.0;
        if raw > self.config.max_step_seconds {
            trace!(
                raw_elapsed_seconds = raw,
                max_step_seconds = self.config.max_step_seconds,
                "clamping long frame gap"
            );
        }
        raw.clamp(0.0, self.config.max_step_seconds)
    }

    fn step_report(&self, stepped: bool, elapsed_seconds: f64) -> StepReport {
        StepReport {
            stepped,
            elapsed_seconds,
            position_px: self.model.position_px,
            translate_x_px: -self.model.position_px,
            direction: self.playback.applied_direction(),
        }
    }
}
