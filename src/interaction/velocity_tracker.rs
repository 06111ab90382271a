use tracing::trace;

use crate::core::{ScrollDirection, VelocitySignal};

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollSample {
    position_px: f64,
    timestamp_ms: f64,
}

/// Converts raw scroll samples into [`VelocitySignal`]s.
///
/// The first sample after creation or [`reset`](Self::reset) only calibrates
/// the tracker, so activation never produces a speed spike measured from
/// time zero.
#[derive(Debug, Clone, Default)]
pub struct ScrollVelocityTracker {
    last: Option<ScrollSample>,
    direction: ScrollDirection,
}

impl ScrollVelocityTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the previous sample; the next one becomes a calibration frame.
    pub fn reset(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.last.is_some()
    }

    /// Last direction emitted (or the default `Down` before any movement).
    #[must_use]
    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Feeds one scroll notification.
    ///
    /// Returns `None` for the calibration frame, for non-finite input, and
    /// when no time has elapsed since the previous sample. A timestamp that
    /// goes backwards recalibrates from the new sample.
    pub fn sample(&mut self, position_px: f64, timestamp_ms: f64) -> Option<VelocitySignal> {
        if !position_px.is_finite() || !timestamp_ms.is_finite() {
            return None;
        }
        let current = ScrollSample {
            position_px,
            timestamp_ms,
        };

        let Some(previous) = self.last else {
            self.last = Some(current);
            trace!(position_px, timestamp_ms, "scroll tracker calibrated");
            return None;
        };

        let elapsed_seconds = (timestamp_ms - previous.timestamp_ms) / 1000.0;
        if elapsed_seconds < 0.0 {
            self.last = Some(current);
            trace!(timestamp_ms, "scroll tracker clock went backwards, recalibrating");
            return None;
        }
        if elapsed_seconds == 0.0 {
            return None;
        }

        let delta = position_px - previous.position_px;
        if delta > 0.0 {
            self.direction = ScrollDirection::Down;
        } else if delta < 0.0 {
            self.direction = ScrollDirection::Up;
        }
        self.last = Some(current);

        Some(VelocitySignal::new(
            delta.abs() / elapsed_seconds,
            self.direction,
        ))
    }
}
