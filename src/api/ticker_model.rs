use serde::{Deserialize, Serialize};

/// Stepping-loop lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopState {
    /// Created but not initialized against an attached render target.
    #[default]
    Detached,
    Running,
    /// Disposed; the engine no longer reacts to frames or signals.
    Disposed,
}

/// Owned strip state. Mutated only by engine controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TickerModel {
    pub(super) loop_state: LoopState,
    pub(super) item_count: usize,
    pub(super) base_speed_px_per_sec: f64,
    pub(super) duration_seconds: f64,
    pub(super) position_px: f64,
    pub(super) half_span_px: f64,
    pub(super) last_frame_timestamp_ms: Option<f64>,
}

impl Default for TickerModel {
    fn default() -> Self {
        Self {
            loop_state: LoopState::Detached,
            item_count: 0,
            base_speed_px_per_sec: 0.0,
            duration_seconds: 0.0,
            position_px: 0.0,
            half_span_px: 0.0,
            last_frame_timestamp_ms: None,
        }
    }
}

impl TickerModel {
    /// Traversal rate at multiplier 1, in px/s.
    ///
    /// A positive `duration_seconds` wins: one half-span per duration.
    /// Otherwise the explicit base speed is used.
    pub(super) fn baseline_rate_px_per_sec(&self) -> f64 {
        if self.half_span_px <= 0.0 {
            return 0.0;
        }
        if self.duration_seconds.is_finite() && self.duration_seconds > 0.0 {
            return self.half_span_px / self.duration_seconds;
        }
        if self.base_speed_px_per_sec.is_finite() && self.base_speed_px_per_sec > 0.0 {
            return self.base_speed_px_per_sec;
        }
        0.0
    }

    /// Duration of one half-span traversal at multiplier 1.
    pub(super) fn effective_duration_seconds(&self) -> Option<f64> {
        let rate = self.baseline_rate_px_per_sec();
        (rate > 0.0).then(|| self.half_span_px / rate)
    }
}
