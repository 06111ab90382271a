use serde::{Deserialize, Serialize};

use crate::core::TickerDirection;
use crate::error::{TickerError, TickerResult};
use crate::interaction::ReversalRampState;
use crate::render::StripRenderer;

use super::{LoopState, TickerEngine, TickerEngineConfig};

/// Serializable state snapshot used by regression tests and debug overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshot {
    pub loop_state: LoopState,
    pub item_count: usize,
    pub position_px: f64,
    pub half_span_px: f64,
    pub translate_x_px: f64,
    pub duration_seconds: Option<f64>,
    pub baseline_rate_px_per_sec: f64,
    pub effective_rate_px_per_sec: f64,
    pub speed: f64,
    pub speed_multiplier: f64,
    pub direction: TickerDirection,
    pub requested_direction: TickerDirection,
    pub reversal_ramp: ReversalRampState,
    pub last_frame_timestamp_ms: Option<f64>,
    pub config: TickerEngineConfig,
}

impl<R: StripRenderer> TickerEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> TickerSnapshot {
        TickerSnapshot {
            loop_state: self.model.loop_state,
            item_count: self.model.item_count,
            position_px: self.model.position_px,
            half_span_px: self.model.half_span_px,
            translate_x_px: self.translate_x_px(),
            duration_seconds: self.model.effective_duration_seconds(),
            baseline_rate_px_per_sec: self.baseline_rate_px_per_sec(),
            effective_rate_px_per_sec: self.effective_rate_px_per_sec(),
            speed: self.playback.speed(),
            speed_multiplier: self.speed_multiplier(),
            direction: self.playback.applied_direction(),
            requested_direction: self.playback.requested_direction(),
            reversal_ramp: self.playback.ramp_state(),
            last_frame_timestamp_ms: self.model.last_frame_timestamp_ms,
            config: self.config,
        }
    }

    pub fn snapshot_json_pretty(&self) -> TickerResult<String> {
        serde_json::to_string_pretty(&self.snapshot()).map_err(|e| {
            TickerError::InvalidConfig(format!("failed to serialize snapshot: {e}"))
        })
    }
}
