use tracing::debug;

use crate::core::{TickerDirection, speed_multiplier};
use crate::error::TickerResult;
use crate::extensions::{TickerEvent, TickerObserver};
use crate::interaction::{PlaybackState, ReversalRampState};
use crate::render::StripRenderer;

use super::TickerEngineConfig;
use super::ticker_model::{LoopState, TickerModel};
use super::validation::validate_engine_config;

/// Scroll-reactive marquee engine.
///
/// One instance per mounted ticker. The host calls [`step`](Self::step) from
/// its frame callback and forwards scroll signals through
/// [`on_velocity_update`](Self::on_velocity_update); the two never need to run
/// at the same cadence.
pub struct TickerEngine<R: StripRenderer> {
    pub(super) renderer: R,
    pub(super) config: TickerEngineConfig,
    pub(super) model: TickerModel,
    pub(super) playback: PlaybackState,
    pub(super) observers: Vec<Box<dyn TickerObserver>>,
}

impl<R: StripRenderer> std::fmt::Debug for TickerEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickerEngine")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("playback", &self.playback)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<R: StripRenderer> TickerEngine<R> {
    #[must_use]
    pub fn config(&self) -> TickerEngineConfig {
        self.config
    }

    /// Replaces tuning. Position and direction are left untouched.
    pub fn set_config(&mut self, config: TickerEngineConfig) -> TickerResult<()> {
        self.config = validate_engine_config(config)?;
        debug!(?config, "ticker config updated");
        Ok(())
    }

    #[must_use]
    pub fn loop_state(&self) -> LoopState {
        self.model.loop_state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.model.loop_state == LoopState::Running
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.model.item_count
    }

    #[must_use]
    pub fn position_px(&self) -> f64 {
        self.model.position_px
    }

    #[must_use]
    pub fn half_span_px(&self) -> f64 {
        self.model.half_span_px
    }

    /// Offset currently written to the strip.
    #[must_use]
    pub fn translate_x_px(&self) -> f64 {
        -self.model.position_px
    }

    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.model.duration_seconds
    }

    #[must_use]
    pub fn last_frame_timestamp_ms(&self) -> Option<f64> {
        self.model.last_frame_timestamp_ms
    }

    /// Direction currently applied to stepping.
    #[must_use]
    pub fn direction(&self) -> TickerDirection {
        self.playback.applied_direction()
    }

    /// Direction most recently requested by a velocity signal.
    #[must_use]
    pub fn requested_direction(&self) -> TickerDirection {
        self.playback.requested_direction()
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.playback.speed()
    }

    /// Multiplier derived from the latest speed, ignoring reversal ramps.
    #[must_use]
    pub fn speed_multiplier(&self) -> f64 {
        speed_multiplier(
            self.playback.speed(),
            self.config.speed_divisor,
            self.config.max_speed_multiplier,
        )
    }

    #[must_use]
    pub fn reversal_ramp_state(&self) -> ReversalRampState {
        self.playback.ramp_state()
    }

    /// Baseline traversal rate at multiplier 1.
    #[must_use]
    pub fn baseline_rate_px_per_sec(&self) -> f64 {
        self.model.baseline_rate_px_per_sec()
    }

    /// Signed rate the next step would apply, including an active ramp.
    #[must_use]
    pub fn effective_rate_px_per_sec(&self) -> f64 {
        self.baseline_rate_px_per_sec()
            * self
                .playback
                .effective_multiplier(self.speed_multiplier(), self.config.reversal_policy)
            * self.playback.applied_direction().sign()
    }

    /// Stops the stepping loop. Safe to call any number of times.
    pub fn dispose(&mut self) {
        if self.model.loop_state == LoopState::Disposed {
            return;
        }
        self.model.loop_state = LoopState::Disposed;
        self.model.last_frame_timestamp_ms = None;
        debug!(position_px = self.model.position_px, "ticker disposed");
        self.emit_ticker_event(TickerEvent::Disposed);
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the render target, e.g. to simulate layout changes.
    ///
    /// Call [`remeasure`](Self::remeasure) after changing its geometry.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
