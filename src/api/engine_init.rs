use tracing::{debug, warn};

use crate::error::TickerResult;
use crate::extensions::TickerEvent;
use crate::interaction::PlaybackState;
use crate::render::StripRenderer;

use super::ticker_model::{LoopState, TickerModel};
use super::validation::{validate_baseline, validate_engine_config};
use super::{TickerEngine, TickerEngineConfig};

impl<R: StripRenderer> TickerEngine<R> {
    /// Creates an engine in the `Detached` state.
    pub fn new(renderer: R, config: TickerEngineConfig) -> TickerResult<Self> {
        let config = validate_engine_config(config)?;
        Ok(Self {
            renderer,
            config,
            model: TickerModel::default(),
            playback: PlaybackState::default(),
            observers: Vec::new(),
        })
    }

    /// Establishes the resting pace and starts the stepping loop.
    ///
    /// At multiplier 1 the strip crosses one half-span every
    /// `duration_seconds`. When `duration_seconds` is not positive the strip
    /// moves at `base_speed_px_per_sec` instead.
    ///
    /// Returns `Ok(false)` without touching state when the render target is
    /// not attached yet (the caller retries on next layout) or the engine was
    /// disposed.
    ///
    /// A baseline that can never move (neither a positive duration nor a
    /// positive base speed) is the one caller mistake the engine reports as
    /// an error instead of degrading; every per-frame operation degrades.
    pub fn initialize(
        &mut self,
        item_count: usize,
        base_speed_px_per_sec: f64,
        duration_seconds: f64,
    ) -> TickerResult<bool> {
        validate_baseline(base_speed_px_per_sec, duration_seconds)?;

        if self.model.loop_state == LoopState::Disposed {
            warn!("initialize called on a disposed ticker; ignoring");
            return Ok(false);
        }
        if self.renderer.content_width().is_none() {
            debug!(item_count, "ticker render target not attached; deferring initialize");
            return Ok(false);
        }

        self.model.item_count = item_count;
        self.model.base_speed_px_per_sec = base_speed_px_per_sec;
        self.model.duration_seconds = duration_seconds;
        self.model.last_frame_timestamp_ms = None;
        self.model.loop_state = LoopState::Running;
        self.measure_strip();

        debug!(
            item_count,
            base_speed_px_per_sec,
            duration_seconds,
            half_span_px = self.model.half_span_px,
            "ticker initialized"
        );
        self.emit_ticker_event(TickerEvent::Initialized {
            half_span_px: self.model.half_span_px,
        });
        Ok(true)
    }
}
