use serde::{Deserialize, Serialize};

use crate::api::LoopState;
use crate::core::TickerDirection;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickerContext {
    pub loop_state: LoopState,
    pub item_count: usize,
    pub position_px: f64,
    pub half_span_px: f64,
    pub direction: TickerDirection,
    pub speed_multiplier: f64,
}

/// Lifecycle and playback events emitted by the engine.
///
/// Per-frame steps are deliberately not part of this stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TickerEvent {
    Initialized { half_span_px: f64 },
    Remeasured { half_span_px: f64, position_px: f64 },
    ReversalRampStarted { from: TickerDirection, to: TickerDirection },
    DirectionChanged { direction: TickerDirection },
    Disposed,
}

/// Hook interface for host-side bookkeeping (analytics, debug overlays).
///
/// Observers can read engine context but never mutate engine state.
pub trait TickerObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: TickerEvent, context: TickerContext);
}
