use tracing::{debug, trace, warn};

use crate::core::wrap_offset;
use crate::extensions::TickerEvent;
use crate::render::StripRenderer;

use super::TickerEngine;
use super::ticker_model::LoopState;

impl<R: StripRenderer> TickerEngine<R> {
    /// Recomputes the half-span from the render target's current width.
    ///
    /// The position is re-wrapped against the new span, never reset, so the
    /// strip continues from where it was. Returns `false` when nothing could
    /// be measured (detached target or disposed engine).
    pub fn remeasure(&mut self) -> bool {
        if self.model.loop_state == LoopState::Disposed {
            return false;
        }
        if !self.measure_strip() {
            return false;
        }
        self.emit_ticker_event(TickerEvent::Remeasured {
            half_span_px: self.model.half_span_px,
            position_px: self.model.position_px,
        });
        true
    }

    /// Updates the number of items in one copy of the strip and remeasures.
    pub fn set_item_count(&mut self, item_count: usize) -> bool {
        if self.model.item_count != item_count {
            debug!(
                previous = self.model.item_count,
                item_count, "ticker item count changed"
            );
        }
        self.model.item_count = item_count;
        self.remeasure()
    }

    /// Reads the strip width into `half_span_px`.
    ///
    /// Zero items, or a width that is negative or non-finite, degrades to a
    /// static strip at position 0.
    pub(super) fn measure_strip(&mut self) -> bool {
        let Some(content_width) = self.renderer.content_width() else {
            trace!("ticker render target detached; keeping previous measurement");
            return false;
        };

        let half_span_px = if self.model.item_count == 0 {
            0.0
        } else if !content_width.is_finite() || content_width < 0.0 {
            warn!(content_width, "invalid strip width; holding ticker static");
            0.0
        } else {
            content_width / 2.0
        };

        let previous_position = self.model.position_px;
        self.model.half_span_px = half_span_px;
        self.model.position_px = wrap_offset(previous_position, half_span_px);
        trace!(
            half_span_px,
            previous_position,
            position_px = self.model.position_px,
            "ticker strip measured"
        );
        true
    }
}
