use crate::extensions::{TickerContext, TickerEvent};
use crate::render::StripRenderer;

use super::TickerEngine;

impl<R: StripRenderer> TickerEngine<R> {
    pub(super) fn ticker_context(&self) -> TickerContext {
        TickerContext {
            loop_state: self.model.loop_state,
            item_count: self.model.item_count,
            position_px: self.model.position_px,
            half_span_px: self.model.half_span_px,
            direction: self.playback.applied_direction(),
            speed_multiplier: self.speed_multiplier(),
        }
    }

    pub(super) fn emit_ticker_event(&mut self, event: TickerEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.ticker_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
