use serde::{Deserialize, Serialize};

use crate::core::TickerDirection;
use crate::error::{TickerError, TickerResult};

/// Transform written to the strip for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripFrame {
    /// Horizontal translation, always `-position_px`.
    pub translate_x_px: f64,
    pub position_px: f64,
    pub half_span_px: f64,
    pub direction: TickerDirection,
}

impl StripFrame {
    #[must_use]
    pub fn new(position_px: f64, half_span_px: f64, direction: TickerDirection) -> Self {
        Self {
            translate_x_px: -position_px,
            position_px,
            half_span_px,
            direction,
        }
    }

    /// CSS-style transform string, e.g. `translate3d(-12.500px, 0, 0)`.
    #[must_use]
    pub fn css_transform(self) -> String {
        format!("translate3d({:.3}px, 0, 0)", self.translate_x_px)
    }

    pub fn validate(self) -> TickerResult<()> {
        if !self.translate_x_px.is_finite() || !self.half_span_px.is_finite() {
            return Err(TickerError::Render(
                "strip transform must be finite".to_owned(),
            ));
        }
        if self.half_span_px > 0.0
            && !(0.0..self.half_span_px).contains(&self.position_px)
        {
            return Err(TickerError::Render(format!(
                "strip position {} outside [0, {})",
                self.position_px, self.half_span_px
            )));
        }
        Ok(())
    }
}
