use serde::{Deserialize, Serialize};

/// Easing curves for playback-rate ramps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    SmoothStep,
}

impl Easing {
    /// Maps normalized progress `t` (clamped to `[0, 1]`) onto eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Normalized progress where the curve switches polynomial pieces.
    #[must_use]
    pub fn breakpoint(self) -> Option<f64> {
        match self {
            Self::InOutQuad => Some(0.5),
            Self::Linear | Self::InQuad | Self::OutQuad | Self::SmoothStep => None,
        }
    }
}

#[must_use]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
