use serde::{Deserialize, Serialize};

/// Visual direction of the strip.
///
/// `Forward` moves content to the left (the rendered offset decreases),
/// `Reverse` moves it to the right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickerDirection {
    #[default]
    Forward,
    Reverse,
}

impl TickerDirection {
    /// `+1.0` for `Forward`, `-1.0` for `Reverse`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    #[default]
    Down,
}

impl ScrollDirection {
    /// Maps page scroll direction onto strip direction.
    ///
    /// Scrolling down plays the strip forward unless `inverted` is set.
    #[must_use]
    pub fn to_ticker_direction(self, inverted: bool) -> TickerDirection {
        let direction = match self {
            Self::Down => TickerDirection::Forward,
            Self::Up => TickerDirection::Reverse,
        };
        if inverted {
            direction.flipped()
        } else {
            direction
        }
    }
}

/// Scroll velocity sample published to the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocitySignal {
    /// Scroll magnitude in pixels per second (or a unitless magnitude).
    pub speed: f64,
    pub direction: ScrollDirection,
}

impl VelocitySignal {
    #[must_use]
    pub fn new(speed: f64, direction: ScrollDirection) -> Self {
        Self { speed, direction }
    }

    #[must_use]
    pub fn idle(direction: ScrollDirection) -> Self {
        Self {
            speed: 0.0,
            direction,
        }
    }

    /// Returns the signal with negative or non-finite speed clamped to `0`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let speed = if self.speed.is_finite() && self.speed > 0.0 {
            self.speed
        } else {
            0.0
        };
        Self {
            speed,
            direction: self.direction,
        }
    }
}
