mod link_proximity;
mod velocity_tracker;

pub use link_proximity::{
    LinkHighlight, LinkProximity, LinkProximityConfig, LinkRect, LinkTarget,
};
pub use velocity_tracker::ScrollVelocityTracker;

use serde::{Deserialize, Serialize};

use crate::core::{Easing, TickerDirection, VelocitySignal, lerp};

/// How the strip changes direction when scroll direction reverses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReversalPolicy {
    /// Direction sign flips on the next step.
    Instant,
    /// Playback rate eases down to zero over `ramp_seconds` of stepped time,
    /// then the direction flips and playback resumes at the current multiplier.
    RampThroughZero { ramp_seconds: f64, easing: Easing },
}

impl Default for ReversalPolicy {
    fn default() -> Self {
        Self::RampThroughZero {
            ramp_seconds: 0.05,
            easing: Easing::Linear,
        }
    }
}

/// Public reversal ramp runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReversalRampState {
    pub active: bool,
    pub elapsed_seconds: f64,
    pub ramp_seconds: f64,
    /// Multiplier captured when the ramp started; the ramp scales it down.
    pub from_multiplier: f64,
}

impl Default for ReversalRampState {
    fn default() -> Self {
        Self {
            active: false,
            elapsed_seconds: 0.0,
            ramp_seconds: 0.0,
            from_multiplier: 1.0,
        }
    }
}

impl ReversalRampState {
    /// Normalized ramp progress in `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        if !self.active || self.ramp_seconds <= 0.0 {
            return 0.0;
        }
        (self.elapsed_seconds / self.ramp_seconds).clamp(0.0, 1.0)
    }
}

/// Result of advancing playback by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackAdvance {
    pub displacement_px: f64,
    pub ramp_started: bool,
    pub direction_changed: bool,
}

/// Velocity inputs and applied direction consumed by the stepping loop.
///
/// Signal handlers only write `speed` and the requested direction; the
/// applied direction changes inside [`PlaybackState::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    speed: f64,
    requested_direction: TickerDirection,
    applied_direction: TickerDirection,
    ramp: ReversalRampState,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            speed: 0.0,
            requested_direction: TickerDirection::Forward,
            applied_direction: TickerDirection::Forward,
            ramp: ReversalRampState::default(),
        }
    }
}

impl PlaybackState {
    #[must_use]
    pub fn speed(self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn applied_direction(self) -> TickerDirection {
        self.applied_direction
    }

    #[must_use]
    pub fn requested_direction(self) -> TickerDirection {
        self.requested_direction
    }

    #[must_use]
    pub fn ramp_state(self) -> ReversalRampState {
        self.ramp
    }

    /// Records a velocity signal.
    ///
    /// Returns `true` when the signal requested a direction different from
    /// the one previously requested. Signals at or below
    /// `reversal_speed_threshold` never change direction.
    pub fn apply_signal(
        &mut self,
        signal: VelocitySignal,
        invert_direction: bool,
        reversal_speed_threshold: f64,
    ) -> bool {
        let signal = signal.sanitized();
        self.speed = signal.speed;

        let direction = signal.direction.to_ticker_direction(invert_direction);
        if direction == self.requested_direction || signal.speed <= reversal_speed_threshold {
            return false;
        }
        self.requested_direction = direction;
        true
    }

    /// Multiplier actually driving the strip, including an active ramp.
    #[must_use]
    pub fn effective_multiplier(self, multiplier: f64, policy: ReversalPolicy) -> f64 {
        if !self.ramp.active {
            return multiplier;
        }
        let eased = ramp_easing(policy).apply(self.ramp.progress());
        lerp(self.ramp.from_multiplier, 0.0, eased)
    }

    /// Advances playback by `elapsed_seconds` and returns the signed displacement.
    ///
    /// `base_rate_px_per_sec` is the resting traversal rate, `multiplier` the
    /// current speed multiplier.
    pub fn advance(
        &mut self,
        elapsed_seconds: f64,
        base_rate_px_per_sec: f64,
        multiplier: f64,
        policy: ReversalPolicy,
    ) -> PlaybackAdvance {
        let mut advance = PlaybackAdvance {
            displacement_px: 0.0,
            ramp_started: false,
            direction_changed: false,
        };
        let mut remaining = elapsed_seconds.max(0.0);

        if self.requested_direction != self.applied_direction && !self.ramp.active {
            match policy {
                ReversalPolicy::RampThroughZero { ramp_seconds, .. } if ramp_seconds > 0.0 => {
                    self.ramp = ReversalRampState {
                        active: true,
                        elapsed_seconds: 0.0,
                        ramp_seconds,
                        from_multiplier: multiplier,
                    };
                    advance.ramp_started = true;
                }
                _ => {
                    self.applied_direction = self.requested_direction;
                    advance.direction_changed = true;
                }
            }
        }

        if self.ramp.active {
            let start = self.ramp.elapsed_seconds;
            let end = (start + remaining).min(self.ramp.ramp_seconds);
            let area = ramp_area(start, end, self.ramp.ramp_seconds, ramp_easing(policy));
            advance.displacement_px += base_rate_px_per_sec
                * self.ramp.from_multiplier
                * self.applied_direction.sign()
                * area;
            remaining = (remaining - (end - start)).max(0.0);
            self.ramp.elapsed_seconds = end;

            if end >= self.ramp.ramp_seconds {
                self.ramp = ReversalRampState::default();
                if self.requested_direction != self.applied_direction {
                    self.applied_direction = self.requested_direction;
                    advance.direction_changed = true;
                }
            }
        }

        advance.displacement_px +=
            base_rate_px_per_sec * multiplier * self.applied_direction.sign() * remaining;
        advance
    }

    /// Drops any pending reversal ramp and adopts the requested direction.
    ///
    /// Returns `true` when the applied direction changed.
    pub fn settle(&mut self) -> bool {
        self.ramp = ReversalRampState::default();
        let changed = self.applied_direction != self.requested_direction;
        self.applied_direction = self.requested_direction;
        changed
    }
}

fn ramp_easing(policy: ReversalPolicy) -> Easing {
    match policy {
        ReversalPolicy::RampThroughZero { easing, .. } => easing,
        ReversalPolicy::Instant => Easing::Linear,
    }
}

/// Integral of the ramp's rate scale `1 - ease(s / ramp)` over `[start, end]`.
///
/// Every curve is a polynomial of degree at most three on each side of its
/// breakpoint, so Simpson's rule per piece is exact.
fn ramp_area(start: f64, end: f64, ramp_seconds: f64, easing: Easing) -> f64 {
    if end <= start || ramp_seconds <= 0.0 {
        return 0.0;
    }
    if let Some(breakpoint) = easing.breakpoint() {
        let split = breakpoint * ramp_seconds;
        if start < split && split < end {
            return simpson_area(start, split, ramp_seconds, easing)
                + simpson_area(split, end, ramp_seconds, easing);
        }
    }
    simpson_area(start, end, ramp_seconds, easing)
}

fn simpson_area(start: f64, end: f64, ramp_seconds: f64, easing: Easing) -> f64 {
    let scale = |s: f64| 1.0 - easing.apply(s / ramp_seconds);
    let mid = 0.5 * (start + end);
    (end - start) / 6.0 * (scale(start) + 4.0 * scale(mid) + scale(end))
}
