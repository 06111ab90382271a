use serde::{Deserialize, Serialize};

use crate::error::{TickerError, TickerResult};
use crate::interaction::ReversalPolicy;

/// Playback tuning for a ticker instance.
///
/// Serializable so hosts can ship tuning as JSON next to their layout
/// instead of hard-coding constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickerEngineConfig {
    /// Scroll speed that adds `1x` to the playback multiplier.
    #[serde(default = "default_speed_divisor")]
    pub speed_divisor: f64,
    /// Optional upper bound on the multiplier. The lower bound is always `1`.
    #[serde(default)]
    pub max_speed_multiplier: Option<f64>,
    /// Ceiling for a single frame's elapsed time, in seconds.
    #[serde(default = "default_max_step_seconds")]
    pub max_step_seconds: f64,
    #[serde(default)]
    pub reversal_policy: ReversalPolicy,
    /// Signals at or below this speed never reverse the strip.
    #[serde(default)]
    pub reversal_speed_threshold: f64,
    /// Play forward while scrolling up instead of down.
    #[serde(default)]
    pub invert_direction: bool,
}

impl Default for TickerEngineConfig {
    fn default() -> Self {
        Self {
            speed_divisor: default_speed_divisor(),
            max_speed_multiplier: None,
            max_step_seconds: default_max_step_seconds(),
            reversal_policy: ReversalPolicy::default(),
            reversal_speed_threshold: 0.0,
            invert_direction: false,
        }
    }
}

impl TickerEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_speed_divisor(mut self, speed_divisor: f64) -> Self {
        self.speed_divisor = speed_divisor;
        self
    }

    #[must_use]
    pub fn with_max_speed_multiplier(mut self, max_speed_multiplier: Option<f64>) -> Self {
        self.max_speed_multiplier = max_speed_multiplier;
        self
    }

    #[must_use]
    pub fn with_max_step_seconds(mut self, max_step_seconds: f64) -> Self {
        self.max_step_seconds = max_step_seconds;
        self
    }

    #[must_use]
    pub fn with_reversal_policy(mut self, policy: ReversalPolicy) -> Self {
        self.reversal_policy = policy;
        self
    }

    #[must_use]
    pub fn with_reversal_speed_threshold(mut self, threshold: f64) -> Self {
        self.reversal_speed_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> TickerResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TickerError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> TickerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TickerError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_speed_divisor() -> f64 {
    55.0
}

fn default_max_step_seconds() -> f64 {
    0.25
}
