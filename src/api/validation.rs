use crate::error::{TickerError, TickerResult};
use crate::interaction::ReversalPolicy;

use super::TickerEngineConfig;

pub(super) fn validate_engine_config(config: TickerEngineConfig) -> TickerResult<TickerEngineConfig> {
    if !config.speed_divisor.is_finite() || config.speed_divisor <= 0.0 {
        return Err(TickerError::InvalidConfig(
            "speed_divisor must be finite and > 0".to_owned(),
        ));
    }
    if config
        .max_speed_multiplier
        .is_some_and(|max| !max.is_finite() || max < 1.0)
    {
        return Err(TickerError::InvalidConfig(
            "max_speed_multiplier must be finite and >= 1".to_owned(),
        ));
    }
    if !config.max_step_seconds.is_finite() || config.max_step_seconds <= 0.0 {
        return Err(TickerError::InvalidConfig(
            "max_step_seconds must be finite and > 0".to_owned(),
        ));
    }
    if !config.reversal_speed_threshold.is_finite() || config.reversal_speed_threshold < 0.0 {
        return Err(TickerError::InvalidConfig(
            "reversal_speed_threshold must be finite and >= 0".to_owned(),
        ));
    }
    validate_reversal_policy(config.reversal_policy)?;
    Ok(config)
}

fn validate_reversal_policy(policy: ReversalPolicy) -> TickerResult<ReversalPolicy> {
    match policy {
        ReversalPolicy::Instant => {}
        ReversalPolicy::RampThroughZero { ramp_seconds, .. } => {
            if !ramp_seconds.is_finite() || ramp_seconds < 0.0 {
                return Err(TickerError::InvalidConfig(
                    "reversal ramp_seconds must be finite and >= 0".to_owned(),
                ));
            }
        }
    }
    Ok(policy)
}

/// Checks `initialize` arguments: at least one of duration / base speed must
/// yield a positive traversal rate.
pub(super) fn validate_baseline(base_speed_px_per_sec: f64, duration_seconds: f64) -> TickerResult<()> {
    let duration_ok = duration_seconds.is_finite() && duration_seconds > 0.0;
    let speed_ok = base_speed_px_per_sec.is_finite() && base_speed_px_per_sec > 0.0;
    if duration_ok || speed_ok {
        return Ok(());
    }
    Err(TickerError::InvalidConfig(format!(
        "ticker baseline needs a positive duration or base speed (duration={duration_seconds}, base_speed={base_speed_px_per_sec})"
    )))
}
