use approx::assert_abs_diff_eq;
use ticker_rs::api::{LoopState, TickerEngine, TickerEngineConfig};
use ticker_rs::core::{ScrollDirection, TickerDirection, VelocitySignal};
use ticker_rs::interaction::ReversalPolicy;
use ticker_rs::render::NullRenderer;

/// 400px strip (half-span 200) crossing one half-span every 10s => 20px/s.
fn running_engine(config: TickerEngineConfig) -> TickerEngine<NullRenderer> {
    let mut engine =
        TickerEngine::new(NullRenderer::attached(400.0), config).expect("engine init");
    assert!(engine.initialize(5, 0.0, 10.0).expect("initialize"));
    engine
}

fn step_for(engine: &mut TickerEngine<NullRenderer>, start_ms: f64, seconds: f64, frame_ms: f64) -> f64 {
    let frames = (seconds * 1000.0 / frame_ms).round() as usize;
    let mut now = start_ms;
    for _ in 0..frames {
        now += frame_ms;
        engine.step(now);
    }
    now
}

#[test]
fn idle_strip_moves_at_baseline_rate() {
    let mut engine = running_engine(TickerEngineConfig::default());
    assert_abs_diff_eq!(engine.baseline_rate_px_per_sec(), 20.0, epsilon = 1e-12);

    let first = engine.step(0.0);
    assert!(first.stepped);
    assert_eq!(first.elapsed_seconds, 0.0);
    assert_eq!(engine.position_px(), 0.0);

    step_for(&mut engine, 0.0, 5.0, 50.0);
    assert_abs_diff_eq!(engine.position_px(), 100.0, epsilon = 1e-6);
    assert_abs_diff_eq!(engine.translate_x_px(), -100.0, epsilon = 1e-6);
    assert_eq!(engine.speed_multiplier(), 1.0);
}

#[test]
fn full_duration_wraps_back_to_start() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    step_for(&mut engine, 0.0, 10.0, 100.0);

    let position = engine.position_px();
    assert!((0.0..200.0).contains(&position));
    assert!(position < 1e-6 || position > 200.0 - 1e-6);
}

#[test]
fn scroll_speed_scales_rate_by_divisor() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.on_velocity_update(VelocitySignal::new(55.0, ScrollDirection::Down));
    assert_abs_diff_eq!(engine.speed_multiplier(), 2.0, epsilon = 1e-12);

    engine.step(0.0);
    step_for(&mut engine, 0.0, 1.0, 100.0);
    assert_abs_diff_eq!(engine.position_px(), 40.0, epsilon = 1e-6);
    assert_eq!(engine.direction(), TickerDirection::Forward);
}

#[test]
fn multiplier_cap_limits_fast_scrolls() {
    let config = TickerEngineConfig::default().with_max_speed_multiplier(Some(5.0));
    let mut engine = running_engine(config);
    engine.on_velocity_update(VelocitySignal::new(10_000.0, ScrollDirection::Down));
    assert_eq!(engine.speed_multiplier(), 5.0);
}

#[test]
fn velocity_update_never_moves_the_strip() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    step_for(&mut engine, 0.0, 1.0, 100.0);
    let before = engine.position_px();

    for _ in 0..20 {
        engine.on_velocity_update(VelocitySignal::new(500.0, ScrollDirection::Up));
        engine.on_velocity_update(VelocitySignal::new(500.0, ScrollDirection::Down));
    }
    assert_eq!(engine.position_px(), before);
}

#[test]
fn scrolling_up_reverses_with_instant_policy() {
    let config = TickerEngineConfig::default().with_reversal_policy(ReversalPolicy::Instant);
    let mut engine = running_engine(config);
    engine.step(0.0);
    let now = step_for(&mut engine, 0.0, 2.5, 100.0);
    assert_abs_diff_eq!(engine.position_px(), 50.0, epsilon = 1e-6);

    engine.on_velocity_update(VelocitySignal::new(0.0, ScrollDirection::Down));
    engine.on_velocity_update(VelocitySignal::new(1e-9, ScrollDirection::Up));
    assert_eq!(engine.requested_direction(), TickerDirection::Reverse);

    step_for(&mut engine, now, 1.0, 100.0);
    assert_eq!(engine.direction(), TickerDirection::Reverse);
    assert_abs_diff_eq!(engine.position_px(), 30.0, epsilon = 1e-6);
    assert!(engine.effective_rate_px_per_sec() < 0.0);
}

#[test]
fn reverse_direction_wraps_below_zero() {
    let config = TickerEngineConfig::default().with_reversal_policy(ReversalPolicy::Instant);
    let mut engine = running_engine(config);
    engine.on_velocity_update(VelocitySignal::new(1.0, ScrollDirection::Up));
    engine.step(0.0);
    engine.step(100.0);

    let multiplier = engine.speed_multiplier();
    assert_abs_diff_eq!(
        engine.position_px(),
        200.0 - 20.0 * multiplier * 0.1,
        epsilon = 1e-9
    );
}

#[test]
fn inverted_mapping_reverses_on_scroll_down() {
    let config = TickerEngineConfig::default()
        .with_invert_direction(true)
        .with_reversal_policy(ReversalPolicy::Instant);
    let mut engine = running_engine(config);
    engine.on_velocity_update(VelocitySignal::new(10.0, ScrollDirection::Down));
    engine.step(0.0);
    assert_eq!(engine.direction(), TickerDirection::Reverse);
}

#[test]
fn slow_signals_below_threshold_keep_direction() {
    let config = TickerEngineConfig::default()
        .with_reversal_speed_threshold(30.0)
        .with_reversal_policy(ReversalPolicy::Instant);
    let mut engine = running_engine(config);
    engine.on_velocity_update(VelocitySignal::new(20.0, ScrollDirection::Up));
    engine.step(0.0);
    assert_eq!(engine.direction(), TickerDirection::Forward);
    assert_eq!(engine.speed(), 20.0);

    engine.on_velocity_update(VelocitySignal::new(31.0, ScrollDirection::Up));
    engine.step(10.0);
    assert_eq!(engine.direction(), TickerDirection::Reverse);
}

#[test]
fn reversal_ramp_eases_through_zero_before_flipping() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    let now = step_for(&mut engine, 0.0, 5.0, 100.0);
    assert_abs_diff_eq!(engine.position_px(), 100.0, epsilon = 1e-6);

    engine.on_velocity_update(VelocitySignal::new(55.0, ScrollDirection::Up));
    assert_eq!(engine.direction(), TickerDirection::Forward);

    // 40px/s easing linearly to zero over 50ms covers 1px, still forward.
    engine.step(now + 50.0);
    assert_abs_diff_eq!(engine.position_px(), 101.0, epsilon = 1e-6);
    assert_eq!(engine.direction(), TickerDirection::Reverse);
    assert!(!engine.reversal_ramp_state().active);

    engine.step(now + 150.0);
    assert_abs_diff_eq!(engine.position_px(), 97.0, epsilon = 1e-6);
}

#[test]
fn ramp_state_is_visible_mid_reversal() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    engine.on_velocity_update(VelocitySignal::new(55.0, ScrollDirection::Up));
    engine.step(25.0);

    let ramp = engine.reversal_ramp_state();
    assert!(ramp.active);
    assert_abs_diff_eq!(ramp.progress(), 0.5, epsilon = 1e-9);
    assert_eq!(engine.direction(), TickerDirection::Forward);
    assert_abs_diff_eq!(engine.effective_rate_px_per_sec(), 20.0, epsilon = 1e-9);
}

#[test]
fn long_frame_gaps_are_clamped() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    let report = engine.step(60_000.0);
    assert_eq!(report.elapsed_seconds, 0.25);
    assert_abs_diff_eq!(engine.position_px(), 5.0, epsilon = 1e-9);
}

#[test]
fn backwards_clock_integrates_nothing() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(1_000.0);
    engine.step(1_100.0);
    let position = engine.position_px();

    let report = engine.step(900.0);
    assert!(report.stepped);
    assert_eq!(report.elapsed_seconds, 0.0);
    assert_eq!(engine.position_px(), position);
}

#[test]
fn non_finite_timestamp_is_ignored() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    let report = engine.step(f64::NAN);
    assert!(!report.stepped);
    assert_eq!(engine.last_frame_timestamp_ms(), Some(0.0));
}

#[test]
fn invalid_speed_is_clamped_to_zero() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.on_velocity_update(VelocitySignal::new(f64::INFINITY, ScrollDirection::Down));
    assert_eq!(engine.speed(), 0.0);
    engine.on_velocity_update(VelocitySignal::new(-40.0, ScrollDirection::Down));
    assert_eq!(engine.speed(), 0.0);
    assert_eq!(engine.speed_multiplier(), 1.0);
}

#[test]
fn remeasure_keeps_position_modulo_new_span() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    step_for(&mut engine, 0.0, 7.5, 250.0);
    assert_abs_diff_eq!(engine.position_px(), 150.0, epsilon = 1e-6);

    engine.renderer_mut().set_content_width(Some(200.0));
    assert!(engine.remeasure());
    assert_eq!(engine.half_span_px(), 100.0);
    assert_abs_diff_eq!(engine.position_px(), 50.0, epsilon = 1e-6);
}

#[test]
fn remeasure_with_detached_target_keeps_measurement() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.renderer_mut().set_content_width(None);
    assert!(!engine.remeasure());
    assert_eq!(engine.half_span_px(), 200.0);
}

#[test]
fn zero_items_hold_the_strip_still() {
    let mut engine =
        TickerEngine::new(NullRenderer::attached(400.0), TickerEngineConfig::default())
            .expect("engine init");
    assert!(engine.initialize(0, 0.0, 10.0).expect("initialize"));
    assert_eq!(engine.half_span_px(), 0.0);

    engine.on_velocity_update(VelocitySignal::new(500.0, ScrollDirection::Up));
    engine.step(0.0);
    for frame in 1..=10 {
        let report = engine.step(f64::from(frame) * 100.0);
        assert!(report.stepped);
        assert_eq!(report.position_px, 0.0);
    }
    assert_eq!(engine.translate_x_px(), 0.0);
    assert_eq!(engine.renderer().frame_count, 11);
    assert_eq!(engine.direction(), TickerDirection::Reverse);
}

#[test]
fn items_added_later_start_motion() {
    let mut engine =
        TickerEngine::new(NullRenderer::attached(400.0), TickerEngineConfig::default())
            .expect("engine init");
    engine.initialize(0, 0.0, 10.0).expect("initialize");
    assert!(engine.set_item_count(5));
    assert_eq!(engine.item_count(), 5);
    assert_eq!(engine.half_span_px(), 200.0);

    engine.step(0.0);
    engine.step(100.0);
    assert_abs_diff_eq!(engine.position_px(), 2.0, epsilon = 1e-9);
}

#[test]
fn base_speed_drives_when_duration_is_unset() {
    let mut engine =
        TickerEngine::new(NullRenderer::attached(400.0), TickerEngineConfig::default())
            .expect("engine init");
    engine.initialize(5, 30.0, 0.0).expect("initialize");
    assert_eq!(engine.baseline_rate_px_per_sec(), 30.0);
    let duration = engine.snapshot().duration_seconds.expect("effective duration");
    assert_abs_diff_eq!(duration, 200.0 / 30.0, epsilon = 1e-12);
}

#[test]
fn frames_reach_the_render_target() {
    let mut engine = running_engine(TickerEngineConfig::default());
    engine.step(0.0);
    engine.step(250.0);

    let frame = engine.renderer().last_frame.expect("frame rendered");
    assert_abs_diff_eq!(frame.position_px, 5.0, epsilon = 1e-9);
    assert_eq!(frame.translate_x_px, -frame.position_px);
    assert_eq!(frame.css_transform(), "translate3d(-5.000px, 0, 0)");
}

#[test]
fn lifecycle_defers_until_attached_and_stops_on_dispose() {
    let mut engine = TickerEngine::new(NullRenderer::detached(), TickerEngineConfig::default())
        .expect("engine init");
    assert!(!engine.initialize(5, 0.0, 10.0).expect("initialize"));
    assert_eq!(engine.loop_state(), LoopState::Detached);
    assert!(!engine.step(0.0).stepped);

    engine.renderer_mut().set_content_width(Some(400.0));
    assert!(engine.initialize(5, 0.0, 10.0).expect("initialize"));
    assert!(engine.is_running());

    engine.dispose();
    engine.dispose();
    assert_eq!(engine.loop_state(), LoopState::Disposed);
    assert!(!engine.step(100.0).stepped);
    assert!(!engine.initialize(5, 0.0, 10.0).expect("initialize after dispose"));
    assert!(!engine.remeasure());
    assert_eq!(engine.renderer().frame_count, 0);
}

#[test]
fn baseline_that_never_moves_is_rejected() {
    let mut engine =
        TickerEngine::new(NullRenderer::attached(400.0), TickerEngineConfig::default())
            .expect("engine init");
    assert!(engine.initialize(5, 0.0, 0.0).is_err());
    assert!(engine.initialize(5, f64::NAN, -1.0).is_err());
    assert_eq!(engine.loop_state(), LoopState::Detached);
}

#[test]
fn invalid_config_is_rejected() {
    let zero_divisor = TickerEngineConfig::default().with_speed_divisor(0.0);
    assert!(TickerEngine::new(NullRenderer::default(), zero_divisor).is_err());

    let low_cap = TickerEngineConfig::default().with_max_speed_multiplier(Some(0.5));
    assert!(TickerEngine::new(NullRenderer::default(), low_cap).is_err());

    let nan_cap = TickerEngineConfig::default().with_max_speed_multiplier(Some(f64::NAN));
    assert!(TickerEngine::new(NullRenderer::default(), nan_cap).is_err());

    let exact_cap = TickerEngineConfig::default().with_max_speed_multiplier(Some(1.0));
    assert!(TickerEngine::new(NullRenderer::default(), exact_cap).is_ok());

    let mut engine = running_engine(TickerEngineConfig::default());
    let bad_step = TickerEngineConfig::default().with_max_step_seconds(0.0);
    assert!(engine.set_config(bad_step).is_err());
    assert_eq!(engine.config(), TickerEngineConfig::default());
}
