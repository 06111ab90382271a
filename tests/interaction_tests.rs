use approx::assert_abs_diff_eq;
use ticker_rs::core::{ScrollDirection, VelocitySignal};
use ticker_rs::interaction::{
    LinkProximity, LinkProximityConfig, LinkRect, LinkTarget, ScrollVelocityTracker,
};

#[test]
fn tracker_first_sample_only_calibrates() {
    let mut tracker = ScrollVelocityTracker::new();
    assert!(!tracker.is_calibrated());
    assert_eq!(tracker.sample(5_000.0, 1_000.0), None);
    assert!(tracker.is_calibrated());

    let signal = tracker.sample(5_100.0, 1_100.0).expect("second sample");
    assert_eq!(signal, VelocitySignal::new(1_000.0, ScrollDirection::Down));
}

#[test]
fn tracker_reports_upward_scroll() {
    let mut tracker = ScrollVelocityTracker::new();
    tracker.sample(800.0, 0.0);
    let signal = tracker.sample(600.0, 50.0).expect("upward sample");
    assert_eq!(signal.direction, ScrollDirection::Up);
    assert_abs_diff_eq!(signal.speed, 4_000.0, epsilon = 1e-9);
}

#[test]
fn tracker_keeps_direction_while_stationary() {
    let mut tracker = ScrollVelocityTracker::new();
    tracker.sample(800.0, 0.0);
    tracker.sample(700.0, 16.0);
    let signal = tracker.sample(700.0, 32.0).expect("stationary sample");
    assert_eq!(signal, VelocitySignal::idle(ScrollDirection::Up));
}

#[test]
fn tracker_recalibrates_on_reset_and_backwards_clock() {
    let mut tracker = ScrollVelocityTracker::new();
    tracker.sample(0.0, 100.0);
    assert_eq!(tracker.sample(10.0, 100.0), None);
    assert_eq!(tracker.sample(50.0, 50.0), None);

    let signal = tracker.sample(60.0, 150.0).expect("after recalibration");
    assert_abs_diff_eq!(signal.speed, 100.0, epsilon = 1e-9);

    tracker.reset();
    assert!(!tracker.is_calibrated());
    assert_eq!(tracker.sample(f64::NAN, 200.0), None);
    assert_eq!(tracker.sample(0.0, 200.0), None);
}

fn stacked_links() -> Vec<LinkTarget> {
    (0..3)
        .map(|index| {
            let top = f64::from(index) * 40.0;
            LinkTarget::new(LinkRect::new(0.0, top, 200.0, 40.0), (220.0, top + 20.0))
        })
        .collect()
}

#[test]
fn proximity_picks_band_and_hides_arrow_up_close() {
    let mut proximity = LinkProximity::default();
    proximity.set_links(stacked_links());
    assert_eq!(proximity.link_count(), 3);

    let highlight = proximity.on_pointer_move(100.0, 60.0);
    assert_eq!(highlight.hovered_index, Some(1));
    assert_eq!(highlight.distance_px, 0.0);
    assert!(!highlight.arrow_visible);
    assert_eq!(highlight.arrow_angle_deg, None);
    assert_eq!(highlight.effect_scale, 2.5);
}

#[test]
fn proximity_clamps_band_and_shows_arrow_behind_link() {
    let mut proximity = LinkProximity::default();
    proximity.set_links(stacked_links());

    let highlight = proximity.on_pointer_move(100.0, 300.0);
    assert_eq!(highlight.hovered_index, Some(2));
    assert_abs_diff_eq!(highlight.distance_px, 200.0, epsilon = 1e-9);
    assert!(highlight.arrow_visible);
    let angle = highlight.arrow_angle_deg.expect("visible arrow angle");
    assert!(angle > 100.0);
    assert_abs_diff_eq!(highlight.effect_scale, 800.0 / 120.0, epsilon = 1e-9);
}

#[test]
fn proximity_hides_arrow_inside_angle_window() {
    let mut proximity = LinkProximity::default();
    proximity.set_links(stacked_links());

    let highlight = proximity.on_pointer_move(400.0, 100.0);
    assert_eq!(highlight.hovered_index, Some(2));
    assert!(!highlight.arrow_visible);
    assert_abs_diff_eq!(highlight.effect_scale, 800.0 / 220.0, epsilon = 1e-9);
}

#[test]
fn proximity_scale_caps_just_outside_offset() {
    let mut proximity = LinkProximity::new(LinkProximityConfig::default());
    proximity.set_links(stacked_links());

    let highlight = proximity.on_pointer_move(181.0, 100.0);
    assert_abs_diff_eq!(highlight.distance_px, 81.0, epsilon = 1e-9);
    assert_eq!(highlight.effect_scale, 100.0);
}

#[test]
fn proximity_clears_on_leave_and_without_links() {
    let mut proximity = LinkProximity::default();
    assert_eq!(proximity.on_pointer_move(10.0, 10.0).hovered_index, None);

    proximity.set_links(stacked_links());
    proximity.on_pointer_move(10.0, 10.0);
    proximity.on_pointer_leave();
    let cleared = proximity.highlight();
    assert_eq!(cleared.hovered_index, None);
    assert!(!cleared.arrow_visible);
    assert_eq!(cleared.effect_scale, 2.5);
}

#[test]
fn proximity_skips_links_with_invalid_geometry() {
    let mut proximity = LinkProximity::default();
    let mut links = stacked_links();
    links.push(LinkTarget::new(
        LinkRect::new(0.0, f64::NAN, 10.0, 10.0),
        (0.0, 0.0),
    ));
    proximity.set_links(links);
    assert_eq!(proximity.link_count(), 3);
}
