use approx::assert_abs_diff_eq;
use timeline_rs::api::{InvalidationLevel, InvalidationTopic, TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{Level, Viewport};
use timeline_rs::interaction::{ZoomMode, ZoomOutcome};
use timeline_rs::render::NullRenderer;

fn build_engine(initial_time_offset: f64) -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(Viewport::new(400, 100))
        .with_initial_time_offset(initial_time_offset);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    let _ = engine.take_pending_invalidation();
    engine
}

#[test]
fn new_engine_centers_initial_time_offset() {
    let engine = build_engine(600.0);
    assert_eq!(engine.level(), Level::Minutes60);
    assert_abs_diff_eq!(engine.zoom_factor(), 1.0);
    assert_abs_diff_eq!(engine.scroll_offset_px(), 425.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.center_time(), 600.0, epsilon = 1e-9);
}

#[test]
fn level_change_reanchors_on_preserved_time_offset() {
    let mut engine = build_engine(600.0);
    engine.pinch_began(2, 10.0);
    let outcome = engine.pinch_changed(2, 560.0);

    assert!(matches!(outcome, ZoomOutcome::LevelChanged { .. }));
    assert_eq!(engine.level(), Level::Minutes120);
    assert_eq!(engine.cell_count(), 16);
    assert_abs_diff_eq!(engine.scroll_offset_px(), 175.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.time_offset(), 600.0);
    assert_abs_diff_eq!(engine.center_time(), 600.0, epsilon = 1e-9);
}

#[test]
fn zoom_factor_change_keeps_center_time() {
    let mut engine = build_engine(600.0);
    engine.pinch_began(2, 10.0);
    engine.pinch_changed(2, 35.0);

    assert_abs_diff_eq!(engine.zoom_factor(), 1.05, epsilon = 1e-12);
    assert_abs_diff_eq!(engine.cell_size().width, 52.5, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.scroll_offset_px(), 456.25, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.center_time(), 600.0, epsilon = 1e-9);
}

#[test]
fn scroll_updates_do_not_move_anchor_until_drag_ends() {
    let mut engine = build_engine(600.0);
    assert!(engine.scroll_offset_changed(525.0).expect("scroll update"));

    assert_abs_diff_eq!(engine.time_offset(), 600.0);
    assert_abs_diff_eq!(engine.center_time(), 720.0, epsilon = 1e-9);

    let committed = engine.drag_ended();
    assert_abs_diff_eq!(committed, 720.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.time_offset(), 720.0, epsilon = 1e-9);
}

#[test]
fn deceleration_end_commits_time_offset() {
    let mut engine = build_engine(600.0);
    engine.scroll_offset_changed(375.0).expect("scroll update");
    engine.deceleration_ended();
    assert_abs_diff_eq!(engine.time_offset(), 540.0, epsilon = 1e-9);
}

#[test]
fn double_tap_after_drag_centers_committed_time() {
    let mut engine = build_engine(600.0);
    engine.scroll_offset_changed(525.0).expect("scroll update");
    engine.drag_ended();

    engine.double_tap();
    assert_eq!(engine.level(), Level::Minutes10);
    assert_abs_diff_eq!(engine.scroll_offset_px(), 3_525.0, epsilon = 1e-6);
    assert_abs_diff_eq!(engine.center_time(), 720.0, epsilon = 1e-9);
}

#[test]
fn uncommitted_scroll_is_discarded_by_zoom() {
    let mut engine = build_engine(600.0);
    engine.scroll_offset_changed(525.0).expect("scroll update");

    engine.triple_tap();
    assert_abs_diff_eq!(engine.center_time(), 600.0, epsilon = 1e-9);
}

#[test]
fn triple_tap_restores_default_level_and_zoom() {
    let mut engine = build_engine(600.0);
    engine.double_tap();
    engine.pinch_began(2, 10.0);
    engine.pinch_changed(2, 35.0);
    engine.pinch_ended();

    engine.triple_tap();
    assert_eq!(engine.level(), Level::Minutes60);
    assert_abs_diff_eq!(engine.zoom_factor(), 1.0);
    assert_abs_diff_eq!(engine.scroll_offset_px(), 425.0, epsilon = 1e-9);
}

#[test]
fn scrolling_is_suspended_while_pinching() {
    let mut engine = build_engine(600.0);
    engine.pinch_began(2, 10.0);
    assert_eq!(engine.zoom_mode(), ZoomMode::Pinching);
    assert!(!engine.scroll_enabled());

    let applied = engine.scroll_offset_changed(900.0).expect("scroll update");
    assert!(!applied);
    assert_abs_diff_eq!(engine.scroll_offset_px(), 425.0, epsilon = 1e-9);

    assert_eq!(engine.pinch_changed(1, 10.0), ZoomOutcome::Cancelled);
    assert!(engine.scroll_enabled());
}

#[test]
fn negative_scroll_clamps_to_zero_and_nan_is_rejected() {
    let mut engine = build_engine(600.0);
    engine.scroll_offset_changed(-80.0).expect("scroll update");
    assert_abs_diff_eq!(engine.scroll_offset_px(), 0.0);

    let err = engine
        .scroll_offset_changed(f64::NAN)
        .expect_err("nan scroll must fail");
    assert!(format!("{err}").contains("scroll offset"));
}

#[test]
fn set_time_offset_seeks_and_rejects_non_finite() {
    let mut engine = build_engine(0.0);
    engine.set_time_offset(900.0).expect("seek");
    assert_abs_diff_eq!(engine.center_time(), 900.0, epsilon = 1e-9);
    assert_eq!(engine.center_label(), "15:00");

    assert!(engine.set_time_offset(f64::INFINITY).is_err());
    assert_abs_diff_eq!(engine.time_offset(), 900.0);
}

#[test]
fn viewport_resize_keeps_anchor_under_new_center() {
    let mut engine = build_engine(600.0);
    engine.set_viewport(Viewport::new(800, 100)).expect("resize");
    assert_abs_diff_eq!(engine.scroll_offset_px(), 225.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.center_time(), 600.0, epsilon = 1e-9);
    assert!(engine.set_viewport(Viewport::new(0, 100)).is_err());
}

#[test]
fn invalidation_levels_follow_change_kind() {
    let mut engine = build_engine(600.0);
    assert!(engine.pending_invalidation().is_none());

    engine.scroll_offset_changed(430.0).expect("scroll update");
    assert_eq!(engine.pending_invalidation().level(), InvalidationLevel::Scroll);

    engine.pinch_began(2, 10.0);
    engine.pinch_changed(2, 35.0);
    assert_eq!(engine.pending_invalidation().level(), InvalidationLevel::Layout);

    engine.pinch_changed(2, 560.0);
    let mask = engine.take_pending_invalidation();
    assert_eq!(mask.level(), InvalidationLevel::Full);
    assert!(mask.has_topic(InvalidationTopic::Level));
    assert!(mask.has_topic(InvalidationTopic::Zoom));
    assert!(engine.pending_invalidation().is_none());
}

#[test]
fn ignored_gestures_do_not_invalidate() {
    let mut engine = build_engine(600.0);
    for _ in 0..3 {
        engine.pinch_began(2, 10.0);
        engine.pinch_changed(2, 560.0);
    }
    assert_eq!(engine.level(), Level::Minutes180);
    let _ = engine.take_pending_invalidation();

    assert_eq!(engine.pinch_changed(2, 560.0), ZoomOutcome::Ignored);
    assert!(engine.pending_invalidation().is_none());
}
