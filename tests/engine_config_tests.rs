use timeline_rs::TimelineError;
use timeline_rs::api::{InvalidationLevel, InvalidationTopic, TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{Level, Viewport};
use timeline_rs::interaction::{ZoomConfig, ZoomOutcome};
use timeline_rs::render::{Color, NullRenderer};

#[test]
fn defaults_match_widget_constants() {
    let config = TimelineEngineConfig::new(Viewport::new(400, 100));
    assert_eq!(config.base_cell_width_px, 50.0);
    assert_eq!(config.padding_cell_count, 4);
    assert_eq!(config.zoom_min, 0.8);
    assert_eq!(config.zoom_max, 2.0);
    assert_eq!(config.pinch_sensitivity_divisor, 50.0);
    assert_eq!(config.default_level, Level::Minutes60);
    assert_eq!(config.highlight_color, Color::RED);
}

#[test]
fn config_json_round_trips() {
    let config = TimelineEngineConfig::new(Viewport::new(640, 120))
        .with_default_level(Level::Minutes10)
        .with_zoom_bounds(0.5, 3.0)
        .with_initial_time_offset(480.0);
    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"default_level\": 10"));

    let parsed = TimelineEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn missing_json_fields_fall_back_to_defaults() {
    let parsed = TimelineEngineConfig::from_json_str(r#"{"viewport":{"width":400,"height":100}}"#)
        .expect("parse minimal config");
    assert_eq!(parsed, TimelineEngineConfig::new(Viewport::new(400, 100)));
}

#[test]
fn unknown_level_in_json_is_rejected() {
    let err = TimelineEngineConfig::from_json_str(
        r#"{"viewport":{"width":400,"height":100},"default_level":45}"#,
    )
    .expect_err("45 is not a level");
    assert!(matches!(err, TimelineError::InvalidConfig(_)));
}

#[test]
fn engine_rejects_invalid_config() {
    let zero = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(0, 100)),
    );
    assert!(matches!(zero, Err(TimelineError::InvalidViewport { .. })));

    let odd_padding = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(400, 100)).with_padding_cell_count(3),
    );
    assert!(matches!(odd_padding, Err(TimelineError::InvalidConfig(_))));

    let inverted_zoom = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(400, 100)).with_zoom_bounds(1.2, 0.9),
    );
    assert!(inverted_zoom.is_err());

    let nan_offset = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(400, 100)).with_initial_time_offset(f64::NAN),
    );
    assert!(nan_offset.is_err());
}

#[test]
fn custom_default_level_drives_startup_and_triple_tap() {
    let config = TimelineEngineConfig::new(Viewport::new(400, 100))
        .with_default_level(Level::Minutes30)
        .with_initial_time_offset(600.0);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    assert_eq!(engine.level(), Level::Minutes30);
    assert_eq!(engine.cell_count(), 52);

    engine.double_tap();
    assert_eq!(engine.level(), Level::Minutes5);
    engine.triple_tap();
    assert_eq!(engine.level(), Level::Minutes30);
}

#[test]
fn zoom_config_can_be_replaced_at_runtime() {
    let mut engine = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(400, 100)),
    )
    .expect("engine init");

    let tighter = ZoomConfig {
        zoom_max: 1.1,
        ..ZoomConfig::default()
    };
    engine.set_zoom_config(tighter).expect("set zoom config");
    assert_eq!(engine.zoom_config(), tighter);

    engine.pinch_began(2, 10.0);
    engine.pinch_changed(2, 100.0);
    assert_eq!(engine.level(), Level::Minutes120);

    assert!(
        engine
            .set_zoom_config(ZoomConfig {
                sensitivity_divisor: -1.0,
                ..ZoomConfig::default()
            })
            .is_err()
    );
}

#[test]
fn narrowing_zoom_bounds_clamps_current_zoom_factor() {
    let mut engine = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(400, 100)).with_initial_time_offset(600.0),
    )
    .expect("engine init");

    engine.pinch_began(2, 10.0);
    engine.pinch_changed(2, 310.0);
    engine.pinch_ended();
    assert!((engine.zoom_factor() - 1.6).abs() <= 1e-12);
    let _ = engine.take_pending_invalidation();

    engine
        .set_zoom_config(ZoomConfig {
            zoom_min: 0.5,
            zoom_max: 1.2,
            ..ZoomConfig::default()
        })
        .expect("set zoom config");
    assert_eq!(engine.zoom_factor(), 1.2);
    assert_eq!(engine.level(), Level::Minutes60);
    assert!((engine.center_time() - 600.0).abs() <= 1e-9);
    let pending = engine.pending_invalidation();
    assert_eq!(pending.level(), InvalidationLevel::Layout);
    assert!(pending.has_topic(InvalidationTopic::Zoom));

    engine.pinch_began(2, 100.0);
    let outcome = engine.pinch_changed(2, 99.0);
    assert!(matches!(outcome, ZoomOutcome::ZoomChanged { .. }));
    assert_eq!(engine.level(), Level::Minutes60);
    assert!(engine.zoom_factor() < 1.2);
}

#[test]
fn widening_zoom_bounds_keeps_zoom_factor() {
    let mut engine = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(400, 100)),
    )
    .expect("engine init");
    let _ = engine.take_pending_invalidation();

    engine
        .set_zoom_config(ZoomConfig {
            zoom_min: 0.5,
            zoom_max: 3.0,
            ..ZoomConfig::default()
        })
        .expect("set zoom config");
    assert_eq!(engine.zoom_factor(), 1.0);
    assert!(engine.pending_invalidation().is_none());
}

#[test]
fn hex_colors_parse_with_optional_alpha() {
    let color = Color::from_hex("#ff000080").expect("parse rgba");
    assert_eq!(color.red, 1.0);
    assert!((color.alpha - 128.0 / 255.0).abs() <= 1e-12);
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
    assert!(Color::from_hex("#+f0000").is_err());
    assert!(Color::from_hex("#ff00+f").is_err());
}
