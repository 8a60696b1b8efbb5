use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ZoomConfig;

use super::TimelineEngineConfig;

pub(super) fn validate_engine_config(
    config: TimelineEngineConfig,
) -> TimelineResult<TimelineEngineConfig> {
    if !config.viewport.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    if !config.base_cell_width_px.is_finite() || config.base_cell_width_px <= 0.0 {
        return Err(TimelineError::InvalidConfig(
            "base cell width must be finite and > 0".to_owned(),
        ));
    }
    if config.padding_cell_count % 2 != 0 {
        return Err(TimelineError::InvalidConfig(
            "padding cell count must be even".to_owned(),
        ));
    }
    if !config.initial_time_offset.is_finite() {
        return Err(TimelineError::InvalidConfig(
            "initial time offset must be finite".to_owned(),
        ));
    }
    config.highlight_color.validate()?;
    validate_zoom_config(config.zoom_config())?;
    Ok(config)
}

pub(super) fn validate_zoom_config(config: ZoomConfig) -> TimelineResult<ZoomConfig> {
    if !config.zoom_min.is_finite() || !config.zoom_max.is_finite() {
        return Err(TimelineError::InvalidConfig(
            "zoom bounds must be finite".to_owned(),
        ));
    }
    if config.zoom_min <= 0.0 || config.zoom_min >= 1.0 || config.zoom_max <= 1.0 {
        return Err(TimelineError::InvalidConfig(
            "zoom bounds must satisfy 0 < zoom_min < 1 < zoom_max".to_owned(),
        ));
    }
    if !config.sensitivity_divisor.is_finite() || config.sensitivity_divisor <= 0.0 {
        return Err(TimelineError::InvalidConfig(
            "pinch sensitivity divisor must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_finite(value: f64, what: &str) -> TimelineResult<f64> {
    if !value.is_finite() {
        return Err(TimelineError::InvalidData(format!("{what} must be finite")));
    }
    Ok(value)
}

/// Plugin ids show up as structured log fields, so they stay single tokens.
pub(super) fn validate_plugin_id(plugin_id: &str) -> TimelineResult<&str> {
    if plugin_id.is_empty() {
        return Err(TimelineError::InvalidData(
            "plugin id must not be empty".to_owned(),
        ));
    }
    if plugin_id.chars().any(char::is_whitespace) {
        return Err(TimelineError::InvalidData(format!(
            "plugin id `{plugin_id}` must not contain whitespace"
        )));
    }
    Ok(plugin_id)
}

#[cfg(test)]
mod tests {
    use super::{validate_finite, validate_plugin_id, validate_zoom_config};
    use crate::interaction::ZoomConfig;

    #[test]
    fn zoom_config_rejects_inverted_bounds() {
        let err = validate_zoom_config(ZoomConfig {
            zoom_min: 1.5,
            zoom_max: 0.9,
            ..ZoomConfig::default()
        })
        .expect_err("inverted bounds must fail");
        assert!(format!("{err}").contains("zoom_min"));
    }

    #[test]
    fn zoom_config_rejects_zero_divisor() {
        let err = validate_zoom_config(ZoomConfig {
            sensitivity_divisor: 0.0,
            ..ZoomConfig::default()
        })
        .expect_err("zero divisor must fail");
        assert!(format!("{err}").contains("sensitivity"));
    }

    #[test]
    fn finite_check_names_the_input() {
        let err = validate_finite(f64::NAN, "scroll offset").expect_err("nan must fail");
        assert!(format!("{err}").contains("scroll offset"));
    }

    #[test]
    fn plugin_ids_must_be_single_tokens() {
        assert!(validate_plugin_id("").is_err());
        assert!(validate_plugin_id("gap recorder").is_err());
        assert_eq!(validate_plugin_id("gap-recorder").expect("valid id"), "gap-recorder");
    }
}
