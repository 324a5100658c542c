//! Configuration validation

use crate::{ConfigError, OverlayConfig, Result};

/// Validate a configuration before it is handed to the render pipeline.
pub fn validate(config: &OverlayConfig) -> Result<()> {
    if !(0.001..=0.5).contains(&config.zoom_speed) {
        return Err(ConfigError::Validation(
            "zoom_speed must be between 0.001 and 0.5".to_string(),
        ));
    }

    if !(0.1..=3.0).contains(&config.icon_scale) {
        return Err(ConfigError::Validation(
            "icon_scale must be between 0.1 and 3.0".to_string(),
        ));
    }

    if !(0.05..=1.0).contains(&config.fade_percent) {
        return Err(ConfigError::Validation(
            "fade_percent must be between 0.05 and 1.0".to_string(),
        ));
    }

    validate_custom_rules(config);

    Ok(())
}

/// Soft rules: combinations that work but are probably not what the user
/// wanted get a warning rather than a rejection.
fn validate_custom_rules(config: &OverlayConfig) {
    if config.zoom_locked && config.use_linear_zoom {
        log::warn!("zoom is locked; use_linear_zoom has no effect until it is unlocked");
    }

    if config.follow_player && config.keep_open {
        log::debug!("follow_player with keep_open: viewport recenters even while hidden");
    }
}
