use orrery_engine::{App, AppConfig};

/// Merge JSON overrides into `config`. Bad JSON is logged and ignored.
pub fn merge_overrides(config: AppConfig, overrides_json: &str) -> AppConfig {
    if overrides_json.trim().is_empty() {
        return config;
    }
    match config.clone().with_json_overrides(overrides_json) {
        Ok(merged) => merged,
        Err(err) => {
            log::warn!("config: ignoring overrides ({})", err);
            config
        }
    }
}

/// Resolve the config the host starts an app with: the app's own config,
/// JSON overrides on top, the browser viewport size, and a random seed when
/// none was pinned.
pub fn resolve_config<A: App>(app: &A, overrides_json: &str, viewport: (f32, f32)) -> AppConfig {
    let mut config = merge_overrides(app.config(), overrides_json);
    config.viewport_width = viewport.0;
    config.viewport_height = viewport.1;
    if config.seed == 0 {
        let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
        config.seed = (hi << 32) | lo | 1;
    }
    log::debug!("config: {:?}", config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_keep_config() {
        let base = AppConfig { seed: 5, ..AppConfig::default() };
        assert_eq!(merge_overrides(base.clone(), "  "), base);
    }

    #[test]
    fn valid_overrides_apply() {
        let merged = merge_overrides(AppConfig::default(), r#"{ "fov_y_degrees": 60 }"#);
        assert_eq!(merged.fov_y_degrees, 60.0);
    }

    #[test]
    fn malformed_overrides_fall_back() {
        let base = AppConfig { seed: 9, ..AppConfig::default() };
        assert_eq!(merge_overrides(base.clone(), "{ not json"), base);
    }
}
