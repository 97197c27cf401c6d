use super::defaults::{MAX_PERSIST_DEBOUNCE_MS, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const TABLE_KEYS: [&str; 3] = ["appearance", "storage", "logging"];

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse either the sectioned (`[appearance]`, `[storage]`, `[logging]`) or
/// the flat layout.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let table: toml::Table = toml::from_str(contents).context("config is not valid TOML")?;
    let sectioned = TABLE_KEYS
        .iter()
        .any(|key| matches!(table.get(*key), Some(toml::Value::Table(_))));

    let mut config = if sectioned {
        let tables: ConfigTables =
            toml::from_str(contents).context("config tables have unexpected values")?;
        AppConfig::from(tables)
    } else {
        toml::from_str::<AppConfig>(contents).context("config has unexpected values")?
    };
    clamp_config(&mut config);
    Ok(config)
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("failed to serialize config")
}

fn clamp_config(config: &mut AppConfig) {
    if !config.window_width.is_finite() || config.window_width < MIN_WINDOW_WIDTH {
        config.window_width = MIN_WINDOW_WIDTH;
    }
    if !config.window_height.is_finite() || config.window_height < MIN_WINDOW_HEIGHT {
        config.window_height = MIN_WINDOW_HEIGHT;
    }
    config.persist_debounce_ms = config.persist_debounce_ms.min(MAX_PERSIST_DEBOUNCE_MS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn parses_sectioned_layout() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"

            [storage]
            settings_path = "/tmp/host/settings.json"
            persist_debounce_ms = 250

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("sectioned config");

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.settings_path, "/tmp/host/settings.json");
        assert_eq!(config.persist_debounce_ms, 250);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.style_dir, ".cache/styles");
    }

    #[test]
    fn parses_flat_layout() {
        let config = parse_config("style_dir = \"out\"\nlog_level = \"debug\"\n").expect("flat");
        assert_eq!(config.style_dir, "out");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.theme, ThemeMode::Night);
    }

    #[test]
    fn clamps_out_of_range_values() {
        let config = parse_config(
            "[appearance]\nwindow_width = 10.0\n[storage]\npersist_debounce_ms = 999999\n",
        )
        .expect("config");
        assert_eq!(config.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(config.persist_debounce_ms, MAX_PERSIST_DEBOUNCE_MS);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(parse_config("[logging]\nlog_level = 3\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/typefacer/config.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Day;
        config.style_dir = "styles".to_string();
        let text = serialize_config(&config).expect("serialize");
        assert!(text.contains("[storage]"));
        assert_eq!(parse_config(&text).expect("parse"), config);
    }
}
