pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;
pub(crate) const MAX_PERSIST_DEBOUNCE_MS: u64 = 10_000;

pub(crate) fn default_window_width() -> f32 {
    720.0
}

pub(crate) fn default_window_height() -> f32 {
    820.0
}

pub(crate) fn default_settings_path() -> String {
    "conf/settings.json".to_string()
}

pub(crate) fn default_style_dir() -> String {
    ".cache/styles".to_string()
}

pub(crate) fn default_persist_debounce_ms() -> u64 {
    1000
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
