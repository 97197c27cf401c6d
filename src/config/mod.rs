//! Configuration loading for the font settings panel.
//!
//! Application settings (window, output paths, logging) are loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the panel can still launch. The user's font choices
//! live separately in the host settings file; see `crate::settings`.

mod defaults;
mod io;
mod models;
mod tables;

pub(crate) use defaults::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
pub use io::{load_config, serialize_config};
pub(crate) use models::LogLevel;
pub use models::{AppConfig, ThemeMode};
