mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use crate::settings::FontConfig;
use iced::{Size, Theme, window};

/// Launch the settings panel for an already-initialized font config.
pub fn run_app(settings: FontConfig, config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(
            crate::config::MIN_WINDOW_WIDTH,
            crate::config::MIN_WINDOW_HEIGHT,
        )),
        // Close requests go through the app so a pending save can be flushed.
        exit_on_close_request: false,
        ..window::Settings::default()
    };

    iced::application("TypefaceR", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| match app.config.theme {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        })
        .run_with(move || App::bootstrap(settings, config))
}
