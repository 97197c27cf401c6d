mod chips;
mod constants;
mod fonts;
mod panel;

use crate::config::AppConfig;
use crate::debounce::Debouncer;
use crate::settings::FontConfig;
use crate::style::StyleSheets;
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use super::messages::Message;

pub(in crate::app) use chips::{FontChip, empty_chips_hint, font_chips};
pub(crate) use constants::*;
pub(in crate::app) use fonts::display_font;
pub(in crate::app) use panel::PanelState;

/// Core application state: the font config plus everything needed to keep
/// the style elements and controls in step with it.
pub struct App {
    pub(super) settings: FontConfig,
    pub(super) config: AppConfig,
    pub(super) settings_path: PathBuf,
    pub(super) panel: PanelState,
    pub(super) debouncer: Debouncer,
    pub(super) sheets: Option<StyleSheets>,
}

impl App {
    pub(super) fn bootstrap(settings: FontConfig, config: AppConfig) -> (App, Task<Message>) {
        let sheets = match StyleSheets::install(Path::new(&config.style_dir)) {
            Ok(sheets) => Some(sheets),
            Err(err) => {
                warn!("Style elements unavailable; styles will not be written: {err:#}");
                None
            }
        };
        let mut app = App::new(settings, config, sheets);
        match app.sheets.as_mut() {
            Some(sheets) => sheets.apply_all(&app.settings),
            None => warn!("Skipping initial style application"),
        }
        info!(
            google_fonts = app.settings.google_fonts.len(),
            local_fonts = app.settings.local_fonts.len(),
            enabled = app.settings.enabled,
            "Font settings panel ready"
        );
        (app, Task::none())
    }

    pub(super) fn new(
        settings: FontConfig,
        config: AppConfig,
        sheets: Option<StyleSheets>,
    ) -> App {
        App {
            panel: PanelState::new(&settings),
            settings_path: PathBuf::from(&config.settings_path),
            settings,
            config,
            debouncer: Debouncer::new(),
            sheets,
        }
    }

    pub(super) fn persist_delay(&self) -> Duration {
        Duration::from_millis(self.config.persist_debounce_ms)
    }

    pub(super) fn apply_font_imports(&mut self) {
        match self.sheets.as_mut() {
            Some(sheets) => sheets.apply_imports(&self.settings),
            None => warn!("Font import element missing; skipping update"),
        }
    }

    pub(super) fn apply_font_rules(&mut self) {
        match self.sheets.as_mut() {
            Some(sheets) => sheets.apply_rules(&self.settings),
            None => warn!("Font rule element missing; skipping update"),
        }
    }

    pub(super) fn persist_now(&self) {
        if let Err(err) = crate::settings::save_settings(&self.settings_path, &self.settings) {
            warn!("Failed to save font settings: {err:#}");
        }
    }
}
