use super::super::state::{App, REJECTED_FONT_FLASH};
use super::Effect;
use crate::debounce::Channel;
use crate::settings::FontKind;
use tracing::debug;

impl App {
    pub(super) fn handle_toggle_google_fonts_drawer(&mut self) {
        self.panel.google_drawer_open = !self.panel.google_drawer_open;
    }

    pub(super) fn handle_google_font_input(&mut self, value: String) {
        self.panel.google_input = value;
    }

    pub(super) fn handle_import_google_font(&mut self, effects: &mut Vec<Effect>) {
        let name = self.panel.google_input.trim().to_string();
        if name.is_empty() {
            return;
        }
        if self.settings.add_font(FontKind::Google, &name) {
            self.panel.google_input.clear();
            self.panel.google_input_rejected = false;
            self.debouncer.cancel(Channel::RejectedFontFlash);
            effects.push(Effect::ApplyFontImports);
            self.request_save(effects);
        } else {
            debug!(font = %name, "Google font already imported");
            self.panel.google_input_rejected = true;
            self.schedule(Channel::RejectedFontFlash, REJECTED_FONT_FLASH, effects);
        }
    }

    pub(super) fn handle_remove_font(
        &mut self,
        kind: FontKind,
        name: String,
        effects: &mut Vec<Effect>,
    ) {
        let before = self.settings.fonts(kind).len();
        self.settings.remove_font(kind, &name);
        if self.settings.fonts(kind).len() == before {
            return;
        }
        if kind == FontKind::Google {
            effects.push(Effect::ApplyFontImports);
        }
        self.request_save(effects);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::settings::FontConfig;
    use crate::style::StyleSheets;

    fn test_app() -> App {
        App::new(FontConfig::default(), AppConfig::default(), None)
    }

    #[test]
    fn importing_clears_input_and_regenerates_imports() {
        let mut app = test_app();
        app.reduce(Message::GoogleFontInputChanged("  Open Sans ".to_string()));
        let effects = app.reduce(Message::ImportGoogleFont);

        assert_eq!(app.settings.google_fonts, vec!["Open Sans"]);
        assert!(app.panel.google_input.is_empty());
        assert!(effects.iter().any(|e| matches!(e, Effect::ApplyFontImports)));
    }

    #[test]
    fn duplicate_import_flashes_and_keeps_input() {
        let mut app = test_app();
        app.settings.add_font(FontKind::Google, "Lora");
        app.reduce(Message::GoogleFontInputChanged("LORA".to_string()));
        let effects = app.reduce(Message::ImportGoogleFont);

        assert_eq!(app.settings.google_fonts.len(), 1);
        assert_eq!(app.panel.google_input, "LORA");
        assert!(app.panel.google_input_rejected);
        let ticket = effects
            .into_iter()
            .find_map(|e| match e {
                Effect::Schedule(ticket) => Some(ticket),
                _ => None,
            })
            .expect("flash timer");
        assert_eq!(ticket.channel, Channel::RejectedFontFlash);

        app.reduce(Message::DebounceElapsed(ticket));
        assert!(!app.panel.google_input_rejected);
    }

    #[test]
    fn blank_import_is_ignored() {
        let mut app = test_app();
        app.reduce(Message::GoogleFontInputChanged("   ".to_string()));
        assert!(app.reduce(Message::ImportGoogleFont).is_empty());
        assert!(!app.panel.google_input_rejected);
    }

    #[test]
    fn removing_unknown_font_does_nothing() {
        let mut app = test_app();
        assert!(
            app.reduce(Message::RemoveFont(FontKind::Local, "Ghost".to_string()))
                .is_empty()
        );
    }

    #[test]
    fn removed_google_font_leaves_import_element() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sheets = StyleSheets::install(dir.path()).expect("install");
        let mut app = App::new(FontConfig::default(), AppConfig::default(), Some(sheets));
        app.reduce(Message::GoogleFontInputChanged("Roboto".to_string()));
        app.update(Message::ImportGoogleFont);
        let imports = app.sheets.as_ref().expect("sheets").imports.text().to_string();
        assert!(imports.contains("family=Roboto:"));

        app.update(Message::RemoveFont(FontKind::Google, "roboto".to_string()));
        assert!(app.settings.google_fonts.is_empty());
        assert_eq!(app.sheets.as_ref().expect("sheets").imports.text(), "");
    }
}
