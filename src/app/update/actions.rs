use super::super::state::{App, BUTTON_FEEDBACK, IMPORT_FAILED_NOTICE};
use super::Effect;
use crate::debounce::Channel;
use crate::settings::Scope;
use tracing::{error, info, warn};

impl App {
    pub(super) fn handle_export_settings(&mut self, effects: &mut Vec<Effect>) {
        match self.settings.export_snapshot() {
            Ok(snapshot) => {
                effects.push(Effect::WriteClipboard(snapshot));
                self.panel.export_copied = true;
                self.schedule(Channel::ExportFeedback, BUTTON_FEEDBACK, effects);
            }
            Err(err) => error!("Failed to export settings: {err:#}"),
        }
    }

    pub(super) fn handle_clipboard_read(
        &mut self,
        contents: Option<String>,
        effects: &mut Vec<Effect>,
    ) {
        let Some(text) = contents else {
            warn!("Clipboard holds no text to import");
            self.panel.notice = Some(IMPORT_FAILED_NOTICE.to_string());
            return;
        };
        if let Err(err) = self.settings.import_snapshot(&text) {
            error!("Failed to import settings: {err:#}");
            self.panel.notice = Some(IMPORT_FAILED_NOTICE.to_string());
            return;
        }

        self.reload_controls();
        self.request_save(effects);
        effects.push(Effect::ApplyFontImports);
        effects.push(Effect::ApplyFontRules);
        self.panel.import_done = true;
        self.schedule(Channel::ImportFeedback, BUTTON_FEEDBACK, effects);
        info!("Settings imported successfully");
    }

    pub(super) fn handle_confirm_reset(&mut self, effects: &mut Vec<Effect>) {
        self.panel.reset_confirm = false;
        self.settings.reset();
        self.reload_controls();
        self.request_save(effects);
        effects.push(Effect::ApplyFontImports);
        effects.push(Effect::ApplyFontRules);
    }

    /// Drop in-flight edits and point every control at the config.
    fn reload_controls(&mut self) {
        for scope in Scope::ALL {
            self.debouncer.cancel(Channel::FontFamily(scope));
            self.debouncer.cancel(Channel::FontWeight(scope));
        }
        self.panel.reload_from(&self.settings);
    }
}
