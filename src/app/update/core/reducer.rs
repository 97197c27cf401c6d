use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::debounce::{Channel, Ticket};
use crate::settings::Scope;
use iced::window;
use std::time::Duration;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::EnabledToggled(enabled) => self.handle_enabled_toggled(enabled, &mut effects),
            Message::TabSelected(scope) => self.handle_tab_selected(scope),
            Message::FontFamilyInput(scope, value) => {
                self.handle_font_family_input(scope, value, &mut effects);
            }
            Message::FontFamilySubmitted(scope) => {
                self.handle_font_family_submitted(scope, &mut effects);
            }
            Message::ClearFontFamily(scope) => self.handle_clear_font_family(scope, &mut effects),
            Message::FontWeightChanged(scope, weight) => {
                self.handle_font_weight_changed(scope, weight, &mut effects);
            }
            Message::OverrideToggled(scope, enabled) => {
                self.handle_override_toggled(scope, enabled, &mut effects);
            }
            Message::ChipSelected(scope, name) => {
                self.handle_chip_selected(scope, name, &mut effects);
            }
            Message::RemoveFont(kind, name) => self.handle_remove_font(kind, name, &mut effects),
            Message::ToggleGoogleFontsDrawer => self.handle_toggle_google_fonts_drawer(),
            Message::GoogleFontInputChanged(value) => self.handle_google_font_input(value),
            Message::ImportGoogleFont => self.handle_import_google_font(&mut effects),
            Message::ExportSettings => self.handle_export_settings(&mut effects),
            Message::ImportSettings => effects.push(Effect::ReadClipboard),
            Message::ClipboardRead(contents) => self.handle_clipboard_read(contents, &mut effects),
            Message::RequestReset => self.panel.reset_confirm = true,
            Message::ConfirmReset => self.handle_confirm_reset(&mut effects),
            Message::CancelReset => self.panel.reset_confirm = false,
            Message::DismissNotice => self.panel.notice = None,
            Message::DebounceElapsed(ticket) => self.handle_debounce_elapsed(ticket, &mut effects),
            Message::CloseRequested(id) => self.handle_close_requested(id, &mut effects),
        }

        effects
    }

    /// Commit edits still waiting on their debounce, save once, then close.
    fn handle_close_requested(&mut self, id: window::Id, effects: &mut Vec<Effect>) {
        for scope in Scope::ALL {
            if self.debouncer.is_pending(Channel::FontFamily(scope)) {
                self.debouncer.cancel(Channel::FontFamily(scope));
                self.commit_font_family(scope, effects);
            }
            if self.debouncer.is_pending(Channel::FontWeight(scope)) {
                self.debouncer.cancel(Channel::FontWeight(scope));
                self.commit_font_weight(scope, effects);
            }
        }
        if self.debouncer.is_pending(Channel::Persist) {
            self.debouncer.cancel(Channel::Persist);
            info!("Flushing pending settings save before exit");
            effects.retain(|effect| !matches!(effect, Effect::Schedule(_)));
            effects.push(Effect::PersistSettings);
        }
        effects.push(Effect::Close(id));
    }

    fn handle_debounce_elapsed(&mut self, ticket: Ticket, effects: &mut Vec<Effect>) {
        if !self.debouncer.fire(&ticket) {
            debug!(channel = ?ticket.channel, "Dropped superseded debounce");
            return;
        }
        match ticket.channel {
            Channel::FontFamily(scope) => self.commit_font_family(scope, effects),
            Channel::FontWeight(scope) => self.commit_font_weight(scope, effects),
            Channel::Persist => effects.push(Effect::PersistSettings),
            Channel::ExportFeedback => self.panel.export_copied = false,
            Channel::ImportFeedback => self.panel.import_done = false,
            Channel::RejectedFontFlash => self.panel.google_input_rejected = false,
        }
    }

    pub(in crate::app) fn schedule(
        &mut self,
        channel: Channel,
        delay: Duration,
        effects: &mut Vec<Effect>,
    ) {
        effects.push(Effect::Schedule(self.debouncer.schedule(channel, delay)));
    }

    /// The host debounces saves; every mutation only (re)arms the timer.
    pub(in crate::app) fn request_save(&mut self, effects: &mut Vec<Effect>) {
        let delay = self.persist_delay();
        self.schedule(Channel::Persist, delay, effects);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::settings::FontConfig;

    fn test_app() -> App {
        App::new(FontConfig::default(), AppConfig::default(), None)
    }

    fn position(effects: &[Effect], wanted: fn(&Effect) -> bool) -> Option<usize> {
        effects.iter().position(wanted)
    }

    #[test]
    fn close_flushes_pending_save_before_closing() {
        let mut app = test_app();
        app.reduce(Message::EnabledToggled(false));
        assert!(app.debouncer.is_pending(Channel::Persist));

        let effects = app.reduce(Message::CloseRequested(window::Id::unique()));
        let persist = position(&effects, |e| matches!(e, Effect::PersistSettings)).expect("save");
        let close = position(&effects, |e| matches!(e, Effect::Close(_))).expect("close");
        assert!(persist < close);
        assert_eq!(close, effects.len() - 1);
        assert!(!app.debouncer.is_pending(Channel::Persist));
    }

    #[test]
    fn close_commits_edits_still_debouncing() {
        let mut app = test_app();
        app.reduce(Message::FontFamilyInput(Scope::Global, " Lora ".to_string()));
        app.reduce(Message::FontWeightChanged(Scope::User, 700.0));
        assert_eq!(app.settings.global.font_family, "");

        let effects = app.reduce(Message::CloseRequested(window::Id::unique()));
        assert_eq!(app.settings.global.font_family, "Lora");
        assert_eq!(app.settings.user.font.font_weight, 700.0);
        assert!(!app.debouncer.is_pending(Channel::FontFamily(Scope::Global)));
        assert!(!app.debouncer.is_pending(Channel::FontWeight(Scope::User)));
        assert!(!app.debouncer.is_pending(Channel::Persist));
        assert!(!effects.iter().any(|e| matches!(e, Effect::Schedule(_))));
        assert_eq!(
            effects
                .iter()
                .filter(|e| matches!(e, Effect::PersistSettings))
                .count(),
            1
        );
        assert!(matches!(effects.last(), Some(Effect::Close(_))));
    }

    #[test]
    fn close_without_pending_work_just_closes() {
        let mut app = test_app();
        let effects = app.reduce(Message::CloseRequested(window::Id::unique()));
        assert!(matches!(effects.as_slice(), [Effect::Close(_)]));
    }
}
