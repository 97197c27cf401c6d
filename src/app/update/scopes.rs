use super::super::state::{
    App, FONT_FAMILY_DEBOUNCE, FONT_WEIGHT_DEBOUNCE, MAX_FONT_WEIGHT, MIN_FONT_WEIGHT,
};
use super::Effect;
use crate::debounce::Channel;
use crate::settings::{FontKind, Scope};
use tracing::{debug, info};

impl App {
    pub(super) fn handle_enabled_toggled(&mut self, enabled: bool, effects: &mut Vec<Effect>) {
        info!(enabled, "Toggled font overrides");
        self.settings.enabled = enabled;
        self.request_save(effects);
        effects.push(Effect::ApplyFontRules);
    }

    pub(super) fn handle_tab_selected(&mut self, scope: Scope) {
        debug!(%scope, "Switched tab");
        self.panel.active_tab = scope;
    }

    pub(super) fn handle_font_family_input(
        &mut self,
        scope: Scope,
        value: String,
        effects: &mut Vec<Effect>,
    ) {
        *self.panel.family_inputs.get_mut(scope) = value;
        self.schedule(Channel::FontFamily(scope), FONT_FAMILY_DEBOUNCE, effects);
    }

    /// Enter in a family input: commit right away and remember the font.
    pub(super) fn handle_font_family_submitted(&mut self, scope: Scope, effects: &mut Vec<Effect>) {
        self.debouncer.cancel(Channel::FontFamily(scope));
        self.commit_font_family(scope, effects);
        let family = self.settings.spec(scope).font_family.clone();
        if !family.is_empty() && self.settings.add_font(FontKind::Local, &family) {
            self.request_save(effects);
        }
    }

    pub(super) fn handle_clear_font_family(&mut self, scope: Scope, effects: &mut Vec<Effect>) {
        self.debouncer.cancel(Channel::FontFamily(scope));
        self.panel.family_inputs.get_mut(scope).clear();
        self.settings.spec_mut(scope).font_family.clear();
        debug!(%scope, "Cleared font family");
        self.request_save(effects);
        effects.push(Effect::ApplyFontRules);
        effects.push(Effect::FocusFontFamily(scope));
    }

    pub(super) fn handle_font_weight_changed(
        &mut self,
        scope: Scope,
        weight: f32,
        effects: &mut Vec<Effect>,
    ) {
        *self.panel.weight_inputs.get_mut(scope) = weight.clamp(MIN_FONT_WEIGHT, MAX_FONT_WEIGHT);
        self.schedule(Channel::FontWeight(scope), FONT_WEIGHT_DEBOUNCE, effects);
    }

    pub(super) fn handle_override_toggled(
        &mut self,
        scope: Scope,
        enabled: bool,
        effects: &mut Vec<Effect>,
    ) {
        if scope == Scope::Global {
            return;
        }
        info!(%scope, enabled, "Toggled scope override");
        self.settings.set_override_enabled(scope, enabled);
        self.request_save(effects);
        effects.push(Effect::ApplyFontRules);
    }

    pub(super) fn handle_chip_selected(
        &mut self,
        scope: Scope,
        name: String,
        effects: &mut Vec<Effect>,
    ) {
        self.debouncer.cancel(Channel::FontFamily(scope));
        debug!(%scope, font = %name, "Selected font chip");
        self.settings.spec_mut(scope).font_family = name.clone();
        *self.panel.family_inputs.get_mut(scope) = name;
        self.request_save(effects);
        effects.push(Effect::ApplyFontRules);
    }

    pub(in crate::app) fn commit_font_family(&mut self, scope: Scope, effects: &mut Vec<Effect>) {
        let family = self.panel.family_inputs.get(scope).trim().to_string();
        debug!(%scope, family = %family, "Font family changed");
        self.settings.spec_mut(scope).font_family = family;
        self.request_save(effects);
        effects.push(Effect::ApplyFontRules);
    }

    pub(in crate::app) fn commit_font_weight(&mut self, scope: Scope, effects: &mut Vec<Effect>) {
        let weight = *self.panel.weight_inputs.get(scope);
        debug!(%scope, weight, "Font weight changed");
        self.settings.spec_mut(scope).font_weight = weight;
        self.request_save(effects);
        effects.push(Effect::ApplyFontRules);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::debounce::Ticket;
    use crate::settings::FontConfig;

    fn test_app() -> App {
        App::new(FontConfig::default(), AppConfig::default(), None)
    }

    fn scheduled(effects: &[Effect], channel: Channel) -> Option<Ticket> {
        effects.iter().rev().find_map(|effect| match effect {
            Effect::Schedule(ticket) if ticket.channel == channel => Some(ticket.clone()),
            _ => None,
        })
    }

    #[test]
    fn typing_waits_for_the_debounce() {
        let mut app = test_app();
        let first = app.reduce(Message::FontFamilyInput(Scope::Global, "Lo".to_string()));
        let second = app.reduce(Message::FontFamilyInput(Scope::Global, "  Lora ".to_string()));
        assert_eq!(app.settings.global.font_family, "");

        let stale = scheduled(&first, Channel::FontFamily(Scope::Global)).expect("ticket");
        assert!(app.reduce(Message::DebounceElapsed(stale)).is_empty());
        assert_eq!(app.settings.global.font_family, "");

        let live = scheduled(&second, Channel::FontFamily(Scope::Global)).expect("ticket");
        let effects = app.reduce(Message::DebounceElapsed(live));
        assert_eq!(app.settings.global.font_family, "Lora");
        assert!(effects.iter().any(|e| matches!(e, Effect::ApplyFontRules)));
        assert!(scheduled(&effects, Channel::Persist).is_some());
    }

    #[test]
    fn persist_fires_once_after_a_burst() {
        let mut app = test_app();
        let first = app.reduce(Message::EnabledToggled(false));
        let second = app.reduce(Message::OverrideToggled(Scope::User, true));

        let stale = scheduled(&first, Channel::Persist).expect("ticket");
        let live = scheduled(&second, Channel::Persist).expect("ticket");
        assert!(app.reduce(Message::DebounceElapsed(stale)).is_empty());
        let effects = app.reduce(Message::DebounceElapsed(live));
        assert!(matches!(effects.as_slice(), [Effect::PersistSettings]));
    }

    #[test]
    fn submit_commits_and_remembers_local_font() {
        let mut app = test_app();
        app.reduce(Message::FontFamilyInput(Scope::User, "Georgia ".to_string()));
        app.reduce(Message::FontFamilySubmitted(Scope::User));

        assert_eq!(app.settings.user.font.font_family, "Georgia");
        assert_eq!(app.settings.local_fonts, vec!["Georgia"]);
        assert!(!app.debouncer.is_pending(Channel::FontFamily(Scope::User)));
    }

    #[test]
    fn slider_commits_clamped_weight() {
        let mut app = test_app();
        let effects = app.reduce(Message::FontWeightChanged(Scope::Character, 1200.0));
        assert_eq!(app.panel.weight_inputs.character, 900.0);
        assert_eq!(app.settings.character.font.font_weight, 400.0);

        let ticket = scheduled(&effects, Channel::FontWeight(Scope::Character)).expect("ticket");
        app.reduce(Message::DebounceElapsed(ticket));
        assert_eq!(app.settings.character.font.font_weight, 900.0);
    }

    #[test]
    fn clear_empties_family_and_refocuses() {
        let mut app = test_app();
        app.reduce(Message::ChipSelected(Scope::Global, "Roboto".to_string()));
        assert_eq!(app.settings.global.font_family, "Roboto");
        assert_eq!(app.panel.family_inputs.global, "Roboto");

        let effects = app.reduce(Message::ClearFontFamily(Scope::Global));
        assert_eq!(app.settings.global.font_family, "");
        assert_eq!(app.panel.family_inputs.global, "");
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::FocusFontFamily(Scope::Global))));
    }

    #[test]
    fn global_has_no_override_switch() {
        let mut app = test_app();
        assert!(app.reduce(Message::OverrideToggled(Scope::Global, true)).is_empty());
        assert_eq!(app.settings, FontConfig::default());
    }
}
