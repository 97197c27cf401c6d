use crate::settings::{FontConfig, Scope};

/// One value per scope, for control state that mirrors `FontConfig`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerScope<T> {
    pub(in crate::app) global: T,
    pub(in crate::app) user: T,
    pub(in crate::app) character: T,
}

impl<T> PerScope<T> {
    pub(in crate::app) fn get(&self, scope: Scope) -> &T {
        match scope {
            Scope::Global => &self.global,
            Scope::User => &self.user,
            Scope::Character => &self.character,
        }
    }

    pub(in crate::app) fn get_mut(&mut self, scope: Scope) -> &mut T {
        match scope {
            Scope::Global => &mut self.global,
            Scope::User => &mut self.user,
            Scope::Character => &mut self.character,
        }
    }
}

/// Widget-side state: what the controls currently show, which may run ahead
/// of the config while a debounce is pending.
pub struct PanelState {
    pub(in crate::app) active_tab: Scope,
    pub(in crate::app) family_inputs: PerScope<String>,
    pub(in crate::app) weight_inputs: PerScope<f32>,
    pub(in crate::app) google_drawer_open: bool,
    pub(in crate::app) google_input: String,
    pub(in crate::app) google_input_rejected: bool,
    pub(in crate::app) export_copied: bool,
    pub(in crate::app) import_done: bool,
    pub(in crate::app) reset_confirm: bool,
    pub(in crate::app) notice: Option<String>,
}

impl PanelState {
    pub(in crate::app) fn new(settings: &FontConfig) -> Self {
        let mut panel = PanelState {
            active_tab: Scope::Global,
            family_inputs: PerScope::default(),
            weight_inputs: PerScope::default(),
            google_drawer_open: false,
            google_input: String::new(),
            google_input_rejected: false,
            export_copied: false,
            import_done: false,
            reset_confirm: false,
            notice: None,
        };
        panel.reload_from(settings);
        panel
    }

    /// Point every scoped control back at the config.
    pub(in crate::app) fn reload_from(&mut self, settings: &FontConfig) {
        for scope in Scope::ALL {
            let spec = settings.spec(scope);
            *self.family_inputs.get_mut(scope) = spec.font_family.clone();
            *self.weight_inputs.get_mut(scope) = spec.font_weight;
        }
    }
}
