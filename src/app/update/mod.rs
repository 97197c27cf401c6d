use crate::debounce::Ticket;
use crate::settings::Scope;
use iced::window;

mod actions;
mod core;
mod fonts;
mod scopes;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug)]
pub(super) enum Effect {
    PersistSettings,
    ApplyFontRules,
    ApplyFontImports,
    Schedule(Ticket),
    WriteClipboard(String),
    ReadClipboard,
    FocusFontFamily(Scope),
    Close(window::Id),
}
