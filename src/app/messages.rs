use crate::debounce::Ticket;
use crate::settings::{FontKind, Scope};
use iced::window;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    EnabledToggled(bool),
    TabSelected(Scope),
    FontFamilyInput(Scope, String),
    FontFamilySubmitted(Scope),
    ClearFontFamily(Scope),
    FontWeightChanged(Scope, f32),
    OverrideToggled(Scope, bool),
    ChipSelected(Scope, String),
    RemoveFont(FontKind, String),
    ToggleGoogleFontsDrawer,
    GoogleFontInputChanged(String),
    ImportGoogleFont,
    ExportSettings,
    ImportSettings,
    ClipboardRead(Option<String>),
    RequestReset,
    ConfirmReset,
    CancelReset,
    DismissNotice,
    DebounceElapsed(Ticket),
    CloseRequested(window::Id),
}
