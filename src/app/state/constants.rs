use crate::settings::Scope;
use iced::widget::text_input::Id as InputId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Limits and timings for panel controls.
pub(crate) const MIN_FONT_WEIGHT: f32 = 100.0;
pub(crate) const MAX_FONT_WEIGHT: f32 = 900.0;
pub(crate) const FONT_WEIGHT_STEP: f32 = 100.0;
pub(crate) const FONT_FAMILY_DEBOUNCE: Duration = Duration::from_millis(300);
pub(crate) const FONT_WEIGHT_DEBOUNCE: Duration = Duration::from_millis(50);
pub(crate) const BUTTON_FEEDBACK: Duration = Duration::from_millis(1500);
pub(crate) const REJECTED_FONT_FLASH: Duration = Duration::from_millis(1000);

pub(crate) const IMPORT_FAILED_NOTICE: &str = "Failed to import settings. Make sure you have valid TypefaceR settings copied to your clipboard.";
pub(crate) const PREVIEW_USER_TEXT: &str = "Hello! This is how my messages look.";
pub(crate) const PREVIEW_CHARACTER_TEXT: &str =
    "*smiles warmly* And this is how the character replies.";

pub(crate) static GOOGLE_FONT_INPUT_ID: Lazy<InputId> =
    Lazy::new(|| InputId::new("tfr-google-font-input"));

/// `tfr-global-font-family`, `tfr-user-font-family` or `tfr-char-font-family`.
pub(crate) fn font_family_input_id(scope: Scope) -> InputId {
    InputId::new(format!("tfr-{}-font-family", scope.tag()))
}
