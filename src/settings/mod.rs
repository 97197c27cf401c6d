//! The settings store: the user's font choices and everything that mutates
//! them.
//!
//! `FontConfig` is owned by whoever drives the panel and passed by reference
//! to the style synchronizer; there is no global instance.

mod fonts;
mod merge;
mod model;
mod persist;
mod snapshot;

/// Key of our entry in the host settings file.
pub const EXTENSION_NAME: &str = "TypefaceR";

pub(crate) use fonts::same_font_name;
pub use merge::initialize;
pub use model::{FontConfig, FontKind, FontSpec, Scope};
pub use persist::{load_persisted, save_settings};
