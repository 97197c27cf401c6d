//! Style synchronizer: turns the font config into CSS and pushes it into the
//! style elements.

mod css;
mod elements;

pub use css::build_preview;
pub use elements::StyleSheets;
