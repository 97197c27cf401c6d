//! The two style elements the chat display loads.
//!
//! Each element is a CSS file under the style directory named after its id.
//! Both are created once; every recompute replaces the whole text.

use super::css::{build_font_import_declarations, build_stylesheet};
use crate::settings::FontConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const FONT_IMPORTS_ELEMENT_ID: &str = "tfr-google-fonts-stylesheet";
pub const FONT_RULES_ELEMENT_ID: &str = "tfr-font-stylesheet";

#[derive(Debug)]
pub struct StyleElement {
    id: &'static str,
    path: PathBuf,
    text: String,
}

impl StyleElement {
    fn create(dir: &Path, id: &'static str) -> Result<Self> {
        let path = dir.join(format!("{id}.css"));
        fs::write(&path, "").with_context(|| format!("failed to create {}", path.display()))?;
        Ok(StyleElement {
            id,
            path,
            text: String::new(),
        })
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the element's whole text content.
    pub fn replace_text(&mut self, text: String) -> Result<()> {
        self.text = text;
        fs::write(&self.path, &self.text)
            .with_context(|| format!("failed to write style element {}", self.id))?;
        debug!(id = self.id, bytes = self.text.len(), "Replaced style element text");
        Ok(())
    }
}

/// Import declarations plus scoped font rules.
#[derive(Debug)]
pub struct StyleSheets {
    pub imports: StyleElement,
    pub rules: StyleElement,
}

impl StyleSheets {
    /// Create both elements under `dir`, creating the directory if needed.
    pub fn install(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create style directory {}", dir.display()))?;
        Ok(StyleSheets {
            imports: StyleElement::create(dir, FONT_IMPORTS_ELEMENT_ID)?,
            rules: StyleElement::create(dir, FONT_RULES_ELEMENT_ID)?,
        })
    }

    pub fn apply_imports(&mut self, config: &FontConfig) {
        let text = build_font_import_declarations(&config.google_fonts);
        if let Err(err) = self.imports.replace_text(text) {
            warn!(id = self.imports.id(), "Skipping font import update: {err:#}");
        }
    }

    pub fn apply_rules(&mut self, config: &FontConfig) {
        let text = build_stylesheet(config);
        if let Err(err) = self.rules.replace_text(text) {
            warn!(id = self.rules.id(), "Skipping font rule update: {err:#}");
        }
    }

    pub fn apply_all(&mut self, config: &FontConfig) {
        self.apply_imports(config);
        self.apply_rules(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FontKind;

    #[test]
    fn install_creates_empty_elements() {
        let dir = tempfile::tempdir().expect("tempdir");
        let styles = dir.path().join("styles");
        let sheets = StyleSheets::install(&styles).expect("install");

        assert_eq!(sheets.imports.id(), FONT_IMPORTS_ELEMENT_ID);
        assert_eq!(
            sheets.rules.path(),
            styles.join("tfr-font-stylesheet.css").as_path()
        );
        assert_eq!(fs::read_to_string(sheets.imports.path()).expect("read"), "");
        assert_eq!(fs::read_to_string(sheets.rules.path()).expect("read"), "");
    }

    #[test]
    fn apply_replaces_whole_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sheets = StyleSheets::install(dir.path()).expect("install");
        let mut config = FontConfig::default();
        config.global.font_family = "Lora".to_string();
        config.add_font(FontKind::Google, "Lora");
        config.add_font(FontKind::Google, "Inter");
        sheets.apply_all(&config);

        let imports = fs::read_to_string(sheets.imports.path()).expect("read");
        assert_eq!(imports.lines().count(), 2);
        assert_eq!(imports, sheets.imports.text());
        assert!(sheets.rules.text().contains("Lora"));

        config.remove_font(FontKind::Google, "Lora");
        config.enabled = false;
        sheets.apply_all(&config);
        assert_eq!(sheets.imports.text().lines().count(), 1);
        assert_eq!(fs::read_to_string(sheets.rules.path()).expect("read"), "");
    }

    #[test]
    fn unwritable_directory_fails_install() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "file, not a directory").expect("seed");
        assert!(StyleSheets::install(&blocker.join("styles")).is_err());
    }
}
