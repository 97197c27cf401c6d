//! Clipboard-friendly snapshots of the whole font config.

use super::model::{FontConfig, FontSpec, ScopedFontSpec};
use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

impl FontConfig {
    /// Pretty-printed JSON of the full config.
    pub fn export_snapshot(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize font settings")
    }

    /// Shallow-merge a snapshot onto the current config.
    ///
    /// Each top-level key present in the snapshot replaces that whole field.
    /// Keys whose values do not fit the model are skipped; unknown keys are
    /// ignored. The config is untouched when the text is not a JSON object.
    pub fn import_snapshot(&mut self, text: &str) -> Result<()> {
        let value: Value =
            serde_json::from_str(text.trim()).context("snapshot is not valid JSON")?;
        let Value::Object(object) = value else {
            bail!("snapshot is not a JSON object");
        };

        let mut next = self.clone();
        for (key, value) in object {
            match key.as_str() {
                "enabled" => assign::<bool>(&mut next.enabled, &key, value),
                "global" => assign::<FontSpec>(&mut next.global, &key, value),
                "user" => assign::<ScopedFontSpec>(&mut next.user, &key, value),
                "character" => assign::<ScopedFontSpec>(&mut next.character, &key, value),
                "googleFonts" => assign::<Vec<String>>(&mut next.google_fonts, &key, value),
                "localFonts" => assign::<Vec<String>>(&mut next.local_fonts, &key, value),
                _ => debug!(key, "Ignoring unknown snapshot key"),
            }
        }
        next.normalize_font_lists();
        *self = next;
        info!("Imported font settings snapshot");
        Ok(())
    }

    /// Replace everything with a fresh copy of the defaults.
    pub fn reset(&mut self) {
        *self = FontConfig::default();
        info!("Font settings reset to defaults");
    }
}

fn assign<T: DeserializeOwned>(slot: &mut T, key: &str, value: Value) {
    match serde_json::from_value::<T>(value) {
        Ok(parsed) => *slot = parsed,
        Err(err) => warn!(key, "Skipping snapshot value that does not fit: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FontKind;

    fn customized() -> FontConfig {
        let mut config = FontConfig::default();
        config.global.font_family = "Lora".to_string();
        config.global.font_weight = 700.0;
        config.user.override_enabled = true;
        config.user.font.font_family = "Inter".to_string();
        config.add_font(FontKind::Google, "Lora");
        config.add_font(FontKind::Local, "Georgia");
        config
    }

    #[test]
    fn untouched_store_round_trips() {
        let original = FontConfig::default();
        let text = original.export_snapshot().expect("export");

        let mut restored = FontConfig::default();
        restored.import_snapshot(&text).expect("import");
        assert_eq!(restored, original);
    }

    #[test]
    fn customized_store_round_trips_into_defaults() {
        let original = customized();
        let text = original.export_snapshot().expect("export");
        assert!(text.contains("\"fontWeight\": 700"));
        assert!(text.contains("\"googleFonts\""));

        let mut restored = FontConfig::default();
        restored.import_snapshot(&text).expect("import");
        assert_eq!(restored, original);
    }

    #[test]
    fn malformed_text_leaves_store_unchanged() {
        let mut config = customized();
        let before = config.clone();
        assert!(config.import_snapshot("{ not json").is_err());
        assert!(config.import_snapshot("").is_err());
        assert!(config.import_snapshot("[1, 2, 3]").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn import_is_shallow() {
        let mut config = customized();
        config
            .import_snapshot(r#"{ "user": { "fontFamily": "Merriweather" }, "enabled": false }"#)
            .expect("import");

        assert!(!config.enabled);
        assert_eq!(config.user.font.font_family, "Merriweather");
        // The whole `user` object was replaced, so its other keys reset.
        assert!(!config.user.override_enabled);
        assert_eq!(config.user.font.font_weight, 400.0);
        // Keys absent from the snapshot keep their current values.
        assert_eq!(config.global.font_family, "Lora");
        assert_eq!(config.google_fonts, vec!["Lora"]);
    }

    #[test]
    fn ill_typed_keys_are_skipped() {
        let mut config = customized();
        config
            .import_snapshot(r#"{ "enabled": "nope", "googleFonts": ["Inter", "inter"], "theme": 1 }"#)
            .expect("import");
        assert!(config.enabled);
        assert_eq!(config.google_fonts, vec!["Inter"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut config = customized();
        config.reset();
        assert_eq!(config, FontConfig::default());
    }
}
