//! Typed "persisted over defaults" merging.
//!
//! Persisted data may be partial, come from an older schema, or carry
//! values of the wrong type. Every field present with a usable value wins;
//! everything else keeps the base value, so the merge itself never fails.

use super::model::{FontConfig, FontSpec, ScopedFontSpec};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Build the live config from whatever the host persisted for us.
pub fn initialize(persisted: Option<&Value>) -> FontConfig {
    match persisted {
        Some(value) => merge_persisted(&FontConfig::default(), value),
        None => {
            debug!("No persisted font settings; using defaults");
            FontConfig::default()
        }
    }
}

/// Deep-merge `persisted` over `base`.
pub fn merge_persisted(base: &FontConfig, persisted: &Value) -> FontConfig {
    let Some(object) = persisted.as_object() else {
        warn!("Persisted font settings are not an object; using defaults");
        return base.clone();
    };

    let mut merged = FontConfig {
        enabled: merge_bool(base.enabled, object, "enabled"),
        global: merge_spec(&base.global, object.get("global")),
        user: merge_scoped(&base.user, object.get("user")),
        character: merge_scoped(&base.character, object.get("character")),
        google_fonts: merge_list(&base.google_fonts, object, "googleFonts"),
        local_fonts: merge_list(&base.local_fonts, object, "localFonts"),
    };
    merged.normalize_font_lists();
    merged
}

fn merge_bool(base: bool, object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        Some(Value::Bool(value)) => *value,
        Some(other) => {
            warn!(key, value = %other, "Ignoring non-boolean setting");
            base
        }
        None => base,
    }
}

fn merge_spec(base: &FontSpec, value: Option<&Value>) -> FontSpec {
    let Some(object) = value.and_then(Value::as_object) else {
        return base.clone();
    };
    let font_family = match object.get("fontFamily") {
        Some(Value::String(family)) => family.clone(),
        _ => base.font_family.clone(),
    };
    let font_weight = object
        .get("fontWeight")
        .and_then(Value::as_f64)
        .map(|weight| weight as f32)
        .unwrap_or(base.font_weight);
    FontSpec {
        font_family,
        font_weight,
    }
}

fn merge_scoped(base: &ScopedFontSpec, value: Option<&Value>) -> ScopedFontSpec {
    let override_enabled = match value.and_then(Value::as_object) {
        Some(object) => merge_bool(base.override_enabled, object, "overrideEnabled"),
        None => base.override_enabled,
    };
    ScopedFontSpec {
        override_enabled,
        font: merge_spec(&base.font, value),
    }
}

fn merge_list(base: &[String], object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => base.to_vec(),
    }
}
