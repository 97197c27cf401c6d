//! Host settings file.
//!
//! The host keeps one JSON object for all of its extensions, keyed by
//! extension name. We only ever read and rewrite our own entry.

use super::EXTENSION_NAME;
use super::model::FontConfig;
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Our entry in the host settings file, if any.
pub fn load_persisted(path: &Path) -> Option<Value> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            info!(path = %path.display(), "No saved font settings: {err}");
            return None;
        }
    };
    let root: Value = match serde_json::from_str(&data) {
        Ok(root) => root,
        Err(err) => {
            warn!(path = %path.display(), "Host settings file is not valid JSON: {err}");
            return None;
        }
    };
    let entry = root.get(EXTENSION_NAME).cloned();
    debug!(found = entry.is_some(), "Read persisted font settings");
    entry
}

/// Rewrite our entry, keeping every other extension's settings intact.
pub fn save_settings(path: &Path, config: &FontConfig) -> Result<()> {
    let mut root = match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<Value>(&data)
            .with_context(|| format!("host settings file {} is not valid JSON", path.display()))?
        {
            Value::Object(map) => map,
            _ => bail!(
                "host settings file {} is not a JSON object; refusing to overwrite it",
                path.display()
            ),
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Creating host settings file");
            Map::new()
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let entry = serde_json::to_value(config).context("failed to serialize font settings")?;
    root.insert(EXTENSION_NAME.to_string(), entry);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let contents = serde_json::to_string_pretty(&Value::Object(root))
        .context("failed to serialize host settings")?;
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), "Saved font settings");
    Ok(())
}
