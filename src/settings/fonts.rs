//! Remembered font names: Google fonts that get an import declaration and
//! local fonts the user typed before.

use super::model::{FontConfig, FontKind};
use tracing::{debug, info};

pub(crate) fn same_font_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn contains_ignore_case(list: &[String], name: &str) -> bool {
    list.iter().any(|font| same_font_name(font, name))
}

fn position_ignore_case(list: &[String], name: &str) -> Option<usize> {
    list.iter().position(|font| same_font_name(font, name))
}

impl FontConfig {
    /// Remember `name` under `kind`. Returns `false` without touching the
    /// config when the trimmed name is empty or already known.
    pub fn add_font(&mut self, kind: FontKind, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }

        match kind {
            FontKind::Google => {
                if contains_ignore_case(&self.google_fonts, trimmed) {
                    debug!(font = %trimmed, "Font is already imported");
                    return false;
                }
                // A Google font supersedes the local entry of the same name.
                if let Some(idx) = position_ignore_case(&self.local_fonts, trimmed) {
                    let local = self.local_fonts.remove(idx);
                    debug!(font = %local, "Promoted local font to Google font");
                }
                self.google_fonts.push(trimmed.to_string());
                info!(font = %trimmed, "Imported Google font");
            }
            FontKind::Local => {
                if contains_ignore_case(&self.google_fonts, trimmed)
                    || contains_ignore_case(&self.local_fonts, trimmed)
                {
                    return false;
                }
                self.local_fonts.push(trimmed.to_string());
                info!(font = %trimmed, "Saved local font");
            }
        }
        true
    }

    /// Forget the first entry matching `name` case-insensitively; no-op if absent.
    pub fn remove_font(&mut self, kind: FontKind, name: &str) {
        let list = self.fonts_mut(kind);
        if let Some(idx) = position_ignore_case(list, name) {
            let removed = list.remove(idx);
            info!(font = %removed, ?kind, "Removed font");
        }
    }

    /// Restore the list invariants after loading or importing foreign data:
    /// trimmed, non-empty, unique per list, and no local font that is also a
    /// Google font.
    pub fn normalize_font_lists(&mut self) {
        let google = dedupe(std::mem::take(&mut self.google_fonts), &[]);
        let local = dedupe(std::mem::take(&mut self.local_fonts), &google);
        self.google_fonts = google;
        self.local_fonts = local;
    }
}

fn dedupe(fonts: Vec<String>, excluded: &[String]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(fonts.len());
    for font in fonts {
        let trimmed = font.trim();
        if trimmed.is_empty()
            || contains_ignore_case(&kept, trimmed)
            || contains_ignore_case(excluded, trimmed)
        {
            continue;
        }
        kept.push(trimmed.to_string());
    }
    kept
}
