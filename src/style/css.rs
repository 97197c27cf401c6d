//! CSS generated from the font config.

use crate::settings::{FontConfig, FontSpec, Scope};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const IMPORTANT: &str = " !important";
const FALLBACK_FAMILY: &str = "sans-serif";

pub(crate) const ALL_MESSAGES_SELECTOR: &str = "#chat .mes .mes_text";
pub(crate) const USER_MESSAGES_SELECTOR: &str = "#chat .mes[is_user=\"true\"] .mes_text";
pub(crate) const CHARACTER_MESSAGES_SELECTOR: &str = "#chat .mes:not([is_user=\"true\"]) .mes_text";

const GOOGLE_FONTS_ENDPOINT: &str = "https://fonts.googleapis.com/css2";
const STANDARD_WEIGHTS: &str = "100;200;300;400;500;600;700;800;900";

// Everything `encodeURIComponent` escapes: all but A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `font-family` and `font-weight` rules for one spec, each marked
/// `!important`, joined with `; `. Empty when the spec sets nothing.
pub fn compute_font_declaration(spec: &FontSpec) -> String {
    let mut parts = Vec::with_capacity(2);
    if !spec.font_family.is_empty() {
        parts.push(format!(
            "font-family: {}, {FALLBACK_FAMILY}{IMPORTANT}",
            spec.font_family
        ));
    }
    if spec.font_weight != 0.0 && !spec.font_weight.is_nan() {
        parts.push(format!("font-weight: {}{IMPORTANT}", spec.font_weight));
    }
    parts.join("; ")
}

/// Scoped rules for the chat display. Empty when the panel is disabled.
pub fn build_stylesheet(config: &FontConfig) -> String {
    if !config.enabled {
        return String::new();
    }

    let mut css = String::new();
    push_rule(&mut css, ALL_MESSAGES_SELECTOR, &config.global);
    if config.user.override_enabled {
        push_rule(&mut css, USER_MESSAGES_SELECTOR, &config.user.font);
    }
    if config.character.override_enabled {
        push_rule(&mut css, CHARACTER_MESSAGES_SELECTOR, &config.character.font);
    }
    css
}

fn push_rule(css: &mut String, selector: &str, spec: &FontSpec) {
    let declaration = compute_font_declaration(spec);
    if declaration.is_empty() {
        return;
    }
    css.push_str(selector);
    css.push_str(" {\n    ");
    css.push_str(&declaration);
    css.push_str(";\n}\n");
}

/// One `@import` per Google font requesting the full weight range.
pub fn build_font_import_declarations(google_fonts: &[String]) -> String {
    google_fonts
        .iter()
        .map(|font| {
            let family = utf8_percent_encode(font, URI_COMPONENT)
                .to_string()
                .replace("%20", "+");
            format!(
                "@import url('{GOOGLE_FONTS_ENDPOINT}?family={family}:wght@{STANDARD_WEIGHTS}&display=swap');"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inline style for a preview message of `scope`: the effective spec's
/// declaration without `!important` markers.
pub fn preview_declaration(config: &FontConfig, scope: Scope) -> String {
    compute_font_declaration(config.effective_spec(scope)).replace(IMPORTANT, "")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewStyles {
    pub user: String,
    pub character: String,
}

pub fn build_preview(config: &FontConfig) -> PreviewStyles {
    PreviewStyles {
        user: preview_declaration(config, Scope::User),
        character: preview_declaration(config, Scope::Character),
    }
}
