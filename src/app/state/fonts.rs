use iced::Font;
use iced::font::{Family, Weight};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

/// iced names fonts by `&'static str`; every family the panel has shown is
/// leaked once and reused afterwards.
static FAMILY_NAMES: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn intern_family(name: &str) -> &'static str {
    let mut names = FAMILY_NAMES
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(existing) = names.get(name) {
        return existing;
    }
    let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.insert(leaked);
    leaked
}

fn font_weight(weight: f32) -> Weight {
    match weight.round() as i32 {
        i32::MIN..=149 => Weight::Thin,
        150..=249 => Weight::ExtraLight,
        250..=349 => Weight::Light,
        350..=449 => Weight::Normal,
        450..=549 => Weight::Medium,
        550..=649 => Weight::Semibold,
        650..=749 => Weight::Bold,
        750..=849 => Weight::ExtraBold,
        _ => Weight::Black,
    }
}

/// Font for text drawn in a chosen family. An empty family keeps the
/// default sans-serif face, like the generated CSS fallback.
pub(in crate::app) fn display_font(family: &str, weight: f32) -> Font {
    let family = family.trim();
    let family = if family.is_empty() {
        Family::SansSerif
    } else {
        Family::Name(intern_family(family))
    };
    Font {
        family,
        weight: font_weight(weight),
        ..Font::DEFAULT
    }
}
