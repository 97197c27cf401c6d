use crate::settings::{FontConfig, FontKind, Scope, same_font_name};

/// A remembered font shown under a scope's family input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontChip {
    pub(in crate::app) name: String,
    pub(in crate::app) kind: FontKind,
    pub(in crate::app) active: bool,
}

impl FontChip {
    pub(in crate::app) fn label(&self) -> String {
        match self.kind {
            FontKind::Google => self.name.clone(),
            FontKind::Local => format!("{} 💻", self.name),
        }
    }

    pub(in crate::app) fn tooltip(&self) -> String {
        match self.kind {
            FontKind::Google => format!("Google Font: {} (click to use)", self.name),
            FontKind::Local => format!(
                "Local font: {} (click to use, × to remove)",
                self.name
            ),
        }
    }
}

/// Google fonts first, then local fonts, each in insertion order.
pub(in crate::app) fn font_chips(settings: &FontConfig, scope: Scope) -> Vec<FontChip> {
    let family = &settings.spec(scope).font_family;
    [FontKind::Google, FontKind::Local]
        .into_iter()
        .flat_map(|kind| {
            settings.fonts(kind).iter().map(move |name| FontChip {
                name: name.clone(),
                kind,
                active: !family.is_empty() && same_font_name(family, name),
            })
        })
        .collect()
}

pub(in crate::app) fn empty_chips_hint(scope: Scope) -> &'static str {
    match scope {
        Scope::Global => "Type a font name above or import Google Fonts below",
        Scope::User | Scope::Character => "Add fonts in Global tab first",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_chips_come_before_local_chips() {
        let mut settings = FontConfig::default();
        settings.add_font(FontKind::Local, "Georgia");
        settings.add_font(FontKind::Google, "Roboto");
        settings.add_font(FontKind::Google, "Lora");

        let names: Vec<(String, FontKind)> = font_chips(&settings, Scope::Global)
            .into_iter()
            .map(|chip| (chip.name, chip.kind))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Roboto".to_string(), FontKind::Google),
                ("Lora".to_string(), FontKind::Google),
                ("Georgia".to_string(), FontKind::Local),
            ]
        );
    }

    #[test]
    fn active_chip_follows_scope_family() {
        let mut settings = FontConfig::default();
        settings.add_font(FontKind::Google, "Roboto");
        settings.add_font(FontKind::Local, "Georgia");
        settings.user.font.font_family = "georgia".to_string();

        let user = font_chips(&settings, Scope::User);
        assert!(!user[0].active);
        assert!(user[1].active);
        assert!(font_chips(&settings, Scope::Global).iter().all(|chip| !chip.active));
    }

    #[test]
    fn local_chips_are_marked() {
        let chip = FontChip {
            name: "Georgia".to_string(),
            kind: FontKind::Local,
            active: false,
        };
        assert_eq!(chip.label(), "Georgia 💻");
        assert!(chip.tooltip().contains("× to remove"));
    }

    #[test]
    fn hints_differ_between_global_and_scoped_tabs() {
        assert!(empty_chips_hint(Scope::Global).contains("import Google Fonts"));
        assert_eq!(empty_chips_hint(Scope::Character), "Add fonts in Global tab first");
    }
}
