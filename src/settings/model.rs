use serde::{Deserialize, Serialize, Serializer};

pub(crate) const DEFAULT_FONT_WEIGHT: f32 = 400.0;

/// Which messages a font spec applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    User,
    Character,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Global, Scope::User, Scope::Character];

    /// Short tag used in element ids (`tfr-<tag>-font-family`).
    pub fn tag(self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::User => "user",
            Scope::Character => "char",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Scope::Global => "Global",
            Scope::User => "User",
            Scope::Character => "Character",
        };
        write!(f, "{}", label)
    }
}

/// Where a remembered font name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontKind {
    Google,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    #[serde(default)]
    pub font_family: String,
    #[serde(
        default = "default_font_weight",
        serialize_with = "serialize_font_weight"
    )]
    pub font_weight: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec {
            font_family: String::new(),
            font_weight: DEFAULT_FONT_WEIGHT,
        }
    }
}

/// A font spec that only applies when its override is switched on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedFontSpec {
    #[serde(default)]
    pub override_enabled: bool,
    #[serde(flatten)]
    pub font: FontSpec,
}

/// Every font choice the panel manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub global: FontSpec,
    #[serde(default)]
    pub user: ScopedFontSpec,
    #[serde(default)]
    pub character: ScopedFontSpec,
    #[serde(default)]
    pub google_fonts: Vec<String>,
    #[serde(default)]
    pub local_fonts: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            enabled: true,
            global: FontSpec::default(),
            user: ScopedFontSpec::default(),
            character: ScopedFontSpec::default(),
            google_fonts: Vec::new(),
            local_fonts: Vec::new(),
        }
    }
}

impl FontConfig {
    pub fn spec(&self, scope: Scope) -> &FontSpec {
        match scope {
            Scope::Global => &self.global,
            Scope::User => &self.user.font,
            Scope::Character => &self.character.font,
        }
    }

    pub fn spec_mut(&mut self, scope: Scope) -> &mut FontSpec {
        match scope {
            Scope::Global => &mut self.global,
            Scope::User => &mut self.user.font,
            Scope::Character => &mut self.character.font,
        }
    }

    /// The global scope has no override switch and always reports `false`.
    pub fn override_enabled(&self, scope: Scope) -> bool {
        match scope {
            Scope::Global => false,
            Scope::User => self.user.override_enabled,
            Scope::Character => self.character.override_enabled,
        }
    }

    pub fn set_override_enabled(&mut self, scope: Scope, enabled: bool) {
        match scope {
            Scope::Global => {}
            Scope::User => self.user.override_enabled = enabled,
            Scope::Character => self.character.override_enabled = enabled,
        }
    }

    /// The spec that actually styles messages of `scope`.
    pub fn effective_spec(&self, scope: Scope) -> &FontSpec {
        if self.override_enabled(scope) {
            self.spec(scope)
        } else {
            &self.global
        }
    }

    pub fn fonts(&self, kind: FontKind) -> &[String] {
        match kind {
            FontKind::Google => &self.google_fonts,
            FontKind::Local => &self.local_fonts,
        }
    }

    pub(crate) fn fonts_mut(&mut self, kind: FontKind) -> &mut Vec<String> {
        match kind {
            FontKind::Google => &mut self.google_fonts,
            FontKind::Local => &mut self.local_fonts,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_font_weight() -> f32 {
    DEFAULT_FONT_WEIGHT
}

// Whole weights go out as integers so snapshots read `400`, not `400.0`.
fn serialize_font_weight<S: Serializer>(weight: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    if weight.is_finite() && weight.fract() == 0.0 && weight.abs() < i64::MAX as f32 {
        serializer.serialize_i64(*weight as i64)
    } else {
        serializer.serialize_f32(*weight)
    }
}
