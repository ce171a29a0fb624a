//! # Palettes
//!
//! A [Palette] is the nine-field color set applied to the rendering surface.
//! Fields are addressed type-safely through [PaletteField] instead of strings.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::is_css_color;
use crate::error::{ThemeError, ThemeResult};

/// Nine named colors describing every surface of the site.
///
/// Values are CSS color strings (hex or `rgba(...)`). Registered and derived
/// palettes always have all nine fields populated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    /// Brand color for interactive elements.
    pub primary: String,
    /// Secondary brand color.
    pub secondary: String,
    /// Accent color.
    pub accent: String,
    /// Page body background.
    pub background: String,
    /// Content panel background, usually translucent.
    pub card: String,
    /// Navigation bar background, usually translucent.
    pub nav: String,
    /// Main text color.
    pub text: String,
    /// De-emphasized text color.
    pub muted: String,
    /// Low-alpha separator color.
    pub border: String,
}

/// A single field of a [Palette].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteField {
    /// [Palette::primary]
    Primary,
    /// [Palette::secondary]
    Secondary,
    /// [Palette::accent]
    Accent,
    /// [Palette::background]
    Background,
    /// [Palette::card]
    Card,
    /// [Palette::nav]
    Nav,
    /// [Palette::text]
    Text,
    /// [Palette::muted]
    Muted,
    /// [Palette::border]
    Border,
}

impl PaletteField {
    /// All fields, in the order they are applied to the rendering surface.
    pub const ALL: [PaletteField; 9] = [
        PaletteField::Primary,
        PaletteField::Secondary,
        PaletteField::Accent,
        PaletteField::Background,
        PaletteField::Card,
        PaletteField::Nav,
        PaletteField::Text,
        PaletteField::Muted,
        PaletteField::Border,
    ];

    /// The serialized field name.
    pub fn name(self) -> &'static str {
        match self {
            PaletteField::Primary => "primary",
            PaletteField::Secondary => "secondary",
            PaletteField::Accent => "accent",
            PaletteField::Background => "background",
            PaletteField::Card => "card",
            PaletteField::Nav => "nav",
            PaletteField::Text => "text",
            PaletteField::Muted => "muted",
            PaletteField::Border => "border",
        }
    }

    /// The style variable this field is written to on the rendering surface.
    pub fn css_variable(self) -> &'static str {
        match self {
            PaletteField::Primary => "--primary",
            PaletteField::Secondary => "--secondary",
            PaletteField::Accent => "--accent",
            PaletteField::Background => "--bg-body",
            PaletteField::Card => "--bg-card",
            PaletteField::Nav => "--bg-nav",
            PaletteField::Text => "--text-main",
            PaletteField::Muted => "--text-muted",
            PaletteField::Border => "--border",
        }
    }

    /// Human readable label for color editors.
    pub fn label(self) -> &'static str {
        match self {
            PaletteField::Primary => "Primary",
            PaletteField::Secondary => "Secondary",
            PaletteField::Accent => "Accent",
            PaletteField::Background => "Body BG",
            PaletteField::Card => "Card BG",
            PaletteField::Nav => "Nav BG",
            PaletteField::Text => "Text Main",
            PaletteField::Muted => "Text Muted",
            PaletteField::Border => "Border",
        }
    }
}

impl Display for PaletteField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteField {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| ThemeError::unknown_field(s))
    }
}

impl Palette {
    /// Get the value of a field.
    pub fn get(&self, field: PaletteField) -> &str {
        match field {
            PaletteField::Primary => &self.primary,
            PaletteField::Secondary => &self.secondary,
            PaletteField::Accent => &self.accent,
            PaletteField::Background => &self.background,
            PaletteField::Card => &self.card,
            PaletteField::Nav => &self.nav,
            PaletteField::Text => &self.text,
            PaletteField::Muted => &self.muted,
            PaletteField::Border => &self.border,
        }
    }

    /// Get a mutable reference to a field.
    pub fn get_mut(&mut self, field: PaletteField) -> &mut String {
        match field {
            PaletteField::Primary => &mut self.primary,
            PaletteField::Secondary => &mut self.secondary,
            PaletteField::Accent => &mut self.accent,
            PaletteField::Background => &mut self.background,
            PaletteField::Card => &mut self.card,
            PaletteField::Nav => &mut self.nav,
            PaletteField::Text => &mut self.text,
            PaletteField::Muted => &mut self.muted,
            PaletteField::Border => &mut self.border,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: PaletteField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Iterate `(field, value)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteField, &str)> + '_ {
        PaletteField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Whether every field holds a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, value)| !value.trim().is_empty())
    }

    /// Merge a patch into this palette, returning the fields that were set.
    pub fn merge(&mut self, patch: &PalettePatch) -> Vec<PaletteField> {
        let mut changed = Vec::new();
        for (field, value) in patch.iter() {
            self.set(field, value);
            changed.push(field);
        }
        changed
    }

    /// Serialize to the JSON form used for durable storage.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON storage form, rejecting palettes with empty fields
    /// or values that are not CSS colors.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        let palette: Palette = serde_json::from_str(json)?;
        if !palette.is_complete() {
            return Err(ThemeError::Serialization(
                "palette has empty color fields".to_string(),
            ));
        }
        if let Some((field, value)) = palette.iter().find(|(_, value)| !is_css_color(value)) {
            return Err(ThemeError::invalid_color(field, value));
        }
        Ok(palette)
    }
}

/// A partial [Palette], used to edit several custom fields at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PalettePatch {
    /// New primary color.
    pub primary: Option<String>,
    /// New secondary color.
    pub secondary: Option<String>,
    /// New accent color.
    pub accent: Option<String>,
    /// New body background.
    pub background: Option<String>,
    /// New card background.
    pub card: Option<String>,
    /// New navigation background.
    pub nav: Option<String>,
    /// New main text color.
    pub text: Option<String>,
    /// New muted text color.
    pub muted: Option<String>,
    /// New border color.
    pub border: Option<String>,
}

impl PalettePatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    pub fn with(mut self, field: PaletteField, value: impl Into<String>) -> Self {
        *self.slot(field) = Some(value.into());
        self
    }

    /// Get the patched value of a field, if any.
    pub fn get(&self, field: PaletteField) -> Option<&str> {
        match field {
            PaletteField::Primary => self.primary.as_deref(),
            PaletteField::Secondary => self.secondary.as_deref(),
            PaletteField::Accent => self.accent.as_deref(),
            PaletteField::Background => self.background.as_deref(),
            PaletteField::Card => self.card.as_deref(),
            PaletteField::Nav => self.nav.as_deref(),
            PaletteField::Text => self.text.as_deref(),
            PaletteField::Muted => self.muted.as_deref(),
            PaletteField::Border => self.border.as_deref(),
        }
    }

    /// Iterate the fields present in this patch.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteField, &str)> + '_ {
        PaletteField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// Whether the patch sets no field.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot(&mut self, field: PaletteField) -> &mut Option<String> {
        match field {
            PaletteField::Primary => &mut self.primary,
            PaletteField::Secondary => &mut self.secondary,
            PaletteField::Accent => &mut self.accent,
            PaletteField::Background => &mut self.background,
            PaletteField::Card => &mut self.card,
            PaletteField::Nav => &mut self.nav,
            PaletteField::Text => &mut self.text,
            PaletteField::Muted => &mut self.muted,
            PaletteField::Border => &mut self.border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette {
            primary: "#8B5CF6".into(),
            secondary: "#EC4899".into(),
            accent: "#6366F1".into(),
            background: "#0F172A".into(),
            card: "rgba(30, 41, 59, 0.75)".into(),
            nav: "rgba(15, 23, 42, 0.8)".into(),
            text: "#F8FAFC".into(),
            muted: "#94A3B8".into(),
            border: "rgba(148, 163, 184, 0.1)".into(),
        }
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in PaletteField::ALL {
            assert_eq!(field.name().parse::<PaletteField>().unwrap(), field);
        }
        assert!(matches!(
            "shadow".parse::<PaletteField>(),
            Err(ThemeError::UnknownField { .. })
        ));
    }

    #[test]
    fn iter_follows_field_order() {
        let palette = sample();
        let fields: Vec<_> = palette.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, PaletteField::ALL.to_vec());
        assert_eq!(palette.iter().nth(4).unwrap().1, "rgba(30, 41, 59, 0.75)");
    }

    #[test]
    fn set_touches_one_field() {
        let mut palette = sample();
        let before = palette.clone();
        palette.set(PaletteField::Muted, "#000000");
        for field in PaletteField::ALL {
            if field == PaletteField::Muted {
                assert_eq!(palette.get(field), "#000000");
            } else {
                assert_eq!(palette.get(field), before.get(field));
            }
        }
    }

    #[test]
    fn merge_reports_changed_fields() {
        let mut palette = sample();
        let patch = PalettePatch::new()
            .with(PaletteField::Nav, "#111111")
            .with(PaletteField::Primary, "#222222");
        let changed = palette.merge(&patch);
        assert_eq!(changed, vec![PaletteField::Primary, PaletteField::Nav]);
        assert_eq!(palette.nav, "#111111");
        assert_eq!(palette.primary, "#222222");
        assert_eq!(palette.accent, "#6366F1");
    }

    #[test]
    fn json_uses_field_names() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for field in PaletteField::ALL {
            assert!(value.get(field.name()).is_some(), "missing {field}");
        }
        assert_eq!(Palette::from_json(&json).unwrap(), sample());
    }

    #[test]
    fn from_json_rejects_incomplete_palettes() {
        assert!(Palette::from_json("{not json").is_err());
        assert!(Palette::from_json(r##"{"primary": "#fff"}"##).is_err());

        let mut palette = sample();
        palette.border = String::new();
        let json = serde_json::to_string(&palette).unwrap();
        assert!(Palette::from_json(&json).is_err());
    }

    #[test]
    fn from_json_rejects_non_color_values() {
        let mut palette = sample();
        palette.card = "translucent".into();
        let json = serde_json::to_string(&palette).unwrap();
        assert!(matches!(
            Palette::from_json(&json),
            Err(ThemeError::InvalidColorValue { field: PaletteField::Card, ref value }) if value == "translucent"
        ));
    }
}
