//! # Theme Identifiers
//!
//! This module provides [ThemeId], the closed set of themes the site can show.
//! Built-in identifiers map to fixed palettes in the [registry](crate::registry);
//! [ThemeId::Custom] is the only one whose palette changes at runtime.
//!
//! ## Usage Examples
//!
//! ```rust
//! use folio_theme::id::ThemeId;
//!
//! let id: ThemeId = "ocean".parse().unwrap();
//! assert_eq!(id, ThemeId::Ocean);
//! assert_eq!(id.label(), "Ocean");
//! assert_eq!(id.next(), ThemeId::Forest);
//!
//! // Unknown names are rejected instead of silently falling back.
//! assert!("neon".parse::<ThemeId>().is_err());
//! ```
//!
//! ## Ordering
//!
//! [ThemeId::ALL] lists identifiers in declaration order. That order is shared
//! by theme selectors and by [ThemeId::next], which the terminal `theme`
//! command uses to cycle through every theme.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// An identifier for a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Dark violet default theme.
    #[default]
    Default,
    /// Light mode.
    Light,
    /// Neon green and magenta on black.
    Cyberpunk,
    /// Sky blues.
    Ocean,
    /// Emerald greens.
    Forest,
    /// Oranges.
    Sunset,
    /// Violet and pink on indigo.
    Lavender,
    /// Light emerald.
    Mint,
    /// Roses.
    Cherry,
    /// Amber on deep blue.
    Royal,
    /// Yellows on brown.
    Solar,
    /// Greyscale.
    Monochrome,
    /// Indigo on slate.
    Midnight,
    /// Fuchsia.
    Nebula,
    /// Reds.
    Volcano,
    /// User-derived palette.
    Custom,
}

impl ThemeId {
    /// Every identifier, in cycling order.
    pub const ALL: [ThemeId; 16] = [
        ThemeId::Default,
        ThemeId::Light,
        ThemeId::Cyberpunk,
        ThemeId::Ocean,
        ThemeId::Forest,
        ThemeId::Sunset,
        ThemeId::Lavender,
        ThemeId::Mint,
        ThemeId::Cherry,
        ThemeId::Royal,
        ThemeId::Solar,
        ThemeId::Monochrome,
        ThemeId::Midnight,
        ThemeId::Nebula,
        ThemeId::Volcano,
        ThemeId::Custom,
    ];

    /// Every identifier with a fixed palette.
    pub fn built_in() -> impl Iterator<Item = ThemeId> {
        Self::ALL.into_iter().filter(|id| !id.is_custom())
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Default => "default",
            ThemeId::Light => "light",
            ThemeId::Cyberpunk => "cyberpunk",
            ThemeId::Ocean => "ocean",
            ThemeId::Forest => "forest",
            ThemeId::Sunset => "sunset",
            ThemeId::Lavender => "lavender",
            ThemeId::Mint => "mint",
            ThemeId::Cherry => "cherry",
            ThemeId::Royal => "royal",
            ThemeId::Solar => "solar",
            ThemeId::Monochrome => "monochrome",
            ThemeId::Midnight => "midnight",
            ThemeId::Nebula => "nebula",
            ThemeId::Volcano => "volcano",
            ThemeId::Custom => "custom",
        }
    }

    /// Display label for selectors and command palettes.
    pub fn label(self) -> &'static str {
        match self {
            ThemeId::Default => "Default",
            ThemeId::Light => "Light",
            ThemeId::Cyberpunk => "Cyberpunk",
            ThemeId::Ocean => "Ocean",
            ThemeId::Forest => "Forest",
            ThemeId::Sunset => "Sunset",
            ThemeId::Lavender => "Lavender",
            ThemeId::Mint => "Mint",
            ThemeId::Cherry => "Cherry",
            ThemeId::Royal => "Royal",
            ThemeId::Solar => "Solar",
            ThemeId::Monochrome => "Monochrome",
            ThemeId::Midnight => "Midnight",
            ThemeId::Nebula => "Nebula",
            ThemeId::Volcano => "Volcano",
            ThemeId::Custom => "Custom",
        }
    }

    /// Whether this is the user-derived theme.
    pub fn is_custom(self) -> bool {
        self == ThemeId::Custom
    }

    /// The following identifier in cycling order, wrapping to [ThemeId::Default].
    pub fn next(self) -> ThemeId {
        let index = Self::ALL.iter().position(|id| *id == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Display for ThemeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ThemeError::unknown_theme(s))
    }
}
