//! # Seed Derivation
//!
//! Synthesizes a dark-mode [Palette] from a single seed color. The output is a
//! pure function of the seed.
//!
//! Hue is carried with one decimal (see [hex_to_hsl](crate::color::hex_to_hsl)),
//! so a hue-shifted field can land one channel unit away from a derivation
//! that rounds hue to whole degrees: `#ff0200` yields accent `#00fdff` where
//! whole-degree hue gives `#00ffff`.
//!
//! ```rust
//! use folio_theme::derive::{generate_from_seed, TEXT_ON_DARK};
//!
//! let palette = generate_from_seed("#FF0000").unwrap();
//! assert_eq!(palette.accent, "#00ffff");
//! assert_eq!(palette.text, TEXT_ON_DARK);
//! assert_eq!(palette.border, "#FF000033");
//! ```

use crate::color::{hsl_to_hex, parse_hex};
use crate::error::ThemeResult;
use crate::palette::Palette;

/// Text color of every derived palette.
pub const TEXT_ON_DARK: &str = "#F8FAFC";

/// Alpha of derived card surfaces.
pub const CARD_ALPHA: f64 = 0.8;

/// Alpha of the derived navigation bar.
pub const NAV_ALPHA: f64 = 0.9;

/// Hex alpha appended to the seed for borders (20% opacity).
pub const BORDER_ALPHA_SUFFIX: &str = "33";

/// Derive a full palette from a `#rgb` or `#rrggbb` seed.
///
/// Fails with [ThemeError::InvalidHexColor](crate::error::ThemeError::InvalidHexColor)
/// for any other input.
pub fn generate_from_seed(seed: &str) -> ThemeResult<Palette> {
    let rgb = parse_hex(seed)?;
    let hsl = rgb.to_hsl();
    let (h, s, l) = (hsl.h, hsl.s, hsl.l);

    // Short seeds are expanded so the alpha suffix lands on six digits.
    let border_base = if seed.len() == 4 { rgb.to_hex() } else { seed.to_string() };

    let surface = |lightness: f64, alpha: f64| -> ThemeResult<String> {
        Ok(parse_hex(&hsl_to_hex(h, 20.0, lightness))?.to_rgba_string(alpha))
    };

    let palette = Palette {
        primary: seed.to_string(),
        secondary: hsl_to_hex((h + 30.0) % 360.0, s, (l + 10.0).min(90.0)),
        accent: hsl_to_hex((h + 180.0) % 360.0, s, l),
        background: hsl_to_hex(h, 30.0, 5.0),
        card: surface(10.0, CARD_ALPHA)?,
        nav: surface(8.0, NAV_ALPHA)?,
        text: TEXT_ON_DARK.to_string(),
        muted: hsl_to_hex(h, 20.0, 60.0),
        border: format!("{border_base}{BORDER_ALPHA_SUFFIX}"),
    };

    log::debug!("Derived palette from seed {seed}: {palette:?}");
    Ok(palette)
}
