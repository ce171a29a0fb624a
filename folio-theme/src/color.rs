//! # Color-Space Utilities
//!
//! Conversions between hex RGB strings and HSL, used to derive palettes from a
//! single seed color. This is not general purpose color management: only the
//! `#rgb` and `#rrggbb` forms are accepted as seeds, and HSL values are kept in
//! the rounded form the derivation works with.
//!
//! ```rust
//! use folio_theme::color::{hex_to_hsl, hsl_to_hex};
//!
//! let hsl = hex_to_hsl("#ff0000").unwrap();
//! assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));
//! assert_eq!(hsl_to_hex(hsl.h, hsl.s, hsl.l), "#ff0000");
//! ```

use std::fmt::{Display, Formatter};

use crate::error::{ThemeError, ThemeResult};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A color in HSL space.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
/// All three are rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Render as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Render as a CSS `rgba(r, g, b, a)` string.
    pub fn to_rgba_string(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let sector = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = round1(sector * 60.0);
        if h >= 360.0 {
            h -= 360.0;
        }

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsl {
            h,
            s: round1(s * 100.0),
            l: round1(l * 100.0),
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Hsl {
    /// Convert back to 8-bit RGB.
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

/// Check if a string is a seed-compatible hex color (`#rgb` or `#rrggbb`).
pub fn is_hex_color(s: &str) -> bool {
    parse_hex(s).is_ok()
}

/// Parse a `#rgb` or `#rrggbb` hex color.
pub fn parse_hex(s: &str) -> ThemeResult<Rgb> {
    let digits = s
        .strip_prefix('#')
        .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
        .ok_or_else(|| ThemeError::invalid_hex(s))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::invalid_hex(s))
    };

    match digits.len() {
        3 => Ok(Rgb::new(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ThemeError::invalid_hex(s)),
    }
}

/// Decompose a `#rgb` or `#rrggbb` color into HSL.
pub fn hex_to_hsl(hex: &str) -> ThemeResult<Hsl> {
    parse_hex(hex).map(Rgb::to_hsl)
}

/// Compose an HSL color into a lowercase `#rrggbb` string.
///
/// Hue wraps into `[0, 360)`; saturation and lightness are clamped to `[0, 100]`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

/// Check if a string is a CSS color a palette field can hold.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` with integer channels and an alpha in `[0, 1]`.
pub fn is_css_color(s: &str) -> bool {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let (args, arity) = if let Some(rest) = s.strip_prefix("rgba(") {
        (rest, 4)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        (rest, 3)
    } else {
        return false;
    };

    let Some(args) = args.strip_suffix(')') else {
        return false;
    };
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return false;
    }

    let channels_ok = parts[..3].iter().all(|p| p.parse::<u8>().is_ok());
    let alpha_ok = parts
        .get(3)
        .map_or(true, |a| a.parse::<f64>().is_ok_and(|a| (0.0..=1.0).contains(&a)));
    channels_ok && alpha_ok
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
