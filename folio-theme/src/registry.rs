//! # Palette Registry
//!
//! Fixed palettes for every [ThemeId]. Lookups hand out owned copies, so
//! editing the custom palette can never alter this table.

use crate::id::ThemeId;
use crate::palette::Palette;

/// The seed color used before the user picks one.
pub const DEFAULT_SEED_COLOR: &str = "#8B5CF6";

/// Look up the palette registered for a theme.
///
/// For [ThemeId::Custom] this is the starting palette used before any
/// customization happens, not the user's current custom palette.
pub fn palette(id: ThemeId) -> Palette {
    let values = match id {
        ThemeId::Default | ThemeId::Custom => [
            "#8B5CF6",
            "#EC4899",
            "#6366F1",
            "#0F172A",
            "rgba(30, 41, 59, 0.75)",
            "rgba(15, 23, 42, 0.8)",
            "#F8FAFC",
            "#94A3B8",
            "rgba(148, 163, 184, 0.1)",
        ],
        ThemeId::Light => [
            "#8B5CF6",
            "#EC4899",
            "#6366F1",
            "#FFFFFF",
            "rgba(248, 250, 252, 0.9)",
            "rgba(255, 255, 255, 0.95)",
            "#0F172A",
            "#64748B",
            "rgba(0, 0, 0, 0.1)",
        ],
        ThemeId::Cyberpunk => [
            "#00FF9D",
            "#FF00FF",
            "#00FFFF",
            "#050505",
            "rgba(20, 20, 20, 0.8)",
            "rgba(5, 5, 5, 0.9)",
            "#E0E0E0",
            "#404040",
            "rgba(0, 255, 157, 0.2)",
        ],
        ThemeId::Ocean => [
            "#0EA5E9",
            "#38BDF8",
            "#0284C7",
            "#020617",
            "rgba(15, 23, 42, 0.8)",
            "rgba(2, 6, 23, 0.9)",
            "#F0F9FF",
            "#7DD3FC",
            "rgba(14, 165, 233, 0.2)",
        ],
        ThemeId::Forest => [
            "#10B981",
            "#34D399",
            "#059669",
            "#022C22",
            "rgba(6, 78, 59, 0.8)",
            "rgba(2, 44, 34, 0.9)",
            "#ECFDF5",
            "#6EE7B7",
            "rgba(16, 185, 129, 0.2)",
        ],
        ThemeId::Sunset => [
            "#F97316",
            "#FDBA74",
            "#EA580C",
            "#431407",
            "rgba(124, 45, 18, 0.8)",
            "rgba(67, 20, 7, 0.9)",
            "#FFF7ED",
            "#FDBA74",
            "rgba(249, 115, 22, 0.2)",
        ],
        ThemeId::Lavender => [
            "#A78BFA",
            "#F472B6",
            "#818CF8",
            "#1E1B4B",
            "rgba(49, 46, 129, 0.8)",
            "rgba(30, 27, 75, 0.9)",
            "#E0E7FF",
            "#A5B4FC",
            "rgba(167, 139, 250, 0.2)",
        ],
        ThemeId::Mint => [
            "#34D399",
            "#6EE7B7",
            "#10B981",
            "#064E3B",
            "rgba(2, 44, 34, 0.8)",
            "rgba(6, 78, 59, 0.9)",
            "#ECFDF5",
            "#6EE7B7",
            "rgba(52, 211, 153, 0.2)",
        ],
        ThemeId::Cherry => [
            "#FB7185",
            "#FDA4AF",
            "#F43F5E",
            "#4C0519",
            "rgba(136, 19, 55, 0.8)",
            "rgba(76, 5, 25, 0.9)",
            "#FFF1F2",
            "#FECDD3",
            "rgba(251, 113, 133, 0.2)",
        ],
        ThemeId::Royal => [
            "#FBBF24",
            "#FCD34D",
            "#D97706",
            "#172554",
            "rgba(30, 58, 138, 0.8)",
            "rgba(23, 37, 84, 0.9)",
            "#FEF3C7",
            "#93C5FD",
            "rgba(251, 191, 36, 0.2)",
        ],
        ThemeId::Solar => [
            "#FACC15",
            "#FDE047",
            "#EAB308",
            "#422006",
            "rgba(113, 63, 18, 0.8)",
            "rgba(66, 32, 6, 0.9)",
            "#FEFCE8",
            "#FDE047",
            "rgba(250, 204, 21, 0.2)",
        ],
        ThemeId::Monochrome => [
            "#FFFFFF",
            "#D4D4D4",
            "#A3A3A3",
            "#000000",
            "rgba(23, 23, 23, 0.8)",
            "rgba(0, 0, 0, 0.9)",
            "#FFFFFF",
            "#737373",
            "rgba(255, 255, 255, 0.2)",
        ],
        ThemeId::Midnight => [
            "#6366F1",
            "#818CF8",
            "#4F46E5",
            "#020617",
            "rgba(15, 23, 42, 0.8)",
            "rgba(2, 6, 23, 0.9)",
            "#E0E7FF",
            "#6366F1",
            "rgba(99, 102, 241, 0.2)",
        ],
        ThemeId::Nebula => [
            "#D946EF",
            "#E879F9",
            "#C026D3",
            "#2A041D",
            "rgba(80, 7, 36, 0.8)",
            "rgba(42, 4, 29, 0.9)",
            "#FAE8FF",
            "#D946EF",
            "rgba(217, 70, 239, 0.2)",
        ],
        ThemeId::Volcano => [
            "#EF4444",
            "#F87171",
            "#DC2626",
            "#450A0A",
            "rgba(127, 29, 29, 0.8)",
            "rgba(69, 10, 10, 0.9)",
            "#FEF2F2",
            "#EF4444",
            "rgba(239, 68, 68, 0.2)",
        ],
    };
    from_values(values)
}

/// Iterate the built-in themes and their palettes in cycling order.
pub fn entries() -> impl Iterator<Item = (ThemeId, Palette)> {
    ThemeId::built_in().map(|id| (id, palette(id)))
}

fn from_values([primary, secondary, accent, background, card, nav, text, muted, border]: [&str; 9]) -> Palette {
    Palette {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        background: background.to_string(),
        card: card.to_string(),
        nav: nav.to_string(),
        text: text.to_string(),
        muted: muted.to_string(),
        border: border.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{is_css_color, is_hex_color};

    #[test]
    fn every_palette_is_complete_css() {
        for id in ThemeId::ALL {
            let palette = palette(id);
            assert!(palette.is_complete(), "{id} has empty fields");
            for (field, value) in palette.iter() {
                assert!(is_css_color(value), "{id}.{field} = {value}");
            }
        }
    }

    #[test]
    fn custom_starts_as_default() {
        assert_eq!(palette(ThemeId::Custom), palette(ThemeId::Default));
    }

    #[test]
    fn default_seed_is_default_primary() {
        assert!(is_hex_color(DEFAULT_SEED_COLOR));
        assert_eq!(palette(ThemeId::Default).primary, DEFAULT_SEED_COLOR);
    }

    #[test]
    fn lookups_are_independent_copies() {
        let mut copy = palette(ThemeId::Ocean);
        copy.primary = "#000000".to_string();
        assert_eq!(palette(ThemeId::Ocean).primary, "#0EA5E9");
    }

    #[test]
    fn entries_cover_built_ins() {
        let ids: Vec<_> = entries().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(ids.first(), Some(&ThemeId::Default));
        assert_eq!(ids.last(), Some(&ThemeId::Volcano));
    }
}
