//! # Rendering Surface
//!
//! The presentation layer reads nine style variables, one per
//! [PaletteField], instead of hardcoded colors. A [RenderSurface] is anything
//! those variables can be written to: the document root of a browser page, a
//! native renderer's variable table, or the in-memory [StyleVariables].
//!
//! ```rust
//! use folio_theme::id::ThemeId;
//! use folio_theme::registry;
//! use folio_theme::surface::{apply_palette, StyleVariables};
//!
//! let mut variables = StyleVariables::new();
//! apply_palette(&mut variables, &registry::palette(ThemeId::Ocean));
//! assert_eq!(variables.get("--primary"), Some("#0EA5E9"));
//! ```

use indexmap::IndexMap;

use crate::palette::Palette;

/// A target for style variables.
pub trait RenderSurface {
    /// Set a single style variable.
    fn set_variable(&mut self, name: &str, value: &str);
}

impl<T: RenderSurface + ?Sized> RenderSurface for &mut T {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value);
    }
}

impl<T: RenderSurface + ?Sized> RenderSurface for Box<T> {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value);
    }
}

/// Write every field of a palette onto a surface, in field order.
pub fn apply_palette<R: RenderSurface + ?Sized>(surface: &mut R, palette: &Palette) {
    for (field, value) in palette.iter() {
        surface.set_variable(field.css_variable(), value);
    }
}

/// An insertion-ordered set of style variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    variables: IndexMap<String, String>,
    writes: usize,
}

impl StyleVariables {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a variable value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Iterate variables in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable was ever set.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Total number of writes, including overwrites.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Render as a `:root` CSS block.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css.push('\n');
        css
    }
}

impl RenderSurface for StyleVariables {
    fn set_variable(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.variables.insert(name.to_string(), value.to_string());
    }
}
