//! Font-set capability.
//!
//! The style engine does not open font files. It asks a [`FontSet`] for a
//! family by name and style flags and records the opaque [`FontId`] it gets
//! back. Embedders implement the trait over their font backend;
//! [`MemoryFontSet`] serves tests and callers without one.

use serde::Serialize;

use crate::error::CssError;

/// Opaque handle to a loaded font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FontId(pub u32);

/// Style flags requested alongside a family name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FontFlags {
    /// [§ 3.2](https://www.w3.org/TR/css-fonts-4/#font-weight-prop) weight of 600 or more.
    pub bold: bool,
    /// [§ 3.3](https://www.w3.org/TR/css-fonts-4/#font-style-prop) `italic` or `oblique`.
    pub italic: bool,
    /// [§ 6.11](https://www.w3.org/TR/css-fonts-4/#font-variant-prop) `small-caps`.
    pub small_caps: bool,
}

/// [§ 4 Font Resources](https://www.w3.org/TR/css-fonts-4/#font-resources)
///
/// A face declared by an `@font-face` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceSource {
    /// "font-family: defines the font family name that will be used in all
    /// CSS font family name matching."
    pub family: String,
    /// Style the face provides.
    pub flags: FontFlags,
    /// Address of the font data, from the first `url()` of `src`.
    pub src: String,
}

/// Loads fonts by family name.
pub trait FontSet {
    /// Load a face of `family` with the given style.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::FontLoad`] if the set has no such family. The
    /// style engine then tries the next family in the list.
    fn load_font(&mut self, family: &str, flags: FontFlags) -> Result<FontId, CssError>;

    /// Make an `@font-face` face available under its family name.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::FontFace`] if the face cannot be registered.
    fn add_font_face(&mut self, face: FontFaceSource) -> Result<(), CssError>;
}

/// In-memory font set: a list of known family names plus registered faces.
///
/// Every distinct `(family, flags)` request gets its own [`FontId`], handed
/// out in request order.
#[derive(Debug, Clone, Default)]
pub struct MemoryFontSet {
    families: Vec<String>,
    faces: Vec<FontFaceSource>,
    loaded: Vec<(String, FontFlags)>,
}

impl MemoryFontSet {
    /// Generic families every renderer has.
    pub const GENERIC_FAMILIES: &'static [&'static str] =
        &["cursive", "fantasy", "monospace", "sans-serif", "serif"];

    /// A font set that knows only the generic families.
    #[must_use]
    pub fn new() -> Self {
        Self::with_families(Self::GENERIC_FAMILIES)
    }

    /// A font set that knows exactly `families`.
    #[must_use]
    pub fn with_families(families: &[&str]) -> Self {
        Self {
            families: families.iter().map(|f| f.to_ascii_lowercase()).collect(),
            ..Self::default()
        }
    }

    /// Faces registered through [`FontSet::add_font_face`].
    #[must_use]
    pub fn faces(&self) -> &[FontFaceSource] {
        &self.faces
    }

    /// Family (lowercased) and flags a handle was loaded with.
    #[must_use]
    pub fn describe(&self, id: FontId) -> Option<(&str, FontFlags)> {
        let index = usize::try_from(id.0).ok()?;
        self.loaded
            .get(index)
            .map(|(family, flags)| (family.as_str(), *flags))
    }

    fn knows(&self, family: &str) -> bool {
        self.families.iter().any(|f| f == family)
            || self.faces.iter().any(|face| face.family.eq_ignore_ascii_case(family))
    }
}

impl FontSet for MemoryFontSet {
    fn load_font(&mut self, family: &str, flags: FontFlags) -> Result<FontId, CssError> {
        let key = family.trim().to_ascii_lowercase();
        if !self.knows(&key) {
            return Err(CssError::FontLoad {
                family: family.to_string(),
                reason: "no such family".to_string(),
            });
        }

        let index = match self.loaded.iter().position(|(f, fl)| *f == key && *fl == flags) {
            Some(index) => index,
            None => {
                self.loaded.push((key, flags));
                self.loaded.len() - 1
            }
        };
        u32::try_from(index).map(FontId).map_err(|_| CssError::FontLoad {
            family: family.to_string(),
            reason: "too many fonts".to_string(),
        })
    }

    fn add_font_face(&mut self, face: FontFaceSource) -> Result<(), CssError> {
        if face.family.trim().is_empty() || face.src.trim().is_empty() {
            return Err(CssError::FontFace {
                family: face.family,
                reason: "missing family name or source".to_string(),
            });
        }
        self.faces.push(face);
        Ok(())
    }
}
