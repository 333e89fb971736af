//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::CssError;

/// Options controlling how documents are styled.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
///
/// # Example
/// ```
/// use folio_css::StyleOptions;
///
/// let options = StyleOptions::from_json(r#"{ "use_document_css": false }"#).unwrap();
/// assert!(!options.use_document_css);
/// assert_eq!(options.fallback_font_family, "serif");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Honor author styling carried by the document itself: `style=""`
    /// attributes and `@font-face` rules.
    pub use_document_css: bool,

    /// Generic family loaded when none of an element's `font-family`
    /// entries is available.
    pub fallback_font_family: String,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            use_document_css: true,
            fallback_font_family: "serif".to_string(),
        }
    }
}

impl StyleOptions {
    /// Load options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::InvalidOptions`] if the text is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, CssError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(StyleOptions::from_json("{}").unwrap(), StyleOptions::default());
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let err = StyleOptions::from_json(r#"{ "use_document_css": "yes" }"#).unwrap_err();
        assert!(matches!(err, CssError::InvalidOptions(_)));
    }
}
