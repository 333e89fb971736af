//! CSS cascade, inheritance and computed-style engine for reflowable documents.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Style rules, `@media` (screen/print), `@page` and `@font-face`
//!   - Declaration lists, including `style=""` attributes
//!
//! - **CSS Selectors** ([Selectors Level 3](https://www.w3.org/TR/selectors-3/))
//!   - Type, universal, class, ID and attribute selectors
//!   - Descendant, child and adjacent-sibling combinators
//!   - Structural pseudo-classes, including the `an+b` microsyntax
//!   - Specificity calculation
//!
//! - **CSS Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Per-element match tables chained to the parent's table
//!   - Shorthand expansion (`margin`, `padding`, `inset`, `border*`, `font`,
//!     `list-style`, `background`)
//!   - Explicit and implicit inheritance
//!
//! - **Computed Styles** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Lengths, percentages and font-relative units
//!   - Hex, `rgb()`/`rgba()` and named colors
//!   - Font selection through a [`FontSet`]
//!
//! - **Style interning**: a splay tree that shares identical computed styles
//!   across an element tree.
//!
//! # Not Implemented
//!
//! - Sibling combinator `~`, `:not()` and other functional pseudo-classes
//! - Media query features (`@media (min-width: ...)`)
//! - Custom properties and `calc()`

/// Cascade and match tables per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Tree driver that styles a whole document.
pub mod engine;
/// Error types.
pub mod error;
/// Font-set capability consumed by the style materializer.
pub mod font;
/// `@font-face` registration per [CSS Fonts Level 4 § 4](https://www.w3.org/TR/css-fonts-4/#font-face-rule).
pub mod font_face;
/// Engine configuration.
pub mod options;
/// Stylesheet parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Logical property identifiers.
pub mod property;
/// Selector data model, matching and specificity per [Selectors Level 3](https://www.w3.org/TR/selectors-3/).
pub mod selector;
/// Computed style records per [CSS Cascading Level 4 § 4.4](https://www.w3.org/TR/css-cascade-4/#computed).
pub mod style;
/// Style interning.
pub mod style_set;
/// Stylesheet data model.
pub mod stylesheet;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// User-agent stylesheet per [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html).
pub mod ua_stylesheet;
/// Declared value model per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod value;

// Re-exports for convenience
pub use cascade::{INLINE_SPECIFICITY, MatchTable, match_css, match_page, value_for};
pub use engine::{StyleEngine, StyledNode, StyledTree};
pub use error::CssError;
pub use font::{FontFaceSource, FontFlags, FontId, FontSet, MemoryFontSet};
pub use font_face::register_font_faces;
pub use options::StyleOptions;
pub use parser::{parse_declarations, parse_selector, parse_stylesheet};
pub use property::PropertyId;
pub use selector::{Combinator, Condition, Selector, match_nth, matches, selector_specificity};
pub use style::{Display, StyleRecord, apply_style, display_of};
pub use style_set::{StyleId, StyleSet};
pub use stylesheet::{Declaration, Rule, Stylesheet};
pub use tokenizer::{CssToken, CssTokenizer};
pub use ua_stylesheet::user_agent_stylesheet;
pub use value::{Color, Number, Unit, Value, ValueKind};
