//! CSS Selectors
//!
//! [Selectors Level 3](https://www.w3.org/TR/selectors-3/)
//!
//! A selector is a tree: leaves are compound selectors (an optional type
//! name plus a list of conditions) and inner nodes join two selectors with a
//! combinator. Chains associate to the left, so `div p > em` is
//! `((div p) > em)`: the right side of every inner node is a leaf that
//! describes the subject's side of that combinator.

use core::fmt;

/// Selector matching against an element.
pub mod matching;
/// The `an+b` microsyntax of structural pseudo-classes.
pub mod nth;
/// Specificity per [Selectors Level 3 § 9](https://www.w3.org/TR/selectors-3/#specificity).
pub mod specificity;

pub use matching::matches;
pub use nth::{match_nth, parse_nth};
pub use specificity::selector_specificity;

/// [§ 8 Combinators](https://www.w3.org/TR/selectors-3/#combinators)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 8.1](https://www.w3.org/TR/selectors-3/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two sequences
    /// of simple selectors."
    Descendant,
    /// [§ 8.2](https://www.w3.org/TR/selectors-3/#child-combinators)
    /// "A child combinator describes a childhood relationship between two
    /// elements."
    Child,
    /// [§ 8.3.1](https://www.w3.org/TR/selectors-3/#adjacent-sibling-combinators)
    /// "The elements represented by the two sequences share the same parent
    /// in the document tree and the element represented by the first
    /// sequence immediately precedes the element represented by the second
    /// one."
    Adjacent,
}

/// A condition on a compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    /// [§ 6.5](https://www.w3.org/TR/selectors-3/#id-selectors) `#id`
    Id(String),
    /// [§ 6.4](https://www.w3.org/TR/selectors-3/#class-html) `.class`
    Class(String),
    /// [§ 6.3.1](https://www.w3.org/TR/selectors-3/#attribute-representation) `[att]`
    AttributeExists(String),
    /// `[att=val]`: "exactly val"
    AttributeEquals {
        /// Attribute name.
        name: String,
        /// Expected value.
        value: String,
    },
    /// `[att~=val]`: "a whitespace-separated list of words, one of which is
    /// exactly val"
    AttributeIncludes {
        /// Attribute name.
        name: String,
        /// Expected word.
        value: String,
    },
    /// `[att|=val]`: "either being exactly val or beginning with val
    /// immediately followed by -"
    AttributeDashMatch {
        /// Attribute name.
        name: String,
        /// Expected prefix.
        value: String,
    },
    /// [§ 6.6](https://www.w3.org/TR/selectors-3/#pseudo-classes) `:name` or
    /// `:name(arg)`. Pseudo-elements are parsed into this form as well and
    /// never match.
    Pseudo {
        /// Lowercased pseudo-class name.
        name: String,
        /// Argument text of a functional pseudo-class.
        arg: Option<String>,
    },
}

impl Condition {
    /// Returns true for `#id` conditions.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id(_))
    }

    /// Returns true for pseudo-class conditions.
    #[must_use]
    pub const fn is_pseudo(&self) -> bool {
        matches!(self, Self::Pseudo { .. })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::AttributeExists(name) => write!(f, "[{name}]"),
            Self::AttributeEquals { name, value } => write!(f, "[{name}=\"{value}\"]"),
            Self::AttributeIncludes { name, value } => write!(f, "[{name}~=\"{value}\"]"),
            Self::AttributeDashMatch { name, value } => write!(f, "[{name}|=\"{value}\"]"),
            Self::Pseudo { name, arg: None } => write!(f, ":{name}"),
            Self::Pseudo {
                name,
                arg: Some(arg),
            } => write!(f, ":{name}({arg})"),
        }
    }
}

/// [§ 5 Groups of selectors](https://www.w3.org/TR/selectors-3/#grouping)
///
/// One selector of a comma-separated group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// [§ 4 Selector syntax](https://www.w3.org/TR/selectors-3/#selector-syntax)
    /// "A sequence of simple selectors is a chain of simple selectors that
    /// are not separated by a combinator."
    Compound {
        /// Type selector; `None` is the universal selector `*`.
        name: Option<String>,
        /// Conditions that must all hold.
        conditions: Vec<Condition>,
    },
    /// Two selectors joined by a combinator.
    Combined {
        /// How `left` relates to the element `right` matched.
        combinator: Combinator,
        /// Selector for the ancestor or preceding sibling.
        left: Box<Selector>,
        /// Selector for the subject side.
        right: Box<Selector>,
    },
}

impl Selector {
    /// A type selector with no conditions.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Compound {
            name: Some(name.into()),
            conditions: Vec::new(),
        }
    }

    /// Join `self` and `right` with `combinator`.
    #[must_use]
    pub fn combine(self, combinator: Combinator, right: Self) -> Self {
        Self::Combined {
            combinator,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Returns true if this selector stands for the at-rule `@name`.
    #[must_use]
    pub fn is_at_rule(&self, name: &str) -> bool {
        matches!(self, Self::Compound { name: Some(n), .. }
            if n.strip_prefix('@').is_some_and(|n| n.eq_ignore_ascii_case(name)))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound { name, conditions } => {
                match name {
                    Some(name) => f.write_str(name)?,
                    None if conditions.is_empty() => f.write_str("*")?,
                    None => {}
                }
                for condition in conditions {
                    write!(f, "{condition}")?;
                }
                Ok(())
            }
            Self::Combined {
                combinator,
                left,
                right,
            } => {
                let sep = match combinator {
                    Combinator::Descendant => " ",
                    Combinator::Child => " > ",
                    Combinator::Adjacent => " + ",
                };
                write!(f, "{left}{sep}{right}")
            }
        }
    }
}
