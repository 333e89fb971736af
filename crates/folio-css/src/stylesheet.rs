//! Stylesheet data model.
//!
//! [CSS Syntax Level 3 § 5](https://www.w3.org/TR/css-syntax-3/#parsing)
//!
//! A stylesheet is an ordered list of [`Rule`]s. Order matters: when two
//! declarations tie on specificity, the one from the later rule wins.

use core::fmt;

use crate::parser;
use crate::property::PropertyId;
use crate::selector::Selector;
use crate::value::{Value, ValueList};

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A property with its declared value list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The property being set.
    pub property: PropertyId,
    /// The declared value components in source order.
    pub value: Vec<Value>,
    /// "If the last two non-<whitespace-token>s in the declaration's value are
    /// a <delim-token> with the value "!" followed by an <ident-token> with a
    /// value that is an ASCII case-insensitive match for "important", remove
    /// them from the declaration's value and set the declaration's important
    /// flag to true."
    pub important: bool,
}

impl Declaration {
    /// Create a normal (not `!important`) declaration.
    #[must_use]
    pub const fn new(property: PropertyId, value: Vec<Value>) -> Self {
        Self {
            property,
            value,
            important: false,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, ValueList(&self.value))?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// [§ 9 Style rules](https://www.w3.org/TR/css-syntax-3/#style-rules)
///
/// A comma-separated selector group with its declaration block. `@page` and
/// `@font-face` blocks are rules too, with a single selector named after the
/// at-rule, which never matches an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// The selector group; the first selector that matches an element is used.
    pub selectors: Vec<Selector>,
    /// The declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Returns true if this rule came from the at-rule `@name`.
    #[must_use]
    pub fn is_at_rule(&self, name: &str) -> bool {
        self.selectors.iter().any(|selector| selector.is_at_rule(name))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        f.write_str(" {")?;
        for declaration in &self.declarations {
            write!(f, " {declaration};")?;
        }
        f.write_str(" }")
    }
}

/// An ordered list of rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Rules in cascade order.
    pub rules: Vec<Rule>,
    /// Set once the `@font-face` rules have been handed to a font set.
    pub loaded: bool,
}

impl Stylesheet {
    /// An empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CSS source text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        parser::parse_stylesheet(text)
    }

    /// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// "Declarations from style sheets independently linked by the
    /// originating document are treated as if they were concatenated in
    /// linking order."
    ///
    /// Parse `text` and append its rules after the existing ones.
    pub fn append(&mut self, text: &str) {
        self.rules.extend(parser::parse_stylesheet(text).rules);
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
