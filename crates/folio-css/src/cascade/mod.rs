//! CSS Cascading
//!
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//!
//! Cascading happens per element. [`match_css`] runs every rule of the
//! stylesheet against the element and folds the winning declarations into a
//! [`MatchTable`]: one slot per longhand property holding the best value
//! seen so far and its specificity. Tables link to the parent element's
//! table, which is what [`value_for`] walks to resolve inheritance.
//!
//! Shorthands are expanded while folding, so a table only ever holds
//! longhands.

use folio_dom::ElementNav;
use strum::EnumCount;

use crate::property::PropertyId;
use crate::selector::{matches, selector_specificity};
use crate::stylesheet::{Declaration, Stylesheet};
use crate::value::Value;

/// Resolution of inherited and explicitly `inherit`ed values.
pub mod inherit;
/// `@page` rules.
pub mod page;
/// Shorthand expansion.
pub mod shorthand;

pub use inherit::value_for;
pub use page::match_page;

/// [§ 6.2 Cascading Origins](https://www.w3.org/TR/css-cascade-4/#cascading-origins)
///
/// Specificity given to declarations from an element's `style` attribute.
/// It is above any `!important` selector specificity a realistic stylesheet
/// can reach, so inline declarations win over every stylesheet rule,
/// `!important` ones included. `!important` inside the attribute itself has
/// no further effect.
pub const INLINE_SPECIFICITY: i32 = 10_000;

/// Per-element cascade result.
///
/// Values borrow from the stylesheet (and from inline declarations) for
/// `'a`. A table is built for one element, read by the style materializer
/// and by its children's tables, and then dropped.
#[derive(Debug, Clone)]
pub struct MatchTable<'a> {
    up: Option<&'a MatchTable<'a>>,
    spec: [i32; PropertyId::COUNT],
    values: [Option<&'a [Value]>; PropertyId::COUNT],
}

impl<'a> MatchTable<'a> {
    /// An empty table whose values inherit from `up`.
    #[must_use]
    pub const fn new(up: Option<&'a MatchTable<'a>>) -> Self {
        Self {
            up,
            spec: [-1; PropertyId::COUNT],
            values: [None; PropertyId::COUNT],
        }
    }

    /// The parent element's table.
    #[must_use]
    pub const fn up(&self) -> Option<&'a MatchTable<'a>> {
        self.up
    }

    /// The value this element declares for `property`, without inheritance.
    ///
    /// The slice runs from the winning value to the end of its declaration,
    /// so list-valued properties (`font-family`) see every entry.
    #[must_use]
    pub const fn get(&self, property: PropertyId) -> Option<&'a [Value]> {
        self.values[property.index()]
    }

    /// Specificity of the value in `property`'s slot, or -1 if empty.
    #[must_use]
    pub const fn specificity(&self, property: PropertyId) -> i32 {
        self.spec[property.index()]
    }

    /// [§ 6.4 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// Store `value` for a longhand if `specificity` is at least that of the
    /// current value. Ties go to the newcomer: rules are folded in
    /// stylesheet order, so "the last declared value wins".
    pub fn add_property(&mut self, property: PropertyId, value: &'a [Value], specificity: i32) {
        debug_assert!(!property.is_shorthand(), "{property} stored unexpanded");
        let slot = property.index();
        if specificity >= self.spec[slot] {
            self.spec[slot] = specificity;
            self.values[slot] = Some(value);
        }
    }

    /// Fold one declaration into the table, expanding shorthands.
    pub fn add_declaration(&mut self, declaration: &'a Declaration, specificity: i32) {
        shorthand::expand(self, declaration.property, &declaration.value, specificity);
    }
}

/// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
///
/// Build the match table for `node`.
///
/// Rules are visited in stylesheet order. Within a rule's selector group
/// the first selector that matches decides the specificity of all its
/// declarations. Declarations from the element's `style` attribute, if
/// given, are folded last with [`INLINE_SPECIFICITY`].
///
/// ```
/// use folio_css::{PropertyId, match_css, parse_stylesheet, value_for};
/// use folio_dom::DomTree;
///
/// let sheet = parse_stylesheet("p { color: red } p.note { color: blue }");
/// let mut tree = DomTree::new();
/// let p = tree.append_element(tree.root(), "p", &[("class", "note")]);
///
/// let table = match_css(None, &sheet, None, tree.node(p));
/// let color = value_for(&table, PropertyId::Color).unwrap();
/// assert_eq!(color[0].data, "blue");
/// ```
#[must_use]
pub fn match_css<'a, N: ElementNav>(
    up: Option<&'a MatchTable<'a>>,
    sheet: &'a Stylesheet,
    inline: Option<&'a [Declaration]>,
    node: N,
) -> MatchTable<'a> {
    let mut table = MatchTable::new(up);

    for rule in &sheet.rules {
        let Some(selector) = rule.selectors.iter().find(|selector| matches(selector, node)) else {
            continue;
        };
        for declaration in &rule.declarations {
            table.add_declaration(
                declaration,
                selector_specificity(selector, declaration.important),
            );
        }
    }

    for declaration in inline.into_iter().flatten() {
        table.add_declaration(declaration, INLINE_SPECIFICITY);
    }

    table
}
