//! [CSS Paged Media § 3](https://www.w3.org/TR/css-page-3/#at-page-rule)
//!
//! "The @page rule is a CSS at-rule used to declare page contexts."
//!
//! Page selectors (`:first`, `:left`, named pages) are not distinguished:
//! every `@page` block applies to every page.

use super::MatchTable;
use crate::selector::selector_specificity;
use crate::stylesheet::Stylesheet;

/// Fold the declarations of every `@page` rule into a fresh table.
///
/// The result has no parent and is read with the ordinary materializer,
/// e.g. for page margins.
///
/// ```
/// use folio_css::{PropertyId, match_page, parse_stylesheet};
///
/// let sheet = parse_stylesheet("@page { margin: 2cm } @page { margin-top: 1in }");
/// let table = match_page(&sheet);
/// assert_eq!(table.get(PropertyId::MarginTop).unwrap()[0].data, "1in");
/// assert_eq!(table.get(PropertyId::MarginLeft).unwrap()[0].data, "2cm");
/// ```
#[must_use]
pub fn match_page(sheet: &Stylesheet) -> MatchTable<'_> {
    let mut table = MatchTable::new(None);
    for rule in &sheet.rules {
        let Some(selector) = rule.selectors.iter().find(|s| s.is_at_rule("page")) else {
            continue;
        };
        for declaration in &rule.declarations {
            table.add_declaration(
                declaration,
                selector_specificity(selector, declaration.important),
            );
        }
    }
    table
}
