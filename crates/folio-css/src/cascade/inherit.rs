//! [§ 7 Defaulting](https://www.w3.org/TR/css-cascade-4/#defaulting)
//!
//! "When the cascade does not result in a value, the specified value must
//! be found some other way. Inherited properties draw their defaults from
//! their parent element through inheritance; all other properties take
//! their initial value."
//!
//! The initial values themselves live with the style materializer; here a
//! missing value is simply `None`.

use super::MatchTable;
use crate::property::PropertyId;
use crate::value::Value;

/// The value `property` resolves to on the element of `table`, or `None`
/// if the property takes its initial value.
///
/// - An explicit value other than `inherit` is returned as is.
/// - An explicit `inherit` resolves to the parent's value. `font-size` is
///   the exception: its literal `inherit` is returned, and the materializer
///   turns it into a scale of 1 relative to the parent's size.
/// - Without an explicit value, inheritable properties take the nearest
///   ancestor's explicit value, skipping ancestors that say `inherit`.
///
/// ```
/// use folio_css::{PropertyId, match_css, parse_stylesheet, value_for};
/// use folio_dom::DomTree;
///
/// let sheet = parse_stylesheet("body { color: navy; margin: 4pt }");
/// let mut tree = DomTree::new();
/// let body = tree.append_element(tree.root(), "body", &[]);
/// let p = tree.append_element(body, "p", &[]);
///
/// let body_table = match_css(None, &sheet, None, tree.node(body));
/// let p_table = match_css(Some(&body_table), &sheet, None, tree.node(p));
/// assert_eq!(value_for(&p_table, PropertyId::Color).unwrap()[0].data, "navy");
/// assert!(value_for(&p_table, PropertyId::MarginTop).is_none());
/// ```
#[must_use]
pub fn value_for<'a>(table: &MatchTable<'a>, property: PropertyId) -> Option<&'a [Value]> {
    let value = table.get(property);
    let Some(up) = table.up() else {
        return value;
    };

    match value {
        Some(value) if is_inherit(value) && property != PropertyId::FontSize => {
            value_for(up, property)
        }
        None if property.is_inheritable() => inherited_value(up, property),
        _ => value,
    }
}

/// Walk up from `table` to the first explicit value that is not `inherit`.
///
/// At the root table whatever is there is returned, a literal `inherit`
/// included; it converts to the initial value like any unknown keyword.
fn inherited_value<'a>(table: &MatchTable<'a>, property: PropertyId) -> Option<&'a [Value]> {
    let mut current = table;
    loop {
        let value = current.get(property);
        match current.up() {
            Some(up) if value.is_none_or(is_inherit) => current = up,
            _ => return value,
        }
    }
}

fn is_inherit(value: &[Value]) -> bool {
    value.first().is_some_and(Value::is_inherit)
}
