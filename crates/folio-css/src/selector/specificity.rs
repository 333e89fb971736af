//! [§ 9 Calculating a selector's specificity](https://www.w3.org/TR/selectors-3/#specificity)
//!
//! Specificities are folded into one integer, `important·1000 + ids·100 +
//! other conditions·10 + (pseudo-classes + type names)`, so the cascade can
//! compare them with a single `>=`.

use super::{Condition, Selector};

/// Weight of the `!important` flag.
pub const IMPORTANT_WEIGHT: i32 = 1000;

/// [§ 9](https://www.w3.org/TR/selectors-3/#specificity)
///
/// "count the number of ID selectors in the selector (= a)
/// count the number of class selectors, attributes selectors, and
/// pseudo-classes in the selector (= b)
/// count the number of type selectors and pseudo-elements in the selector (= c)"
///
/// Pseudo-classes weigh like type names here rather than like classes.
/// Type names are counted at the leaves of the combinator tree only.
///
/// ```
/// use folio_css::{parse_selector, selector_specificity};
///
/// let selector = parse_selector("p.note").unwrap();
/// assert_eq!(selector_specificity(&selector, false), 11);
/// assert_eq!(selector_specificity(&selector, true), 1011);
/// ```
#[must_use]
pub fn selector_specificity(selector: &Selector, important: bool) -> i32 {
    let ids = count_conditions(selector, Condition::is_id);
    let attributes = count_conditions(selector, |c| !c.is_id() && !c.is_pseudo());
    let pseudos = count_conditions(selector, Condition::is_pseudo);
    let names = count_names(selector);

    i32::from(important) * IMPORTANT_WEIGHT + ids * 100 + attributes * 10 + pseudos + names
}

fn count_conditions(selector: &Selector, pred: fn(&Condition) -> bool) -> i32 {
    match selector {
        Selector::Compound { conditions, .. } => {
            i32::try_from(conditions.iter().filter(|c| pred(c)).count()).unwrap_or(i32::MAX)
        }
        Selector::Combined { left, right, .. } => {
            count_conditions(left, pred) + count_conditions(right, pred)
        }
    }
}

fn count_names(selector: &Selector) -> i32 {
    match selector {
        Selector::Compound { name, .. } => i32::from(name.is_some()),
        Selector::Combined { left, right, .. } => count_names(left) + count_names(right),
    }
}
