//! Selector matching.
//!
//! [§ 3 Selectors](https://www.w3.org/TR/selectors-3/#selectors)
//!
//! "A selector is a chain of one or more sequences of simple selectors
//! separated by combinators."
//!
//! Matching is a pure function of the selector and the element's
//! neighbourhood; it never fails. Anything the engine does not understand
//! (an unknown pseudo-class, a malformed `an+b`) simply does not match.

use folio_dom::ElementNav;

use super::nth::{match_nth, parse_nth};
use super::{Combinator, Condition, Selector};

/// Does `selector` match `node`?
///
/// ```
/// use folio_css::{matches, parse_selector};
/// use folio_dom::DomTree;
///
/// let mut tree = DomTree::new();
/// let body = tree.append_element(tree.root(), "body", &[]);
/// let p = tree.append_element(body, "p", &[("class", "note")]);
///
/// let selector = parse_selector("body > p.note").unwrap();
/// assert!(matches(&selector, tree.node(p)));
/// ```
#[must_use]
pub fn matches<N: ElementNav>(selector: &Selector, node: N) -> bool {
    match selector {
        Selector::Compound { name, conditions } => {
            match_compound(name.as_deref(), conditions, node)
        }
        Selector::Combined {
            combinator,
            left,
            right,
        } => {
            if !matches(right, node) {
                return false;
            }
            match combinator {
                // [§ 8.1](https://www.w3.org/TR/selectors-3/#descendant-combinators)
                // Any ancestor will do, not only the nearest one.
                Combinator::Descendant => {
                    let mut ancestor = node.parent();
                    while let Some(candidate) = ancestor {
                        if matches(left, candidate) {
                            return true;
                        }
                        ancestor = candidate.parent();
                    }
                    false
                }
                // [§ 8.2](https://www.w3.org/TR/selectors-3/#child-combinators)
                Combinator::Child => node.parent().is_some_and(|parent| matches(left, parent)),
                // [§ 8.3.1](https://www.w3.org/TR/selectors-3/#adjacent-sibling-combinators)
                // "Non-element nodes (e.g. text between elements) are ignored
                // when considering adjacency of elements."
                Combinator::Adjacent => {
                    previous_tag_sibling(node).is_some_and(|sibling| matches(left, sibling))
                }
            }
        }
    }
}

/// [§ 6.1 Type selector](https://www.w3.org/TR/selectors-3/#type-selectors)
/// followed by every condition, in order.
fn match_compound<N: ElementNav>(name: Option<&str>, conditions: &[Condition], node: N) -> bool {
    let Some(tag) = node.tag_name() else {
        return false;
    };
    if name.is_some_and(|name| !same_tag(Some(name), Some(tag))) {
        return false;
    }
    conditions.iter().all(|condition| match_condition(condition, node))
}

fn match_condition<N: ElementNav>(condition: &Condition, node: N) -> bool {
    match condition {
        Condition::Id(id) => node.attribute("id") == Some(id.as_str()),
        Condition::Class(class) => has_word(node.attribute("class"), class),
        Condition::AttributeExists(name) => node.attribute(name).is_some(),
        Condition::AttributeEquals { name, value } => node.attribute(name) == Some(value.as_str()),
        Condition::AttributeIncludes { name, value } => has_word(node.attribute(name), value),
        Condition::AttributeDashMatch { name, value } => node
            .attribute(name)
            .and_then(|attr| attr.strip_prefix(value.as_str()))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('-')),
        Condition::Pseudo { name, arg } => match_pseudo(name, arg.as_deref(), node),
    }
}

/// "a whitespace-separated list of words, one of which is exactly val"
fn has_word(list: Option<&str>, word: &str) -> bool {
    !word.is_empty() && list.is_some_and(|list| list.split_ascii_whitespace().any(|w| w == word))
}

/// [§ 6.6.5 Structural pseudo-classes](https://www.w3.org/TR/selectors-3/#structural-pseudos)
fn match_pseudo<N: ElementNav>(name: &str, arg: Option<&str>, node: N) -> bool {
    let nth = |position: i32| {
        arg.and_then(parse_nth)
            .is_some_and(|(a, b)| match_nth(position, a, b))
    };

    match name {
        // "The :root pseudo-class represents an element that is the root of
        // the document."
        "root" => node.parent().is_none(),
        // "The :empty pseudo-class represents an element that has no children
        // at all." Only element children count here.
        "empty" => children(node).all(|child| !child.is_tag()),
        "first-child" => preceding(node, false) == 0,
        "last-child" => following(node, false) == 0,
        "only-child" => preceding(node, false) == 0 && following(node, false) == 0,
        "first-of-type" => preceding(node, true) == 0,
        "last-of-type" => following(node, true) == 0,
        "only-of-type" => preceding(node, true) == 0 && following(node, true) == 0,
        "nth-child" => nth(preceding(node, false) + 1),
        "nth-last-child" => nth(following(node, false) + 1),
        "nth-of-type" => nth(preceding(node, true) + 1),
        "nth-last-of-type" => nth(following(node, true) + 1),
        _ => false,
    }
}

fn previous_tag_sibling<N: ElementNav>(node: N) -> Option<N> {
    let mut sibling = node.prev_sibling();
    while let Some(candidate) = sibling {
        if candidate.is_tag() {
            return Some(candidate);
        }
        sibling = candidate.prev_sibling();
    }
    None
}

/// Number of tag siblings before `node`, optionally only those of its type.
fn preceding<N: ElementNav>(node: N, same_type: bool) -> i32 {
    count_siblings(node, same_type, |n| n.prev_sibling())
}

/// Number of tag siblings after `node`, optionally only those of its type.
fn following<N: ElementNav>(node: N, same_type: bool) -> i32 {
    count_siblings(node, same_type, |n| n.next_sibling())
}

/// Tag names compare ASCII case-insensitively, as type selectors do.
fn same_tag(a: Option<&str>, b: Option<&str>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.eq_ignore_ascii_case(b))
}

fn count_siblings<N: ElementNav>(node: N, same_type: bool, step: impl Fn(&N) -> Option<N>) -> i32 {
    let mut count = 0;
    let mut sibling = step(&node);
    while let Some(candidate) = sibling {
        if candidate.is_tag() && (!same_type || same_tag(candidate.tag_name(), node.tag_name())) {
            count += 1;
        }
        sibling = step(&candidate);
    }
    count
}

fn children<N: ElementNav>(node: N) -> impl Iterator<Item = N> {
    core::iter::successors(node.first_child(), ElementNav::next_sibling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_selector;
    use folio_dom::{DomTree, NodeId};

    fn list_with_text() -> (DomTree, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let ul = tree.append_element(tree.root(), "ul", &[]);
        let mut items = Vec::new();
        for i in 0..5 {
            let _ = tree.append_text(ul, " ");
            let tag = if i == 2 { "lh" } else { "li" };
            items.push(tree.append_element(ul, tag, &[]));
        }
        (tree, items)
    }

    fn matching(tree: &DomTree, items: &[NodeId], selector: &str) -> Vec<usize> {
        let selector = parse_selector(selector).unwrap();
        (0..items.len())
            .filter(|&i| matches(&selector, tree.node(items[i])))
            .collect()
    }

    #[test]
    fn test_text_nodes_do_not_count_as_siblings() {
        let (tree, items) = list_with_text();
        assert_eq!(matching(&tree, &items, ":first-child"), vec![0]);
        assert_eq!(matching(&tree, &items, ":last-child"), vec![4]);
        assert_eq!(matching(&tree, &items, "li + li"), vec![1, 4]);
        assert_eq!(matching(&tree, &items, "lh + li"), vec![3]);
    }

    #[test]
    fn test_nth_child_and_of_type() {
        let (tree, items) = list_with_text();
        assert_eq!(matching(&tree, &items, "li:nth-child(odd)"), vec![0, 4]);
        assert_eq!(matching(&tree, &items, ":nth-child(3)"), vec![2]);
        assert_eq!(matching(&tree, &items, "li:nth-of-type(3)"), vec![3]);
        assert_eq!(matching(&tree, &items, "li:nth-last-of-type(1)"), vec![4]);
        assert_eq!(matching(&tree, &items, ":nth-last-child(-n+2)"), vec![3, 4]);
        assert_eq!(matching(&tree, &items, "lh:only-of-type"), vec![2]);
    }

    #[test]
    fn test_tag_case_is_ignored_for_types() {
        let mut tree = DomTree::new();
        let ul = tree.append_element(tree.root(), "ul", &[]);
        let items: Vec<NodeId> = ["LI", "li", "Li"]
            .iter()
            .map(|tag| tree.append_element(ul, tag, &[]))
            .collect();
        assert_eq!(matching(&tree, &items, "li"), vec![0, 1, 2]);
        assert_eq!(matching(&tree, &items, "li:nth-of-type(2)"), vec![1]);
        assert_eq!(matching(&tree, &items, "li:last-of-type"), vec![2]);
        assert!(matching(&tree, &items, "li:only-of-type").is_empty());
    }

    #[test]
    fn test_huge_nth_offset_never_matches_wrongly() {
        let (tree, items) = list_with_text();
        assert_eq!(matching(&tree, &items, "li:nth-child(n-2147483648)"), vec![0, 1, 3, 4]);
        assert!(matching(&tree, &items, "li:nth-child(-n-2147483648)").is_empty());
    }

    #[test]
    fn test_unknown_pseudo_never_matches() {
        let (tree, items) = list_with_text();
        assert!(matching(&tree, &items, "li:hover").is_empty());
        assert!(matching(&tree, &items, "li::before").is_empty());
        assert!(matching(&tree, &items, "li:nth-child(foo)").is_empty());
    }

    #[test]
    fn test_attribute_conditions() {
        let mut tree = DomTree::new();
        let el = tree.append_element(
            tree.root(),
            "p",
            &[("lang", "en-GB"), ("class", "a  b"), ("data-x", "")],
        );
        let node = tree.node(el);
        let check = |s: &str| matches(&parse_selector(s).unwrap(), node);
        assert!(check("[lang|=en]"));
        assert!(!check("[lang|=e]"));
        assert!(check("[class~=b]"));
        assert!(check("p.a.b"));
        assert!(!check("p.c"));
        assert!(check("[data-x]"));
        assert!(check("[data-x=\"\"]"));
        assert!(!check("[data-y]"));
        assert!(!check("[class~=\"\"]"));
    }

    #[test]
    fn test_root_and_empty() {
        let mut tree = DomTree::new();
        let html = tree.append_element(tree.root(), "html", &[]);
        let body = tree.append_element(html, "body", &[]);
        let _ = tree.append_text(body, "only text");
        let check = |s: &str, id| matches(&parse_selector(s).unwrap(), tree.node(id));
        assert!(check(":root", html));
        assert!(!check(":root", body));
        assert!(check("body:empty", body));
        assert!(!check("html:empty", html));
    }

    #[test]
    fn test_descendant_uses_any_ancestor() {
        let mut tree = DomTree::new();
        let outer = tree.append_element(tree.root(), "div", &[("class", "x")]);
        let inner = tree.append_element(outer, "div", &[]);
        let em = tree.append_element(inner, "em", &[]);
        let check = |s: &str| matches(&parse_selector(s).unwrap(), tree.node(em));
        assert!(check("div.x em"));
        assert!(!check("div.x > em"));
        assert!(check("div.x > div > em"));
        assert!(check("div.x div em"));
    }
}
