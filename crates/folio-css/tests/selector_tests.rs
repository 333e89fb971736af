//! Integration tests for selector parsing, matching and specificity.

use folio_css::selector::parse_nth;
use folio_css::{Combinator, Selector, match_nth, matches, parse_selector, selector_specificity};
use folio_dom::{DomTree, NodeId};
use quickcheck_macros::quickcheck;

fn specificity(text: &str) -> i32 {
    selector_specificity(&parse_selector(text).unwrap(), false)
}

#[test]
fn test_specificity_weights() {
    assert_eq!(specificity("*"), 0);
    assert_eq!(specificity("p"), 1);
    assert_eq!(specificity(".note"), 10);
    assert_eq!(specificity("p.note"), 11);
    assert_eq!(specificity("[lang]"), 10);
    assert_eq!(specificity("#main"), 100);
    assert_eq!(specificity("li:first-child"), 2);
    assert_eq!(specificity("div > ul li.item"), 13);
    assert_eq!(specificity("#a #b .c"), 210);
}

#[test]
fn test_important_adds_a_tier() {
    let selector = parse_selector("#a").unwrap();
    assert_eq!(selector_specificity(&selector, true), 1100);
    assert!(selector_specificity(&parse_selector("*").unwrap(), true) > specificity("#a #b #c"));
}

#[test]
fn test_parse_builds_left_associative_tree() {
    let selector = parse_selector("div p > em").unwrap();
    let expected = Selector::tag("div")
        .combine(Combinator::Descendant, Selector::tag("p"))
        .combine(Combinator::Child, Selector::tag("em"));
    assert_eq!(selector, expected);
    assert_eq!(selector.to_string(), "div p > em");
}

#[test]
fn test_nth_two_n_plus_one() {
    for position in [1, 3, 5, 7] {
        assert!(match_nth(position, 2, 1), "{position}");
    }
    for position in [2, 4, 6] {
        assert!(!match_nth(position, 2, 1), "{position}");
    }
}

#[test]
fn test_nth_zero_n_plus_three() {
    assert_eq!(parse_nth("0n+3"), Some((0, 3)));
    let matching: Vec<_> = (1..=10).filter(|&p| match_nth(p, 0, 3)).collect();
    assert_eq!(matching, [3]);
}

#[test]
fn test_nth_child_in_a_document() {
    let mut tree = DomTree::new();
    let ol = tree.append_element(tree.root(), "ol", &[]);
    let items: Vec<NodeId> = (0..7).map(|_| tree.append_element(ol, "li", &[])).collect();

    let odd = parse_selector("li:nth-child(2n+1)").unwrap();
    let third = parse_selector("li:nth-child(0n+3)").unwrap();
    let positions = |selector: &Selector| -> Vec<usize> {
        (1..=items.len())
            .filter(|&p| matches(selector, tree.node(items[p - 1])))
            .collect()
    };
    assert_eq!(positions(&odd), [1, 3, 5, 7]);
    assert_eq!(positions(&third), [3]);
}

#[test]
fn test_adjacent_skips_text() {
    let mut tree = DomTree::new();
    let body = tree.append_element(tree.root(), "body", &[]);
    let h1 = tree.append_element(body, "h1", &[]);
    let _ = tree.append_text(body, "\n");
    let p = tree.append_element(body, "p", &[]);

    let selector = parse_selector("h1 + p").unwrap();
    assert!(matches(&selector, tree.node(p)));
    assert!(!matches(&selector, tree.node(h1)));
}

/// Selectors exercising every kind of condition and combinator.
const SELECTORS: &[&str] = &[
    "*",
    "p",
    "div p",
    "div > p",
    "p + p",
    "p.note",
    "#main",
    "[lang|=en]",
    "[class~=x]",
    "li:nth-child(2n+1)",
    "li:nth-last-of-type(-n+2)",
    ":first-child",
    ":last-child",
    ":only-child",
    ":root",
    ":empty",
    "body div > p.note + p",
];

const TAGS: &[&str] = &["div", "p", "li", "span"];

/// Grow a tree from `shape`: each byte picks a parent among the elements
/// built so far and a tag, and may add attributes.
fn build_tree(shape: &[u8]) -> (DomTree, Vec<NodeId>) {
    let mut tree = DomTree::new();
    let body = tree.append_element(tree.root(), "body", &[]);
    let mut elements = vec![body];
    for &byte in shape {
        let parent = elements[usize::from(byte) % elements.len()];
        let tag = TAGS[usize::from(byte >> 4) % TAGS.len()];
        let attrs: &[(&str, &str)] = match byte % 5 {
            0 => &[("class", "note x")],
            1 => &[("id", "main")],
            2 => &[("lang", "en-US")],
            _ => &[],
        };
        if byte % 7 == 0 {
            let _ = tree.append_text(parent, "text");
        }
        elements.push(tree.append_element(parent, tag, attrs));
    }
    (tree, elements)
}

#[quickcheck]
fn prop_matching_is_deterministic(shape: Vec<u8>, selector: usize, node: usize) -> bool {
    let (tree, elements) = build_tree(&shape);
    let selector = parse_selector(SELECTORS[selector % SELECTORS.len()]).unwrap();
    let node = tree.node(elements[node % elements.len()]);
    matches(&selector, node) == matches(&selector, node)
}

#[quickcheck]
fn prop_universal_matches_every_element(shape: Vec<u8>) -> bool {
    let (tree, elements) = build_tree(&shape);
    let universal = parse_selector("*").unwrap();
    elements.iter().all(|&id| matches(&universal, tree.node(id)))
}

#[quickcheck]
fn prop_child_implies_descendant(shape: Vec<u8>, node: usize) -> bool {
    let (tree, elements) = build_tree(&shape);
    let node = tree.node(elements[node % elements.len()]);
    let child = parse_selector("body > *").unwrap();
    let descendant = parse_selector("body *").unwrap();
    !matches(&child, node) || matches(&descendant, node)
}

#[quickcheck]
fn prop_match_nth_agrees_with_enumeration(position: u8, a: i8, b: i8) -> bool {
    let position = i32::from(position % 64) + 1;
    let a = i32::from(a % 8);
    let b = i32::from(b % 16);
    let enumerated = (0..=200).any(|n| a * n + b == position);
    match_nth(position, a, b) == enumerated
}

#[quickcheck]
fn prop_each_class_adds_ten(classes: u8) -> bool {
    let classes = usize::from(classes % 16);
    let text = format!("p{}", ".c".repeat(classes));
    let expected = 1 + 10 * i32::try_from(classes).unwrap();
    specificity(&text) == expected
}
