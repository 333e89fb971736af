//! Integration tests for cascade ordering, shorthands and inheritance.

use folio_css::{
    Color, INLINE_SPECIFICITY, MatchTable, MemoryFontSet, Number, PropertyId, StyleOptions,
    Stylesheet, Value, apply_style, match_css, parse_declarations, parse_stylesheet, value_for,
};
use folio_dom::{DomTree, NodeId};

const RED: Color = Color::rgba(255, 0, 0, 255);
const GREEN: Color = Color::rgba(0, 128, 0, 255);
const BLUE: Color = Color::rgba(0, 0, 255, 255);

/// Text of the first component of `property`'s resolved value.
fn resolved(table: &MatchTable<'_>, property: PropertyId) -> Option<String> {
    value_for(table, property).map(|value| value[0].to_string())
}

fn computed_color(table: &MatchTable<'_>) -> Color {
    apply_style(&mut MemoryFontSet::new(), &StyleOptions::default(), table).color
}

#[test]
fn test_class_beats_type() {
    let sheet = parse_stylesheet("p { color: red; } p.note { color: blue; }");
    let mut tree = DomTree::new();
    let p = tree.append_element(tree.root(), "p", &[("class", "note")]);

    let table = match_css(None, &sheet, None, tree.node(p));
    assert_eq!(computed_color(&table), BLUE);
}

#[test]
fn test_id_beats_class_in_either_order() {
    let mut tree = DomTree::new();
    let p = tree.append_element(tree.root(), "p", &[("id", "intro"), ("class", "lead")]);

    for css in [
        "#intro { color: red } .lead { color: blue }",
        ".lead { color: blue } #intro { color: red }",
    ] {
        let sheet = parse_stylesheet(css);
        let table = match_css(None, &sheet, None, tree.node(p));
        assert_eq!(resolved(&table, PropertyId::Color).as_deref(), Some("red"), "{css}");
    }
}

#[test]
fn test_later_rule_wins_a_tie() {
    let mut tree = DomTree::new();
    let p = tree.append_element(tree.root(), "p", &[("class", "a b")]);

    let sheet = parse_stylesheet(".a { color: red } .b { color: green }");
    let table = match_css(None, &sheet, None, tree.node(p));
    assert_eq!(computed_color(&table), GREEN);

    let sheet = parse_stylesheet(".b { color: green } .a { color: red }");
    let table = match_css(None, &sheet, None, tree.node(p));
    assert_eq!(computed_color(&table), RED);
}

#[test]
fn test_important_beats_higher_specificity() {
    let mut tree = DomTree::new();
    let p = tree.append_element(tree.root(), "p", &[("id", "x")]);

    let sheet = parse_stylesheet("p { color: green !important } #x { color: red }");
    let table = match_css(None, &sheet, None, tree.node(p));
    assert_eq!(computed_color(&table), GREEN);
    assert_eq!(table.specificity(PropertyId::Color), 1001);
}

#[test]
fn test_inline_style_beats_important() {
    let sheet = parse_stylesheet("span { color: green !important; }");
    let mut tree = DomTree::new();
    let span = tree.append_element(tree.root(), "span", &[("style", "color:#ff0000")]);

    let inline = parse_declarations("color:#ff0000");
    let table = match_css(None, &sheet, Some(&inline), tree.node(span));
    assert_eq!(computed_color(&table), RED);
    assert_eq!(table.specificity(PropertyId::Color), INLINE_SPECIFICITY);
}

#[test]
fn test_inline_declarations_ignore_important() {
    let sheet = parse_stylesheet("span { color: green }");
    let mut tree = DomTree::new();
    let span = tree.append_element(tree.root(), "span", &[]);

    let inline = parse_declarations("color: red !important; color: blue");
    let table = match_css(None, &sheet, Some(&inline), tree.node(span));
    // Inline declarations all share one specificity: the later one wins.
    assert_eq!(computed_color(&table), BLUE);
}

#[test]
fn test_first_matching_selector_of_a_group_decides() {
    let mut tree = DomTree::new();
    let p = tree.append_element(tree.root(), "p", &[("id", "x")]);

    // `p` matches first, so the rule weighs 1, not 100.
    let sheet = parse_stylesheet("p, #x { color: red } .y, p { color: blue }");
    let table = match_css(None, &sheet, None, tree.node(p));
    assert_eq!(computed_color(&table), BLUE);
}

#[test]
fn test_margin_two_values() {
    let sheet = parse_stylesheet("div { margin: 10px 20px; }");
    let mut tree = DomTree::new();
    let div = tree.append_element(tree.root(), "div", &[]);

    let table = match_css(None, &sheet, None, tree.node(div));
    let style = apply_style(&mut MemoryFontSet::new(), &StyleOptions::default(), &table);
    assert_eq!(
        style.margin,
        [
            Number::points(10.0),
            Number::points(20.0),
            Number::points(10.0),
            Number::points(20.0),
        ]
    );
}

#[test]
fn test_margin_four_and_one_values() {
    let mut tree = DomTree::new();
    let div = tree.append_element(tree.root(), "div", &[]);

    let sheet = parse_stylesheet("div { margin: 1px 2px 3px 4px }");
    let table = match_css(None, &sheet, None, tree.node(div));
    let sides = [
        PropertyId::MarginTop,
        PropertyId::MarginRight,
        PropertyId::MarginBottom,
        PropertyId::MarginLeft,
    ];
    let values: Vec<_> = sides.iter().map(|&p| resolved(&table, p)).collect();
    assert_eq!(
        values,
        ["1px", "2px", "3px", "4px"].map(|v| Some(v.to_string()))
    );

    let sheet = parse_stylesheet("div { margin: 5px }");
    let table = match_css(None, &sheet, None, tree.node(div));
    for side in sides {
        assert_eq!(resolved(&table, side).as_deref(), Some("5px"));
    }
}

#[test]
fn test_longhand_after_shorthand_overrides_one_side() {
    let sheet = parse_stylesheet("div { padding: 4pt; padding-left: 0 }");
    let mut tree = DomTree::new();
    let div = tree.append_element(tree.root(), "div", &[]);

    let table = match_css(None, &sheet, None, tree.node(div));
    assert_eq!(resolved(&table, PropertyId::PaddingTop).as_deref(), Some("4pt"));
    assert_eq!(resolved(&table, PropertyId::PaddingLeft).as_deref(), Some("0"));
}

/// Build `body > div > p > span` and return the four ids.
fn chain(tree: &mut DomTree) -> [NodeId; 4] {
    let body = tree.append_element(tree.root(), "body", &[]);
    let div = tree.append_element(body, "div", &[]);
    let p = tree.append_element(div, "p", &[]);
    let span = tree.append_element(p, "span", &[]);
    [body, div, p, span]
}

#[test]
fn test_inheritance_walks_to_nearest_explicit_value() {
    let sheet = parse_stylesheet("body { color: navy; margin-left: 1em } p { color: inherit }");
    let mut tree = DomTree::new();
    let [body, div, p, span] = chain(&mut tree);

    let body_t = match_css(None, &sheet, None, tree.node(body));
    let div_t = match_css(Some(&body_t), &sheet, None, tree.node(div));
    let p_t = match_css(Some(&div_t), &sheet, None, tree.node(p));
    let span_t = match_css(Some(&p_t), &sheet, None, tree.node(span));

    for table in [&div_t, &p_t, &span_t] {
        assert_eq!(resolved(table, PropertyId::Color).as_deref(), Some("navy"));
        assert_eq!(resolved(table, PropertyId::MarginLeft), None);
    }
}

#[test]
fn test_inheritable_property_without_any_value_is_none() {
    let sheet = Stylesheet::new();
    let mut tree = DomTree::new();
    let [body, div, ..] = chain(&mut tree);

    let body_t = match_css(None, &sheet, None, tree.node(body));
    let div_t = match_css(Some(&body_t), &sheet, None, tree.node(div));
    assert_eq!(value_for(&div_t, PropertyId::TextAlign), None);
}

#[test]
fn test_explicit_inherit_on_non_inherited_property() {
    let sheet = parse_stylesheet("div { border-top-width: 3pt } p { border-top-width: inherit }");
    let mut tree = DomTree::new();
    let [body, div, p, _] = chain(&mut tree);

    let body_t = match_css(None, &sheet, None, tree.node(body));
    let div_t = match_css(Some(&body_t), &sheet, None, tree.node(div));
    let p_t = match_css(Some(&div_t), &sheet, None, tree.node(p));
    assert_eq!(resolved(&p_t, PropertyId::BorderTopWidth).as_deref(), Some("3pt"));
}

#[test]
fn test_font_size_inherit_is_not_forwarded() {
    let sheet = parse_stylesheet("div { font-size: 2em } p { font-size: inherit }");
    let mut tree = DomTree::new();
    let [body, div, p, _] = chain(&mut tree);

    let body_t = match_css(None, &sheet, None, tree.node(body));
    let div_t = match_css(Some(&body_t), &sheet, None, tree.node(div));
    let p_t = match_css(Some(&div_t), &sheet, None, tree.node(p));

    // The literal `inherit` comes back instead of the parent's `2em` ...
    assert_eq!(resolved(&p_t, PropertyId::FontSize).as_deref(), Some("inherit"));
    // ... and computes to "same size as the parent", a scale of 1.
    let style = apply_style(&mut MemoryFontSet::new(), &StyleOptions::default(), &p_t);
    assert_eq!(style.font_size, Number::scale(1.0));
}

#[test]
fn test_inherit_at_root_yields_initial_value() {
    let sheet = parse_stylesheet("html { color: inherit }");
    let mut tree = DomTree::new();
    let html = tree.append_element(tree.root(), "html", &[]);

    let table = match_css(None, &sheet, None, tree.node(html));
    assert_eq!(computed_color(&table), Color::BLACK);
}

#[test]
fn test_inline_declarations_can_be_short_lived() {
    // The parent table and the inline declarations have different lifetimes.
    let sheet = parse_stylesheet("p { color: red }");
    let mut tree = DomTree::new();
    let body = tree.append_element(tree.root(), "body", &[]);
    let p = tree.append_element(body, "p", &[]);

    let body_t = match_css(None, &sheet, None, tree.node(body));
    let color = {
        let inline = vec![folio_css::Declaration::new(
            PropertyId::Color,
            vec![Value::keyword("lime")],
        )];
        let p_t = match_css(Some(&body_t), &sheet, Some(&inline), tree.node(p));
        computed_color(&p_t)
    };
    assert_eq!(color, Color::rgba(0, 255, 0, 255));
}
