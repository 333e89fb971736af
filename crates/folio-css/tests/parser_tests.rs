//! Integration tests for stylesheet, declaration and selector parsing.

use folio_css::{
    Condition, Declaration, PropertyId, Selector, Stylesheet, Value, ValueKind, parse_declarations,
    parse_selector, parse_stylesheet,
};

fn declaration(css: &str) -> Declaration {
    let mut declarations = parse_declarations(css);
    assert_eq!(declarations.len(), 1, "{css}");
    declarations.remove(0)
}

#[test]
fn test_rule_with_selector_group() {
    let sheet = parse_stylesheet("h1, h2.title { font-weight: bold; margin: 0 }");
    assert_eq!(sheet.len(), 1);

    let rule = &sheet.rules[0];
    assert_eq!(rule.selectors.len(), 2);
    assert_eq!(rule.selectors[0], Selector::tag("h1"));
    assert_eq!(rule.selectors[1].to_string(), "h2.title");
    assert_eq!(
        rule.declarations
            .iter()
            .map(|d| d.property)
            .collect::<Vec<_>>(),
        [PropertyId::FontWeight, PropertyId::Margin]
    );
}

#[test]
fn test_value_kinds() {
    let decl = declaration(
        "background: #fafafa url(paper.png) 50% 2px 1.5 'name' rgb(1, 2, 3) / auto",
    );
    let kinds: Vec<_> = decl.value.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        [
            ValueKind::Hash,
            ValueKind::Uri,
            ValueKind::Percent,
            ValueKind::Length,
            ValueKind::Number,
            ValueKind::String,
            ValueKind::Function,
            ValueKind::Slash,
            ValueKind::Keyword,
        ]
    );
    assert_eq!(decl.value[2].data, "50%");
    assert_eq!(decl.value[3].data, "2px");
    let rgb = &decl.value[6];
    assert_eq!(rgb.data, "rgb");
    assert_eq!(rgb.args.iter().filter(|a| !a.is_separator()).count(), 3);
}

#[test]
fn test_important_with_space() {
    let decl = declaration("color: red ! IMPORTANT");
    assert!(decl.important);
    assert_eq!(decl.value, [Value::keyword("red")]);
}

#[test]
fn test_property_names_ignore_case_and_aliases() {
    assert_eq!(declaration("COLOR: red").property, PropertyId::Color);
    assert_eq!(declaration("word-wrap: break-word").property, PropertyId::OverflowWrap);
    assert_eq!(
        declaration("-webkit-text-stroke-width: 1px").property,
        PropertyId::TextStrokeWidth
    );
}

#[test]
fn test_error_recovery_keeps_later_rules() {
    let sheet = parse_stylesheet(
        "p { color: red; bogus-prop: 1; margin: ; } \
         a:::weird { color: blue } \
         @import url(x.css); \
         @unknown foo { p { color: green } } \
         em { font-style: italic }",
    );
    let rendered: Vec<String> = sheet.rules.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["p { color: red; }", "em { font-style: italic; }"]);
}

#[test]
fn test_media_rules() {
    let sheet = parse_stylesheet(
        "@media screen { .a { color: red } } \
         @media print, tv { .b { color: red } } \
         @media speech { .c { color: red } } \
         @media { .d { color: red } }",
    );
    let selectors: Vec<String> = sheet.rules.iter().map(|r| r.selectors[0].to_string()).collect();
    assert_eq!(selectors, [".a", ".b", ".d"]);
}

#[test]
fn test_page_and_font_face_rules() {
    let sheet = parse_stylesheet(
        "@page { margin: 1in } @font-face { font-family: X; src: url(x.ttf) } p { color: red }",
    );
    assert_eq!(sheet.len(), 3);
    assert!(sheet.rules[0].is_at_rule("page"));
    assert!(sheet.rules[1].is_at_rule("font-face"));
    assert!(!sheet.rules[2].is_at_rule("page"));
    assert_eq!(
        sheet.rules[1].declarations[1].value,
        [Value::uri("x.ttf")]
    );
}

#[test]
fn test_append_keeps_order() {
    let mut sheet = Stylesheet::parse("p { color: red }");
    sheet.append("p { color: blue }");
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.rules[1].declarations[0].value[0].data, "blue");
}

#[test]
fn test_selector_conditions() {
    let selector = parse_selector("input#q.wide[type=text]:first-child").unwrap();
    let Selector::Compound { name, conditions } = selector else {
        panic!("expected a compound selector");
    };
    assert_eq!(name.as_deref(), Some("input"));
    assert_eq!(
        conditions,
        [
            Condition::Id("q".into()),
            Condition::Class("wide".into()),
            Condition::AttributeEquals {
                name: "type".into(),
                value: "text".into(),
            },
            Condition::Pseudo {
                name: "first-child".into(),
                arg: None,
            },
        ]
    );
}

#[test]
fn test_unsupported_selectors() {
    assert!(parse_selector("h1 ~ p").is_none());
    assert!(parse_selector("a[href^=http]").is_none());
    assert!(parse_selector("a, b").is_none());
}

#[test]
fn test_stylesheet_display_reparses() {
    let css = "div > p.note, #x { margin: 1px 2px; font-family: \"A B\", serif }";
    let once = parse_stylesheet(css);
    let twice = parse_stylesheet(&once.to_string());
    assert_eq!(once, twice);
}
