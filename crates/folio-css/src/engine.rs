//! Document styling.
//!
//! [CSS Cascading and Inheritance Level 4](https://www.w3.org/TR/css-cascade-4/)
//!
//! [`StyleEngine::style_tree`] walks a [`DomTree`] from the root element
//! down, building each element's match table on top of its parent's so
//! that inheritance can read ancestor values, and interns the computed
//! records in a [`StyleSet`].

use std::collections::HashMap;

use serde::Serialize;

use folio_common::warning::{clear_warnings, warn_once};
use folio_dom::{DomTree, ElementData, NodeId};

use crate::cascade::{MatchTable, match_css, match_page};
use crate::font::FontSet;
use crate::font_face::register_font_faces;
use crate::options::StyleOptions;
use crate::parser::parse_declarations;
use crate::style::{Display, StyleRecord, apply_style, display_of};
use crate::style_set::{StyleId, StyleSet};
use crate::stylesheet::{Declaration, Stylesheet};
use crate::ua_stylesheet::user_agent_stylesheet;

/// Style and box type of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyledNode {
    /// The element's interned computed style.
    pub style: StyleId,
    /// The element's `display`.
    pub display: Display,
}

/// Computed styles for the elements of a document.
///
/// Only elements have entries. Text nodes have none; their text is drawn
/// with the style of the parent element. Descendants of a `display: none`
/// element are not styled either.
#[derive(Debug, Default)]
pub struct StyledTree {
    /// The distinct style records of the document.
    pub styles: StyleSet,
    /// Per-element results.
    pub nodes: HashMap<NodeId, StyledNode>,
}

impl StyledTree {
    /// The styling result for `node`.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&StyledNode> {
        self.nodes.get(&node)
    }

    /// The computed style of `node`.
    #[must_use]
    pub fn style(&self, node: NodeId) -> Option<&StyleRecord> {
        self.get(node).and_then(|styled| self.styles.get(styled.style))
    }

    /// The `display` of `node`.
    #[must_use]
    pub fn display(&self, node: NodeId) -> Option<Display> {
        self.get(node).map(|styled| styled.display)
    }
}

/// Styles documents according to a set of [`StyleOptions`].
///
/// # Example
/// ```
/// use folio_css::{Color, MemoryFontSet, StyleEngine, StyleOptions};
/// use folio_dom::DomTree;
///
/// let mut tree = DomTree::new();
/// let body = tree.append_element(tree.root(), "body", &[]);
/// let p = tree.append_element(body, "p", &[("style", "color: red")]);
///
/// let engine = StyleEngine::new(StyleOptions::default());
/// let mut sheet = engine.stylesheet(&["body { color: blue }"]);
/// let styled = engine.style_tree(&tree, &mut sheet, &mut MemoryFontSet::new());
///
/// assert_eq!(styled.style(body).unwrap().color, Color::rgba(0, 0, 255, 255));
/// assert_eq!(styled.style(p).unwrap().color, Color::rgba(255, 0, 0, 255));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleEngine {
    options: StyleOptions,
}

impl StyleEngine {
    /// Create an engine.
    #[must_use]
    pub const fn new(options: StyleOptions) -> Self {
        Self { options }
    }

    /// The engine's options.
    #[must_use]
    pub const fn options(&self) -> &StyleOptions {
        &self.options
    }

    /// [§ 6.1 Cascade Sorting Order](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
    ///
    /// Build the stylesheet for a document: the user-agent rules followed by
    /// each of `document_css` in order. The document's own sheets are left
    /// out when `use_document_css` is off.
    #[must_use]
    pub fn stylesheet(&self, document_css: &[&str]) -> Stylesheet {
        let mut sheet = user_agent_stylesheet().clone();
        if self.options.use_document_css {
            for text in document_css {
                sheet.append(text);
            }
        }
        sheet
    }

    /// Compute the style of every element of `tree`.
    ///
    /// Registers the sheet's `@font-face` rules with `fonts` first (once per
    /// sheet), then styles elements in document order. Warnings from a
    /// previous document are forgotten so that each document reports its
    /// own problems.
    pub fn style_tree<F: FontSet + ?Sized>(
        &self,
        tree: &DomTree,
        sheet: &mut Stylesheet,
        fonts: &mut F,
    ) -> StyledTree {
        clear_warnings();
        let _ = register_font_faces(sheet, fonts, &self.options);

        let mut styled = StyledTree::default();
        for child in tree.children(tree.root()) {
            self.style_node(tree, child, sheet, None, fonts, &mut styled);
        }
        styled
    }

    /// [CSS Paged Media § 3](https://www.w3.org/TR/css-page-3/#at-page-rule)
    ///
    /// Compute the page box style from the sheet's `@page` rules. Margins
    /// are the page margins.
    pub fn page_style<F: FontSet + ?Sized>(&self, sheet: &Stylesheet, fonts: &mut F) -> StyleRecord {
        apply_style(fonts, &self.options, &match_page(sheet))
    }

    fn style_node<F: FontSet + ?Sized>(
        &self,
        tree: &DomTree,
        id: NodeId,
        sheet: &Stylesheet,
        up: Option<&MatchTable<'_>>,
        fonts: &mut F,
        styled: &mut StyledTree,
    ) {
        let Some(element) = tree.as_element(id) else {
            return;
        };

        let inline = self.inline_declarations(element);
        let table = match_css(up, sheet, inline.as_deref(), tree.node(id));

        let display = display_of(&table);
        let style = styled.styles.enlist(apply_style(fonts, &self.options, &table));
        let _ = styled.nodes.insert(id, StyledNode { style, display });

        // [§ 2.6](https://www.w3.org/TR/css-display-3/#valdef-display-none)
        // "The element and its descendants generate no boxes or text runs."
        if display == Display::None {
            return;
        }
        for child in tree.children(id) {
            self.style_node(tree, child, sheet, Some(&table), fonts, styled);
        }
    }

    /// [§ 3 The style attribute](https://www.w3.org/TR/css-style-attr/#syntax)
    ///
    /// "The value of the style attribute must match the syntax of the
    /// contents of a CSS declaration block."
    fn inline_declarations(&self, element: &ElementData) -> Option<Vec<Declaration>> {
        if !self.options.use_document_css {
            return None;
        }
        let text = element.attrs.get("style")?;
        let declarations = parse_declarations(text);
        if declarations.is_empty() && !text.trim().is_empty() {
            warn_once("CSS", &format!("ignoring style attribute '{text}'"));
        }
        Some(declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MemoryFontSet;
    use crate::value::{Color, Number};

    fn style(css: &str, build: impl FnOnce(&mut DomTree) -> NodeId) -> StyleRecord {
        let mut tree = DomTree::new();
        let node = build(&mut tree);
        let engine = StyleEngine::default();
        let mut sheet = Stylesheet::parse(css);
        let styled = engine.style_tree(&tree, &mut sheet, &mut MemoryFontSet::new());
        *styled.style(node).unwrap()
    }

    #[test]
    fn test_children_of_hidden_elements_are_skipped() {
        let mut tree = DomTree::new();
        let div = tree.append_element(tree.root(), "div", &[]);
        let script = tree.append_element(div, "script", &[]);
        let inner = tree.append_element(script, "span", &[]);
        let text = tree.append_text(div, "hello");

        let engine = StyleEngine::default();
        let mut sheet = engine.stylesheet(&[]);
        let styled = engine.style_tree(&tree, &mut sheet, &mut MemoryFontSet::new());

        assert_eq!(styled.display(div), Some(Display::Block));
        assert_eq!(styled.display(script), Some(Display::None));
        assert_eq!(styled.get(inner), None);
        assert_eq!(styled.get(text), None);
    }

    #[test]
    fn test_identical_styles_are_shared() {
        let mut tree = DomTree::new();
        let ul = tree.append_element(tree.root(), "ul", &[]);
        let items: Vec<_> = (0..5).map(|_| tree.append_element(ul, "li", &[])).collect();

        let engine = StyleEngine::default();
        let mut sheet = engine.stylesheet(&[]);
        let styled = engine.style_tree(&tree, &mut sheet, &mut MemoryFontSet::new());

        let first = styled.get(items[0]).unwrap().style;
        assert!(items.iter().all(|&li| styled.get(li).unwrap().style == first));
        assert_eq!(styled.styles.len(), 2);
    }

    #[test]
    fn test_inline_style_is_ignored_without_document_css() {
        let mut tree = DomTree::new();
        let p = tree.append_element(tree.root(), "p", &[("style", "color: red")]);

        let engine = StyleEngine::new(StyleOptions {
            use_document_css: false,
            ..StyleOptions::default()
        });
        let mut sheet = engine.stylesheet(&["p { color: blue }"]);
        let styled = engine.style_tree(&tree, &mut sheet, &mut MemoryFontSet::new());
        assert_eq!(styled.style(p).unwrap().color, Color::BLACK);
    }

    #[test]
    fn test_inherited_values_reach_grandchildren() {
        let style = style("div { text-indent: 2em; margin-left: 3pt }", |tree| {
            let div = tree.append_element(tree.root(), "div", &[]);
            let p = tree.append_element(div, "p", &[]);
            tree.append_element(p, "span", &[])
        });
        assert_eq!(style.text_indent, Number::scale(2.0));
        assert_eq!(style.margin[crate::style::LEFT], Number::ZERO);
    }

    #[test]
    fn test_page_style_reads_page_rules() {
        let engine = StyleEngine::default();
        let sheet = Stylesheet::parse("@page { margin: 1in }");
        let page = engine.page_style(&sheet, &mut MemoryFontSet::new());
        assert_eq!(page.margin, [Number::points(72.0); 4]);
    }
}
