//! User-Agent Stylesheet
//!
//! [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)
//!
//! "User agents are expected to have a default style sheet that presents elements
//! of HTML documents in ways consistent with general user expectations."
//!
//! The rules below are placed ahead of document rules in the same
//! [`Stylesheet`], so a document rule overrides them on a specificity tie.

use std::sync::OnceLock;

use crate::stylesheet::Stylesheet;

/// [WHATWG HTML § 15.3 Rendering: Suggested default style sheet](https://html.spec.whatwg.org/multipage/rendering.html#the-css-user-agent-style-sheet-and-presentational-hints)
///
/// Default rules for the HTML elements found in reflowable documents.
/// Logical margins (`margin-block-start`) are written as their physical
/// equivalents for horizontal text.
const UA_CSS: &str = r#"
/* [§ 15.3.1 Hidden elements](https://html.spec.whatwg.org/multipage/rendering.html#hidden-elements) */
/* "The following elements must have their 'display' property set to 'none'." */
area, base, basefont, datalist, head, link, meta, noembed,
noframes, param, rp, script, style, template, title {
    display: none;
}

/* [§ 15.3.3 Flow content](https://html.spec.whatwg.org/multipage/rendering.html#flow-content-3) */
/* "The following elements must have their 'display' property set to 'block'." */
address, article, aside, blockquote, body, center, dd, details,
dialog, dir, div, dl, dt, fieldset, figcaption, figure, footer,
form, h1, h2, h3, h4, h5, h6, header, hgroup, hr, html, legend,
listing, main, menu, nav, ol, p, plaintext, pre, section,
summary, ul, xmp {
    display: block;
}

/* [§ 15.3.4 The page](https://html.spec.whatwg.org/multipage/rendering.html#the-page) */
/* "body { margin: 8px; }" */
body {
    margin: 8px;
}

/* [§ 15.3.5 Grouping content](https://html.spec.whatwg.org/multipage/rendering.html#grouping-content) */

/* "p, blockquote, figure, listing, plaintext, pre, xmp {
      margin-block-start: 1em; margin-block-end: 1em; }" */
p, blockquote, figure, listing, plaintext, pre, xmp {
    margin-top: 1em;
    margin-bottom: 1em;
}

/* "blockquote, figure { margin-inline-start: 40px; margin-inline-end: 40px; }" */
blockquote, figure {
    margin-left: 40px;
    margin-right: 40px;
}

/* "dd { margin-inline-start: 40px; }" */
dd {
    margin-left: 40px;
}

/* "listing, plaintext, pre, xmp { font-family: monospace; white-space: pre; }" */
listing, plaintext, pre, xmp {
    font-family: monospace;
    white-space: pre;
}

/* "hr { ... border-style: inset; border-width: 1px; margin-block: 0.5em; }" */
hr {
    border: 1px inset;
    margin-top: 0.5em;
    margin-bottom: 0.5em;
}

/* [§ 15.3.6 Sections and headings](https://html.spec.whatwg.org/multipage/rendering.html#sections-and-headings) */
h1, h2, h3, h4, h5, h6 {
    font-weight: bold;
    page-break-after: avoid;
}

h1 { font-size: 2em; margin-top: 0.67em; margin-bottom: 0.67em; }
h2 { font-size: 1.5em; margin-top: 0.83em; margin-bottom: 0.83em; }
h3 { font-size: 1.17em; margin-top: 1em; margin-bottom: 1em; }
h4 { margin-top: 1.33em; margin-bottom: 1.33em; }
h5 { font-size: 0.83em; margin-top: 1.67em; margin-bottom: 1.67em; }
h6 { font-size: 0.67em; margin-top: 2.33em; margin-bottom: 2.33em; }

/* [§ 15.3.7 Lists](https://html.spec.whatwg.org/multipage/rendering.html#lists) */
/* "li { display: list-item; }" */
li {
    display: list-item;
}

/* "ol, ul, menu { ... margin-block-start: 1em; margin-block-end: 1em; padding-inline-start: 40px; }" */
ol, ul, menu {
    margin-top: 1em;
    margin-bottom: 1em;
    padding-left: 40px;
}

/* "ul, menu { list-style-type: disc; }" */
ul, menu {
    list-style-type: disc;
}

/* "ol { list-style-type: decimal; }" */
ol {
    list-style-type: decimal;
}

/* Nested lists have no vertical margins. */
ol ol, ol ul, ul ol, ul ul {
    margin-top: 0;
    margin-bottom: 0;
}

/* [§ 15.3.8 Text-level semantics](https://html.spec.whatwg.org/multipage/rendering.html#text-level-semantics) */

/* "b, strong { font-weight: bolder; }" */
b, strong {
    font-weight: bold;
}

/* "i, cite, em, var, dfn { font-style: italic; }" */
em, i, cite, dfn, var {
    font-style: italic;
}

/* "code, kbd, samp, tt { font-family: monospace; }" */
code, kbd, samp, tt {
    font-family: monospace;
}

/* "big { font-size: larger; } small { font-size: smaller; }" */
big { font-size: larger; }
small { font-size: smaller; }

/* "sub { vertical-align: sub; } sup { vertical-align: super; }" */
sub { vertical-align: sub; font-size: smaller; }
sup { vertical-align: super; font-size: smaller; }

/* "u, ins { text-decoration: underline; }" */
u, ins {
    text-decoration: underline;
}

/* "s, strike, del { text-decoration: line-through; }" */
s, strike, del {
    text-decoration: line-through;
}

/* "center { text-align: center; }" */
center {
    text-align: center;
}

/* "nobr { white-space: nowrap; }" */
nobr {
    white-space: nowrap;
}

/* [§ 15.3.10 Tables](https://html.spec.whatwg.org/multipage/rendering.html#tables-2) */
table { display: table; border-spacing: 2px; }
caption { display: block; text-align: center; }
colgroup { display: table-column-group; }
col { display: table-column; }
thead { display: table-header-group; vertical-align: middle; }
tbody { display: table-row-group; vertical-align: middle; }
tfoot { display: table-footer-group; vertical-align: middle; }
tr { display: table-row; }
td, th { display: table-cell; padding: 1px; }
th { font-weight: bold; text-align: center; }

/* [§ 15.3.9 Bidirectional text](https://html.spec.whatwg.org/multipage/rendering.html#bidi-rendering) */
[dir=rtl] { direction: rtl; }
[dir=ltr] { direction: ltr; }
"#;

/// Return the parsed UA stylesheet, parsing only once.
///
/// [CSS Cascading § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
///
/// "Each style rule has a cascade origin... User-Agent origin rules have
/// the lowest priority."
///
/// The stylesheet is parsed once and cached via `OnceLock`.
#[must_use]
pub fn user_agent_stylesheet() -> &'static Stylesheet {
    static STYLESHEET: OnceLock<Stylesheet> = OnceLock::new();
    STYLESHEET.get_or_init(|| Stylesheet::parse(UA_CSS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_parses() {
        let sheet = user_agent_stylesheet();
        assert!(sheet.len() > 40);
        for rule in &sheet.rules {
            assert!(!rule.selectors.is_empty(), "{rule}");
            assert!(!rule.declarations.is_empty(), "{rule}");
        }
    }

    #[test]
    fn test_is_parsed_once() {
        assert!(std::ptr::eq(user_agent_stylesheet(), user_agent_stylesheet()));
    }
}
