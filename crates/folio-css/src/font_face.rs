//! [CSS Fonts Level 4 § 4.1](https://www.w3.org/TR/css-fonts-4/#font-face-rule)
//!
//! "The @font-face rule allows for linking to fonts that are automatically
//! fetched and activated when needed."

use folio_common::warning::warn_once;

use crate::cascade::MatchTable;
use crate::font::{FontFaceSource, FontSet};
use crate::options::StyleOptions;
use crate::property::PropertyId;
use crate::style::apply::{family_names, font_flags};
use crate::stylesheet::Stylesheet;
use crate::value::{Value, ValueKind};

/// Hand every `@font-face` rule in `sheet` to `fonts`.
///
/// Runs once per stylesheet: afterwards `sheet.loaded` is set and further
/// calls do nothing. Nothing is registered when `options.use_document_css`
/// is off. A rule without a family or `url()` source, or one the font set
/// rejects, is skipped with a warning.
///
/// Returns the number of faces registered.
///
/// ```
/// use folio_css::{MemoryFontSet, StyleOptions, Stylesheet, register_font_faces};
///
/// let mut sheet = Stylesheet::parse(
///     "@font-face { font-family: 'Gentium'; font-style: italic; src: url(gentium-i.ttf) }",
/// );
/// let mut fonts = MemoryFontSet::new();
/// assert_eq!(register_font_faces(&mut sheet, &mut fonts, &StyleOptions::default()), 1);
/// assert!(fonts.faces()[0].flags.italic);
/// assert_eq!(register_font_faces(&mut sheet, &mut fonts, &StyleOptions::default()), 0);
/// ```
pub fn register_font_faces<F: FontSet + ?Sized>(
    sheet: &mut Stylesheet,
    fonts: &mut F,
    options: &StyleOptions,
) -> usize {
    if sheet.loaded || !options.use_document_css {
        return 0;
    }
    sheet.loaded = true;

    let mut registered = 0;
    for rule in sheet.rules.iter().filter(|rule| rule.is_at_rule("font-face")) {
        // Descriptors cascade within the block: later ones win.
        let mut table = MatchTable::new(None);
        for declaration in &rule.declarations {
            table.add_declaration(declaration, 0);
        }

        let Some(face) = face_source(&table) else {
            warn_once("CSS", &format!("ignoring incomplete rule '{rule}'"));
            continue;
        };
        let family = face.family.clone();
        match fonts.add_font_face(face) {
            Ok(()) => registered += 1,
            Err(err) => {
                warn_once("CSS", &format!("cannot use font face '{family}': {err}"));
            }
        }
    }
    registered
}

fn face_source(table: &MatchTable<'_>) -> Option<FontFaceSource> {
    let first = |property| table.get(property).and_then(<[Value]>::first);

    let family = family_names(table.get(PropertyId::FontFamily)?)
        .into_iter()
        .next()?;
    // [§ 4.3](https://www.w3.org/TR/css-fonts-4/#src-desc)
    //
    // "Its value is a prioritized, comma-separated list of external
    // references or locally-installed font face names."
    let src = table
        .get(PropertyId::Src)?
        .iter()
        .find(|value| value.kind == ValueKind::Uri)?
        .data
        .clone();

    Some(FontFaceSource {
        family,
        flags: font_flags(
            first(PropertyId::FontWeight),
            first(PropertyId::FontStyle),
            first(PropertyId::FontVariant),
        ),
        src,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontFlags, MemoryFontSet};

    #[test]
    fn test_faces_are_registered_with_flags() {
        let mut sheet = Stylesheet::parse(
            "@font-face { font-family: Charis SIL; font-weight: bold; \
             src: local(Charis), url('charis-b.ttf') format('truetype') }
             p { font-family: Charis SIL }",
        );
        let mut fonts = MemoryFontSet::default();
        let count = register_font_faces(&mut sheet, &mut fonts, &StyleOptions::default());

        assert_eq!(count, 1);
        assert!(sheet.loaded);
        assert_eq!(
            fonts.faces()[0],
            FontFaceSource {
                family: "Charis SIL".into(),
                flags: FontFlags {
                    bold: true,
                    ..FontFlags::default()
                },
                src: "charis-b.ttf".into(),
            }
        );
    }

    #[test]
    fn test_incomplete_faces_are_skipped() {
        let mut sheet = Stylesheet::parse(
            "@font-face { font-family: NoSource }
             @font-face { src: url(orphan.ttf) }",
        );
        let mut fonts = MemoryFontSet::default();
        assert_eq!(register_font_faces(&mut sheet, &mut fonts, &StyleOptions::default()), 0);
        assert!(fonts.faces().is_empty());
    }

    #[test]
    fn test_document_css_can_be_disabled() {
        let mut sheet = Stylesheet::parse("@font-face { font-family: X; src: url(x.ttf) }");
        let options = StyleOptions {
            use_document_css: false,
            ..StyleOptions::default()
        };
        let mut fonts = MemoryFontSet::default();
        assert_eq!(register_font_faces(&mut sheet, &mut fonts, &options), 0);
        assert!(!sheet.loaded);
    }
}
