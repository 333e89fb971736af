//! CSS Display property
//!
//! [§ 2 Box Layout Modes: the display property](https://www.w3.org/TR/css-display-3/#the-display-properties)

use serde::Serialize;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::cascade::{MatchTable, value_for};
use crate::property::PropertyId;
use crate::value::ValueKind;

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// The box a layout engine generates for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, StrumDisplay, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Display {
    /// "The element and its descendants generate no boxes or text runs."
    None,
    /// "The element generates a block-level box."
    Block,
    /// "The element generates an inline-level box."
    #[default]
    Inline,
    /// "The element generates a principal block box and a marker box."
    ListItem,
    /// "This value causes an element to generate an inline-level block container."
    InlineBlock,
    /// [§ 17.2](https://www.w3.org/TR/CSS2/tables.html#table-display) "Specifies that an
    /// element defines a block-level table."
    Table,
    /// "Specifies that an element is a row of cells."
    TableRow,
    /// "Specifies that an element represents a table cell."
    TableCell,
    /// "Specifies that an element groups one or more rows."
    ///
    /// `table-header-group` and `table-footer-group` also map here.
    TableRowGroup,
    /// "Specifies that an element describes a column of cells."
    TableColumn,
    /// "Specifies that an element groups one or more columns."
    TableColumnGroup,
}

impl Display {
    /// Map a `display` keyword, or `None` for one this engine does not lay out.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let lower = keyword.to_ascii_lowercase();
        Some(match lower.as_str() {
            "none" => Self::None,
            "block" => Self::Block,
            "inline" => Self::Inline,
            "list-item" => Self::ListItem,
            "inline-block" => Self::InlineBlock,
            "table" => Self::Table,
            "table-row" => Self::TableRow,
            "table-cell" => Self::TableCell,
            // [§ 17.2] header and footer groups are row groups
            // repeated at page breaks; this engine lays them out in place.
            "table-row-group" | "table-header-group" | "table-footer-group" => Self::TableRowGroup,
            "table-column" => Self::TableColumn,
            "table-column-group" => Self::TableColumnGroup,
            _ => return None,
        })
    }
}

/// [§ 2 The display property](https://www.w3.org/TR/css-display-3/#the-display-properties)
///
/// Resolve the `display` of the element `table` was built for.
///
/// `display` is not inherited. A missing or unsupported value yields the
/// initial value `inline`.
#[must_use]
pub fn display_of(table: &MatchTable<'_>) -> Display {
    let Some(value) = value_for(table, PropertyId::Display).and_then(<[_]>::first) else {
        return Display::Inline;
    };
    if value.kind != ValueKind::Keyword {
        return Display::Inline;
    }
    Display::from_keyword(&value.data).unwrap_or(Display::Inline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_header_and_footer_groups_are_row_groups() {
        assert_eq!(Display::from_keyword("table-header-group"), Some(Display::TableRowGroup));
        assert_eq!(Display::from_keyword("TABLE-FOOTER-GROUP"), Some(Display::TableRowGroup));
        assert_eq!(Display::from_keyword("flex"), None);
    }

    #[test]
    fn test_display_defaults_to_inline() {
        let values = [Value::keyword("grid")];
        let mut table = MatchTable::new(None);
        assert_eq!(display_of(&table), Display::Inline);
        table.add_property(PropertyId::Display, &values, 1);
        assert_eq!(display_of(&table), Display::Inline);
    }

    #[test]
    fn test_display_is_not_inherited() {
        let block = [Value::keyword("block")];
        let mut parent = MatchTable::new(None);
        parent.add_property(PropertyId::Display, &block, 1);
        let child = MatchTable::new(Some(&parent));
        assert_eq!(display_of(&parent), Display::Block);
        assert_eq!(display_of(&child), Display::Inline);
    }

    #[test]
    fn test_display_names_round_trip() {
        use strum::IntoEnumIterator;
        for display in Display::iter() {
            assert_eq!(Display::from_keyword(&display.to_string()), Some(display));
        }
    }
}
