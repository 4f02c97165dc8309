//! Fragment categories and their mandatory order.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "If it contains a type selector or universal selector, that type selector
/// or universal selector must come first in the sequence."
///
/// The kind of a simple selector inside a compound selector. Variants are
/// declared in rank order, so the derived `Ord` is the order fragments must
/// be added in: element (1), id (2), class (3), attribute (4),
/// pseudo-class (5), pseudo-element (6).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[repr(u8)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `a`, `table`
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass = 5,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement = 6,
}

impl Category {
    /// Fixed ordering position, 1 through 6.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether a compound selector may hold more than one fragment of this
    /// category. CSS permits repeated classes, attributes and pseudo-classes.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }

    /// Wrap a raw value in this category's delimiters.
    ///
    /// The value itself is not validated or escaped.
    #[must_use]
    pub fn format(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}
