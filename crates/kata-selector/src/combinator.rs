//! Joining compound selectors into complex selectors.

use std::fmt;

use kata_common::warning::warn_once;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::Render;
use crate::specificity::Specificity;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// [`combine`] accepts any symbol string; this enum names the four that CSS
/// defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The token as written between two compound selectors.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Look up the combinator written as `symbol`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.symbol()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two rendered selectors joined by a combinator. Immutable; it takes part
/// in no ordering or uniqueness rules and can itself be combined again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combined {
    text: String,
    specificity: Specificity,
}

impl Render for Combined {
    fn render(&self) -> String {
        self.text.clone()
    }

    fn specificity(&self) -> Specificity {
        self.specificity
    }
}

impl fmt::Display for Combined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join `left` and `right` with `combinator`.
///
/// Renders as `left + " " + combinator + " " + right`. The single space of
/// padding is added whatever the symbol is, so the descendant combinator
/// (itself a space) produces a three-space gap. Symbols other than the four
/// CSS combinators are accepted and reported once through the warning
/// channel.
///
/// ```
/// use kata_selector::{Render, combine, element};
///
/// let left = element("div")?.id("main")?;
/// let right = element("table")?.id("data")?;
/// assert_eq!(combine(&left, "+", &right).render(), "div#main + table#data");
/// # Ok::<(), kata_selector::SelectorError>(())
/// ```
pub fn combine<L, C, R>(left: &L, combinator: &C, right: &R) -> Combined
where
    L: Render + ?Sized,
    C: AsRef<str> + ?Sized,
    R: Render + ?Sized,
{
    let symbol = combinator.as_ref();
    if Combinator::from_symbol(symbol).is_none() {
        warn_once("Selector", &format!("non-standard combinator {symbol:?}"));
    }

    Combined {
        text: format!("{} {symbol} {}", left.render(), right.render()),
        specificity: left.specificity() + right.specificity(),
    }
}
