//! Integration tests for combining selectors.

use kata_common::warning::has_warned;
use kata_selector::{
    Combinator, Render, SelectorError, Specificity, class, combine, element, id,
};
use strum::IntoEnumIterator;

#[test]
fn test_combine_adjacent_sibling() -> Result<(), SelectorError> {
    let left = element("div")?.id("main")?;
    let right = element("table")?.id("data")?;
    let combined = combine(&left, "+", &right);
    assert_eq!(combined.render(), "div#main + table#data");
    Ok(())
}

#[test]
fn test_combine_is_left_space_symbol_space_right() -> Result<(), SelectorError> {
    let left = class("a")?;
    let right = class("b")?;
    for symbol in ["+", ">", "~", "||"] {
        assert_eq!(
            combine(&left, symbol, &right).render(),
            format!("{} {symbol} {}", left.render(), right.render())
        );
    }
    Ok(())
}

#[test]
fn test_descendant_space_gives_wide_gap() -> Result<(), SelectorError> {
    let combined = combine(&element("ul")?, " ", &element("li")?);
    assert_eq!(combined.render(), "ul   li");

    let combined = combine(&element("ul")?, &Combinator::Descendant, &element("li")?);
    assert_eq!(combined.render(), "ul   li");
    Ok(())
}

#[test]
fn test_combinator_enum_as_symbol() -> Result<(), SelectorError> {
    let combined = combine(&element("ul")?, &Combinator::Child, &element("li")?);
    assert_eq!(combined.render(), "ul > li");

    let combined = combine(&element("h1")?, &Combinator::SubsequentSibling, &element("p")?);
    assert_eq!(combined.render(), "h1 ~ p");
    Ok(())
}

#[test]
fn test_combined_can_be_combined_again() -> Result<(), SelectorError> {
    let inner = combine(&element("nav")?, ">", &element("ul")?);
    let outer = combine(&inner, " ", &element("a")?.class("active")?);
    assert_eq!(outer.render(), "nav > ul   a.active");

    let right_nested = combine(&id("app")?, "~", &inner);
    assert_eq!(right_nested.render(), "#app ~ nav > ul");
    Ok(())
}

#[test]
fn test_empty_operands() {
    let empty = kata_selector::SelectorBuilder::new();
    assert_eq!(combine(&empty, ">", &empty).render(), " > ");
}

#[test]
fn test_combined_display_matches_render() -> Result<(), SelectorError> {
    let combined = combine(&element("a")?, "+", &element("b")?);
    assert_eq!(combined.to_string(), combined.render());
    Ok(())
}

#[test]
fn test_combined_specificity_is_the_sum() -> Result<(), SelectorError> {
    let left = element("div")?.id("main")?;
    let right = element("a")?.class("x")?.pseudo_class("hover")?;
    let combined = combine(&left, ">", &right);
    assert_eq!(combined.specificity(), Specificity(1, 2, 2));
    Ok(())
}

#[test]
fn test_non_standard_symbol_is_accepted_and_warned() -> Result<(), SelectorError> {
    let combined = combine(&element("a")?, "%%", &element("b")?);
    assert_eq!(combined.render(), "a %% b");
    assert!(has_warned("Selector", "non-standard combinator \"%%\""));
    Ok(())
}

#[test]
fn test_standard_symbol_is_not_warned() -> Result<(), SelectorError> {
    let _ = combine(&element("a")?, "~", &element("b")?);
    assert!(!has_warned("Selector", "non-standard combinator \"~\""));
    Ok(())
}

#[test]
fn test_symbol_lookup_round_trips() {
    for combinator in Combinator::iter() {
        assert_eq!(Combinator::from_symbol(combinator.symbol()), Some(combinator));
        assert_eq!(combinator.to_string(), combinator.symbol());
    }
    assert_eq!(Combinator::from_symbol(">>"), None);
}
