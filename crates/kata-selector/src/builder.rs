//! Compound selector builder.

use std::fmt;

use kata_common::warning::warn_once;
use serde::Serialize;

use crate::Render;
use crate::category::Category;
use crate::error::SelectorError;
use crate::specificity::Specificity;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Accumulates the fragments of one compound selector. Fragments must be
/// added in [`Category`] order; element, id and pseudo-element may each be
/// added once. Values are stored already wrapped in their delimiters.
///
/// ```
/// use kata_selector::{Render, SelectorBuilder};
///
/// let selector = SelectorBuilder::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), kata_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    /// Highest category added so far.
    #[serde(skip)]
    highest: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder. It renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
            highest: None,
        }
    }

    /// Add a fragment in place.
    ///
    /// Both rules are checked before anything is stored, so a rejected
    /// fragment leaves the builder exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateFragment`] if `category` is element, id
    ///   or pseudo-element and a non-empty one is already present.
    /// - [`SelectorError::OrderViolation`] if a higher-ranked category has
    ///   already been added.
    pub fn push(&mut self, category: Category, value: &str) -> Result<(), SelectorError> {
        if self.single_slot(category).is_some_and(|slot| is_set(slot.as_deref())) {
            return Err(SelectorError::DuplicateFragment { category });
        }

        match self.highest {
            Some(after) if category < after => {
                return Err(SelectorError::OrderViolation { category, after });
            }
            _ => {}
        }

        if value.is_empty() {
            warn_once("Selector", &format!("empty value for {category} fragment"));
        }

        let formatted = category.format(value);
        match category {
            Category::Element => self.element = Some(formatted),
            Category::Id => self.id = Some(formatted),
            Category::Class => self.classes.push(formatted),
            Category::Attribute => self.attributes.push(formatted),
            Category::PseudoClass => self.pseudo_classes.push(formatted),
            Category::PseudoElement => self.pseudo_element = Some(formatted),
        }
        self.highest = Some(category);
        Ok(())
    }

    /// Add the element (type) selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Fails if an element is already set or any other fragment was added
    /// first. See [`SelectorBuilder::push`].
    pub fn element(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Element, value)
    }

    /// Add the id selector; `main` renders as `#main`.
    ///
    /// # Errors
    ///
    /// Fails if an id is already set or a class, attribute, pseudo-class or
    /// pseudo-element was added first.
    pub fn id(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Id, value)
    }

    /// Add a class selector; `btn` renders as `.btn`. Repeats are kept.
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element was added first.
    pub fn class(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Class, value)
    }

    /// Add an attribute selector; `href` renders as `[href]`. The content
    /// between the brackets is taken verbatim.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element was added first.
    pub fn attr(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::Attribute, value)
    }

    /// Add a pseudo-class; `focus` renders as `:focus`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element was added first.
    pub fn pseudo_class(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::PseudoClass, value)
    }

    /// Add the pseudo-element; `before` renders as `::before`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already set.
    pub fn pseudo_element(self, value: &str) -> Result<Self, SelectorError> {
        self.with(Category::PseudoElement, value)
    }

    /// Highest category added so far, or `None` for an empty builder.
    #[must_use]
    pub const fn highest_category(&self) -> Option<Category> {
        self.highest
    }

    /// True if no fragment has been added.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.highest.is_none()
    }

    fn with(mut self, category: Category, value: &str) -> Result<Self, SelectorError> {
        self.push(category, value)?;
        Ok(self)
    }

    const fn single_slot(&self, category: Category) -> Option<&Option<String>> {
        match category {
            Category::Element => Some(&self.element),
            Category::Id => Some(&self.id),
            Category::PseudoElement => Some(&self.pseudo_element),
            Category::Class | Category::Attribute | Category::PseudoClass => None,
        }
    }
}

/// A single-use slot counts as set only once it holds text; an empty
/// element leaves nothing to render.
fn is_set(slot: Option<&str>) -> bool {
    slot.is_some_and(|value| !value.is_empty())
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl Render for SelectorBuilder {
    fn render(&self) -> String {
        self.element
            .iter()
            .chain(&self.id)
            .chain(&self.classes)
            .chain(&self.attributes)
            .chain(&self.pseudo_classes)
            .chain(&self.pseudo_element)
            .map(String::as_str)
            .collect()
    }

    fn specificity(&self) -> Specificity {
        let element = u32::from(is_set(self.element.as_deref()));
        Specificity::new(
            u32::from(self.id.is_some()),
            count(self.classes.len() + self.attributes.len() + self.pseudo_classes.len()),
            element + u32::from(self.pseudo_element.is_some()),
        )
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
