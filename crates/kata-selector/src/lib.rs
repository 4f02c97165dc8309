//! CSS selector string builder for the kata workspace.
//!
//! # Scope
//!
//! This crate builds selector text; it never parses or matches selectors.
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element fragments
//!   - Fragment order enforced when each fragment is added
//!   - At most one element, id and pseudo-element
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Two selectors joined by any combinator symbol
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Example
//!
//! ```
//! use kata_selector::{Render, id};
//!
//! let selector = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(selector.render(), "#main.container.editable");
//! # Ok::<(), kata_selector::SelectorError>(())
//! ```

/// The compound selector builder.
pub mod builder;
/// Fragment categories and their rank.
pub mod category;
/// Combinators and combined selectors.
pub mod combinator;
/// Fragment rejection errors.
pub mod error;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

pub use builder::SelectorBuilder;
pub use category::Category;
pub use combinator::{Combinator, Combined, combine};
pub use error::SelectorError;
pub use specificity::Specificity;

/// Anything that produces final selector text.
pub trait Render {
    /// The selector text.
    fn render(&self) -> String;

    /// Specificity of the rendered selector.
    fn specificity(&self) -> Specificity;
}

/// Start a selector with an element (type) fragment.
///
/// # Errors
///
/// Never fails on a fresh builder; returns `Result` so every entry point
/// chains the same way.
pub fn element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().element(value)
}

/// Start a selector with an id fragment.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn id(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().id(value)
}

/// Start a selector with a class fragment.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().class(value)
}

/// Start a selector with an attribute fragment.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn attr(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().attr(value)
}

/// Start a selector with a pseudo-class fragment.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn pseudo_class(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a selector with a pseudo-element fragment.
///
/// # Errors
///
/// Never fails on a fresh builder.
pub fn pseudo_element(value: &str) -> Result<SelectorBuilder, SelectorError> {
    SelectorBuilder::new().pseudo_element(value)
}
