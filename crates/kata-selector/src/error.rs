//! Errors raised while adding fragments to a selector.

use thiserror::Error;

use crate::category::Category;

/// Why a fragment was rejected.
///
/// Both kinds are raised eagerly by the fragment operations; rendering
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A second element, id or pseudo-element was added to the same
    /// compound selector.
    #[error("a compound selector can only contain one {category} selector")]
    DuplicateFragment {
        /// The category that was already present.
        category: Category,
    },

    /// A fragment was added after a fragment of a higher-ranked category.
    #[error("{category} cannot follow {after} in a compound selector")]
    OrderViolation {
        /// The category that was being added.
        category: Category,
        /// The highest category already present.
        after: Category,
    },
}
