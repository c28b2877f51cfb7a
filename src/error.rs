//! Error types for selector construction and parsing.
//!
//! Builder errors are deterministic programmer-error conditions: retrying the
//! same call on the same selector fails identically, and a failed call leaves
//! the selector's already-accumulated fragments intact.

use thiserror::Error;

use crate::selector::Category;

/// Errors that can occur while building or parsing a selector.
///
/// # Examples
///
/// ```rust
/// use cssbuild::{element, Category, SelectorError};
///
/// let mut selector = element("input");
/// selector.pseudo_class("focus").unwrap();
///
/// // Classes come before pseudo-classes in the selector grammar.
/// let err = selector.class("wide").unwrap_err();
/// assert_eq!(
///     err,
///     SelectorError::OutOfOrder {
///         attempted: Category::Class,
///         reached: Category::PseudoClass,
///     }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A fragment or combine call was attempted out of the fixed category
    /// order (element, id, class, attribute, pseudo-class, pseudo-element,
    /// combinator).
    ///
    /// Once a later category has received a fragment, earlier categories are
    /// rejected. A combined selector rejects everything.
    #[error("{attempted} fragment cannot follow {reached}")]
    OutOfOrder {
        /// Category of the rejected call.
        attempted: Category,
        /// Highest category the selector had already reached.
        reached: Category,
    },

    /// `element`, `id` or `pseudo-element` was set a second time.
    #[error("{0} may only be set once per selector")]
    Duplicate(Category),

    /// Invalid selector syntax was encountered during parsing.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("selector syntax error: {0}")]
    InvalidSyntax(String),
}
