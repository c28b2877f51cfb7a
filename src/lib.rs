//! # cssbuild - CSS selector builder
//!
//! A fluent, order-checked builder for CSS3 selector strings, plus the
//! inverse parser. Selectors are assembled fragment by fragment, validated
//! against the selector grammar as they grow, and rendered to a string on
//! demand.
//!
//! ## Quick start
//!
//! ```rust
//! use cssbuild::{combine, element, Combinator};
//!
//! let mut link = element("a");
//! link.attr("href$=\".png\"")?.pseudo_class("focus")?;
//! assert_eq!(link.render(), "a[href$=\".png\"]:focus");
//!
//! let list = combine(&element("ul"), Combinator::Child, &element("li"));
//! assert_eq!(list.render(), "ul > li");
//! # Ok::<(), cssbuild::SelectorError>(())
//! ```
//!
//! ## Fragment ordering
//!
//! Within one selector, fragments must appear in the fixed CSS order:
//!
//! 1. Type: `div`
//! 2. ID: `#main`
//! 3. Classes: `.container.draggable`
//! 4. Attributes: `[href$=".png"]`
//! 5. Pseudo-classes: `:hover:focus`
//! 6. Pseudo-element: `::before`
//!
//! Adding an earlier fragment after a later one fails with
//! [`SelectorError::OutOfOrder`]; setting the type, ID or pseudo-element
//! twice fails with [`SelectorError::Duplicate`]. A failed call leaves the
//! selector's accumulated fragments intact.
//!
//! ## Combinators
//!
//! [`combine`] joins two selectors with a [`Combinator`] (descendant, child
//! `>`, adjacent sibling `+`, general sibling `~`) and may be nested to any
//! depth. Combining is terminal for a given selector value: no fragment may
//! follow it.
//!
//! Combinator tokens render with a single space on each side. Because the
//! descendant token is itself a space, a descendant combination renders
//! three consecutive spaces (`"tr   td"`).
//!
//! ## Modules
//!
//! - [`selector`]: the [`Selector`] type, fluent builder and rendering
//! - [`parser`]: parsing selector text back into [`Selector`] values
//! - [`error`]: error types for building and parsing failures

pub mod error;
pub mod parser;
pub mod selector;

pub use error::SelectorError;
pub use parser::parse_selector;
pub use selector::{
    Category, Combinator, Selector, Specificity, attr, class, combine, element, id, pseudo_class,
    pseudo_element,
};
