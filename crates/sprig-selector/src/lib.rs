//! Order-checked construction of CSS selectors.
//!
//! # Scope
//!
//! This crate builds selector strings from discrete calls while enforcing
//! the ordering and uniqueness rules of
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/):
//!
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Fragments appear in the order type, id, class*, attribute*,
//!     pseudo-class*, pseudo-element
//!   - Type, id and pseudo-element at most once each
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant (` `), child (`>`), next-sibling (`+`) and
//!     subsequent-sibling (`~`) combinators
//!   - Arbitrary nesting of combined selectors
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Matching against a document tree
//! - Specificity
//! - Selector lists (`a, b`)
//!
//! # Example
//!
//! ```
//! use sprig_selector::{combine, element, id};
//!
//! # fn main() -> Result<(), sprig_selector::SelectorError> {
//! let editable = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(editable.stringify(), "#main.container.editable");
//!
//! let row = combine(element("thead")?, '~', element("tr")?.pseudo_class("hover")?)?;
//! assert_eq!(row.stringify(), "thead ~ tr:hover");
//! # Ok(())
//! # }
//! ```

/// The stateless selector factory.
pub mod builder;
/// Errors raised by out-of-order, duplicate, or unrecognized input.
pub mod error;
/// Compound and complex selector values.
pub mod selector;

pub use builder::SelectorBuilder;
pub use error::SelectorError;
pub use selector::{Combinator, ComplexSelector, CompoundSelector, Selector, SimpleSelector, Stage};

/// Start a chain with a type selector. See [`SelectorBuilder::element`].
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn element(tag: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    SelectorBuilder.element(tag)
}

/// Start a chain with an ID selector. See [`SelectorBuilder::id`].
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn id(value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    SelectorBuilder.id(value)
}

/// Start a chain with a class selector. See [`SelectorBuilder::class`].
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn class(value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    SelectorBuilder.class(value)
}

/// Start a chain with an attribute selector. See [`SelectorBuilder::attr`].
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn attr(value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    SelectorBuilder.attr(value)
}

/// Start a chain with a pseudo-class. See [`SelectorBuilder::pseudo_class`].
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn pseudo_class(value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    SelectorBuilder.pseudo_class(value)
}

/// Start a chain with a pseudo-element. See [`SelectorBuilder::pseudo_element`].
///
/// # Errors
///
/// Never fails on a fresh chain.
pub fn pseudo_element(value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
    SelectorBuilder.pseudo_element(value)
}

/// Join two selectors with a combinator. See [`SelectorBuilder::combine`].
///
/// # Errors
///
/// [`SelectorError::InvalidCombinator`] if the token is not one of
/// `' '`, `'+'`, `'~'`, `'>'`.
pub fn combine<C>(
    left: impl Into<Selector>,
    combinator: C,
    right: impl Into<Selector>,
) -> Result<Selector, SelectorError>
where
    C: TryInto<Combinator>,
    SelectorError: From<C::Error>,
{
    SelectorBuilder.combine(left, combinator, right)
}
