//! The selector factory.
//!
//! [`SelectorBuilder`] holds no state of its own: every entry point starts a
//! fresh [`CompoundSelector`] value and every chain step consumes and
//! returns that value. One builder can therefore be shared freely (even
//! across threads) and each chain behaves as if it came from a brand-new
//! builder.

use crate::error::SelectorError;
use crate::selector::{Combinator, CompoundSelector, Selector};

/// Entry point for building selectors.
///
/// ```
/// use sprig_selector::SelectorBuilder;
///
/// # fn main() -> Result<(), sprig_selector::SelectorError> {
/// let sb = SelectorBuilder::new();
/// let main = sb.element("div")?.id("main")?;
/// let data = sb.element("table")?.id("data")?;
/// assert_eq!(sb.combine(main, '+', data)?.stringify(), "div#main + table#data");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

#[allow(clippy::unused_self)]
impl SelectorBuilder {
    /// Create a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Start a chain with a type selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh chain; the `Result` keeps chains uniform.
    pub fn element(self, tag: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().element(tag)
    }

    /// Start a chain with an ID selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh chain; the `Result` keeps chains uniform.
    pub fn id(self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().id(value)
    }

    /// Start a chain with a class selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh chain; the `Result` keeps chains uniform.
    pub fn class(self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().class(value)
    }

    /// Start a chain with an attribute selector.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh chain; the `Result` keeps chains uniform.
    pub fn attr(self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().attr(value)
    }

    /// Start a chain with a pseudo-class.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh chain; the `Result` keeps chains uniform.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().pseudo_class(value)
    }

    /// Start a chain with a pseudo-element.
    ///
    /// # Errors
    ///
    /// Never fails on a fresh chain; the `Result` keeps chains uniform.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<CompoundSelector, SelectorError> {
        CompoundSelector::new().pseudo_element(value)
    }

    /// Join two selectors with a combinator.
    ///
    /// `combinator` is a [`Combinator`] or a token (`' '`, `'+'`, `'~'`,
    /// `'>'`, as `char` or `&str`). Either side may be the result of an
    /// earlier `combine`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidCombinator`] for any other token.
    pub fn combine<C>(
        self,
        left: impl Into<Selector>,
        combinator: C,
        right: impl Into<Selector>,
    ) -> Result<Selector, SelectorError>
    where
        C: TryInto<Combinator>,
        SelectorError: From<C::Error>,
    {
        left.into().then(combinator, right)
    }
}
