//! Errors raised while building a selector.

use std::convert::Infallible;

use thiserror::Error;

use crate::selector::Stage;

/// A usage mistake detected while appending to or combining selectors.
///
/// Every variant is a caller error, never a transient condition: the chain
/// that produced it has already been discarded when the error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A fragment was appended after a fragment that must follow it, e.g.
    /// `.class` after `[attr]`.
    #[error("cannot add {attempted} selector after {after} selector")]
    Order {
        /// The stage of the rejected fragment.
        attempted: Stage,
        /// The furthest stage already reached by the compound selector.
        after: Stage,
    },

    /// A type, id, or pseudo-element selector was added twice to the same
    /// compound selector.
    #[error("a compound selector may contain only one {0} selector")]
    Duplicate(Stage),

    /// `combine` received a token outside of `' '`, `'+'`, `'~'` and `'>'`.
    #[error("unrecognized combinator {0:?} (expected one of ' ', '+', '~', '>')")]
    InvalidCombinator(String),
}

impl From<Infallible> for SelectorError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
