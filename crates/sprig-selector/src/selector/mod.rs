//! Selector values produced by the builder.
//!
//! A [`CompoundSelector`] holds the fragments of one unit
//! (`div#id.class[attr]:hover::before`); a [`ComplexSelector`] joins two
//! [`Selector`]s with a [`Combinator`].

mod complex;
mod compound;

pub use complex::{Combinator, ComplexSelector, Selector};
pub use compound::{CompoundSelector, SimpleSelector, Stage};
