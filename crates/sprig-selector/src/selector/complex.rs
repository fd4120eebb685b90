//! Combinators and complex selectors.
//!
//! [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::CompoundSelector;
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Token: whitespace (` `)
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// Token: `>`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// Token: `+`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// Token: `~`
    SubsequentSibling,
}

impl Combinator {
    /// Every combinator, in token order ` `, `+`, `~`, `>`.
    pub const ALL: [Self; 4] = [
        Self::Descendant,
        Self::NextSibling,
        Self::SubsequentSibling,
        Self::Child,
    ];

    /// The single-character token for this combinator.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }

    /// Look up a combinator by its token.
    ///
    /// Surrounding whitespace is ignored, so `" + "` is accepted; a token made
    /// only of whitespace is the descendant combinator.
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidCombinator`] for the empty string or any other
    /// token.
    pub fn from_token(token: &str) -> Result<Self, SelectorError> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return if token.is_empty() {
                Err(SelectorError::InvalidCombinator(String::new()))
            } else {
                Ok(Self::Descendant)
            };
        }

        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(SelectorError::InvalidCombinator(token.to_string())),
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = SelectorError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|combinator| combinator.token() == c)
            .ok_or_else(|| SelectorError::InvalidCombinator(c.to_string()))
    }
}

impl TryFrom<&str> for Combinator {
    type Error = SelectorError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Self::from_token(token)
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Two selectors joined by a combinator.
///
/// Either side may itself be complex, so `a + b ~ c` is the left-nested
/// tree `((a + b) ~ c)`. Rendering always puts one space on each side of
/// the combinator token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComplexSelector {
    left: Box<Selector>,
    combinator: Combinator,
    right: Box<Selector>,
}

impl ComplexSelector {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator,
            right: Box::new(right.into()),
        }
    }

    /// The selector on the left of the combinator.
    #[must_use]
    pub fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining both sides.
    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// The selector on the right of the combinator.
    #[must_use]
    pub fn right(&self) -> &Selector {
        &self.right
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Anything `combine` accepts on either side: a single compound selector or
/// an already combined one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    /// No combinators.
    Compound(CompoundSelector),
    /// At least one combinator.
    Complex(ComplexSelector),
}

impl Selector {
    /// Combine this selector with `right`, this one on the left.
    ///
    /// ```
    /// use sprig_selector::{Selector, element};
    ///
    /// # fn main() -> Result<(), sprig_selector::SelectorError> {
    /// let list = Selector::from(element("ul")?).then('>', element("li")?)?;
    /// assert_eq!(list.stringify(), "ul > li");
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// [`SelectorError::InvalidCombinator`] if `combinator` is not a
    /// recognized token.
    pub fn then<C>(self, combinator: C, right: impl Into<Self>) -> Result<Self, SelectorError>
    where
        C: TryInto<Combinator>,
        SelectorError: From<C::Error>,
    {
        let combinator = combinator.try_into()?;
        Ok(Self::Complex(ComplexSelector::new(self, combinator, right)))
    }

    /// The compound selectors in this selector, left to right.
    #[must_use]
    pub fn compounds(&self) -> Vec<&CompoundSelector> {
        let mut out = Vec::new();
        self.collect_compounds(&mut out);
        out
    }

    fn collect_compounds<'a>(&'a self, out: &mut Vec<&'a CompoundSelector>) {
        match self {
            Self::Compound(compound) => out.push(compound),
            Self::Complex(complex) => {
                complex.left.collect_compounds(out);
                complex.right.collect_compounds(out);
            }
        }
    }

    /// Render the selector, e.g. `div#main + table#data`.
    #[must_use]
    pub fn stringify(&self) -> String {
        match self {
            Self::Compound(compound) => compound.stringify(),
            Self::Complex(complex) => complex.to_string(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => fmt::Display::fmt(compound, f),
            Self::Complex(complex) => fmt::Display::fmt(complex, f),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<ComplexSelector> for Selector {
    fn from(complex: ComplexSelector) -> Self {
        Self::Complex(complex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for combinator in Combinator::ALL {
            let token = combinator.token().to_string();
            assert_eq!(Combinator::from_token(&token), Ok(combinator));
        }
    }

    #[test]
    fn test_from_token_trims() {
        assert_eq!(Combinator::from_token(" > "), Ok(Combinator::Child));
        assert_eq!(Combinator::from_token("\t"), Ok(Combinator::Descendant));
    }

    #[test]
    fn test_from_token_rejects() {
        assert!(Combinator::from_token("").is_err());
        assert!(Combinator::from_token(">>").is_err());
        assert!(Combinator::try_from('|').is_err());
    }
}
