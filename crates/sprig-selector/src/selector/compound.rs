//! Simple and compound selectors.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

use std::fmt;

use serde::Serialize;
use sprig_common::warning::warn_once;
use strum_macros::Display;

use crate::error::SelectorError;

/// The category of a simple selector, in the order the categories must
/// appear inside a compound selector.
///
/// `Type < Id < Class < Attribute < PseudoClass < PseudoElement`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// `div`
    Type,
    /// `#main`
    Id,
    /// `.container`
    Class,
    /// `[href]`
    Attribute,
    /// `:hover`
    PseudoClass,
    /// `::before`
    PseudoElement,
}

impl Stage {
    /// Whether a compound selector may hold more than one fragment of this
    /// stage. Only classes, attributes and pseudo-classes repeat.
    #[must_use]
    pub const fn is_repeatable(self) -> bool {
        matches!(self, Self::Class | Self::Attribute | Self::PseudoClass)
    }
}

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// A simple selector is a single fragment of a compound selector. The value
/// is kept verbatim and only gains its prefix when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum SimpleSelector {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered as the bare tag name: `div`
    Type(String),

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Rendered as `#value`
    Id(String),

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Rendered as `.value`
    Class(String),

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[value]`. Operators and quoting are part of the value,
    /// e.g. `href$=".png"` becomes `[href$=".png"]`.
    Attribute(String),

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:value`
    PseudoClass(String),

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Rendered as `::value`
    PseudoElement(String),
}

impl SimpleSelector {
    /// The ordering stage this fragment belongs to.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Type(_) => Stage::Type,
            Self::Id(_) => Stage::Id,
            Self::Class(_) => Stage::Class,
            Self::Attribute(_) => Stage::Attribute,
            Self::PseudoClass(_) => Stage::PseudoClass,
            Self::PseudoElement(_) => Stage::PseudoElement,
        }
    }

    /// The raw value, without any prefix.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Type(v)
            | Self::Id(v)
            | Self::Class(v)
            | Self::Attribute(v)
            | Self::PseudoClass(v)
            | Self::PseudoElement(v) => v,
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(tag) => f.write_str(tag),
            Self::Id(v) => write!(f, "#{v}"),
            Self::Class(v) => write!(f, ".{v}"),
            Self::Attribute(v) => write!(f, "[{v}]"),
            Self::PseudoClass(v) => write!(f, ":{v}"),
            Self::PseudoElement(v) => write!(f, "::{v}"),
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// Built one fragment at a time. Each append consumes the selector and
/// returns a new one, so a rejected append leaves nothing behind:
///
/// ```
/// use sprig_selector::CompoundSelector;
///
/// # fn main() -> Result<(), sprig_selector::SelectorError> {
/// let selector = CompoundSelector::new()
///     .element("a")?
///     .attr(r#"href$=".png""#)?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), r#"a[href$=".png"]:focus"#);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CompoundSelector {
    /// Fragments in append order.
    fragments: Vec<SimpleSelector>,
    /// Furthest stage reached so far; `None` while empty.
    #[serde(skip)]
    stage: Option<Stage>,
}

impl CompoundSelector {
    /// Create an empty compound selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
            stage: None,
        }
    }

    /// Append a type selector (`div`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a type selector is already present,
    /// [`SelectorError::Order`] if any other fragment was added before it.
    pub fn element(self, tag: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(SimpleSelector::Type(tag.into()))
    }

    /// Append an ID selector (`#value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an ID is already present,
    /// [`SelectorError::Order`] if a class, attribute, pseudo-class or
    /// pseudo-element was added before it.
    pub fn id(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(SimpleSelector::Id(value.into()))
    }

    /// Append a class selector (`.value`). May be repeated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class or
    /// pseudo-element was added before it.
    pub fn class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(SimpleSelector::Class(value.into()))
    }

    /// Append an attribute selector (`[value]`). May be repeated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element was added
    /// before it.
    pub fn attr(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(SimpleSelector::Attribute(value.into()))
    }

    /// Append a pseudo-class (`:value`). May be repeated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element was added before it.
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(SimpleSelector::PseudoClass(value.into()))
    }

    /// Append a pseudo-element (`::value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element is already present.
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.push(SimpleSelector::PseudoElement(value.into()))
    }

    /// Append any fragment, enforcing category order and uniqueness.
    ///
    /// # Errors
    ///
    /// See [`SelectorError::Order`] and [`SelectorError::Duplicate`].
    pub fn push(mut self, fragment: SimpleSelector) -> Result<Self, SelectorError> {
        let stage = fragment.stage();

        if let Err(err) = self.check(stage) {
            // The rejected chain is discarded before the error is handed back.
            drop(self);
            return Err(err);
        }

        if fragment.value().is_empty() {
            warn_once("Selector", &format!("empty {stage} value renders as a bare prefix"));
        }

        self.fragments.push(fragment);
        self.stage = Some(stage);
        Ok(self)
    }

    /// Decide whether a fragment of `stage` may be appended next.
    fn check(&self, stage: Stage) -> Result<(), SelectorError> {
        if !stage.is_repeatable() && self.fragments.iter().any(|f| f.stage() == stage) {
            return Err(SelectorError::Duplicate(stage));
        }
        match self.stage {
            Some(after) if after > stage => Err(SelectorError::Order {
                attempted: stage,
                after,
            }),
            _ => Ok(()),
        }
    }

    /// The furthest stage reached, or `None` for an empty selector.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        self.stage
    }

    /// The fragments in the order they will be rendered.
    #[must_use]
    pub fn fragments(&self) -> &[SimpleSelector] {
        &self.fragments
    }

    /// Whether no fragment has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render the selector, e.g. `div#main.container:hover`.
    #[must_use]
    pub fn stringify(&self) -> String {
        if self.is_empty() {
            warn_once("Selector", "stringified an empty compound selector");
        }
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
