//! Turning command-line tokens into a selector.
//!
//! `kind:value` appends a fragment to the compound being built; a bare
//! combinator (`+`, `~`, `>`, `descendant`) closes it.

use std::mem;

use anyhow::{Context, Result, bail};
use sprig_selector::{Combinator, CompoundSelector, Selector, SimpleSelector};

/// One command-line token.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    Fragment(SimpleSelector),
    Combinator(Combinator),
}

fn classify(raw: &str) -> Result<Token> {
    if raw == "descendant" {
        return Ok(Token::Combinator(Combinator::Descendant));
    }
    if let Ok(combinator) = Combinator::from_token(raw) {
        return Ok(Token::Combinator(combinator));
    }

    let Some((kind, value)) = raw.split_once(':') else {
        bail!("expected `kind:value` or a combinator, got `{raw}`");
    };
    let value = value.to_string();
    let fragment = match kind {
        "element" | "el" | "tag" => SimpleSelector::Type(value),
        "id" => SimpleSelector::Id(value),
        "class" => SimpleSelector::Class(value),
        "attr" => SimpleSelector::Attribute(value),
        "pseudo-class" | "pc" => SimpleSelector::PseudoClass(value),
        "pseudo-element" | "pe" => SimpleSelector::PseudoElement(value),
        other => bail!("unknown fragment kind `{other}` in `{raw}`"),
    };
    Ok(Token::Fragment(fragment))
}

/// Left-to-right accumulator: everything combined so far plus the
/// combinator waiting for the compound currently being built.
#[derive(Default)]
struct Chain {
    head: Option<(Selector, Combinator)>,
    current: CompoundSelector,
}

impl Chain {
    fn fragment(&mut self, raw: &str, fragment: SimpleSelector) -> Result<()> {
        let current = mem::take(&mut self.current);
        self.current = current
            .push(fragment)
            .with_context(|| format!("while adding `{raw}`"))?;
        Ok(())
    }

    fn combinator(&mut self, raw: &str, combinator: Combinator) -> Result<()> {
        if self.current.is_empty() {
            bail!("combinator `{raw}` must follow a selector");
        }
        let segment = mem::take(&mut self.current);
        let joined = match self.head.take() {
            Some((left, pending)) => left.then(pending, segment)?,
            None => segment.into(),
        };
        self.head = Some((joined, combinator));
        Ok(())
    }

    fn finish(self) -> Result<Selector> {
        if self.current.is_empty() {
            match self.head {
                Some((_, pending)) => bail!("dangling combinator `{pending}` at end of input"),
                None => bail!("no selector tokens given"),
            }
        }
        Ok(match self.head {
            Some((left, pending)) => left.then(pending, self.current)?,
            None => self.current.into(),
        })
    }
}

/// Build a selector from tokens such as `el:a attr:href pc:hover + el:b`.
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Selector> {
    let mut chain = Chain::default();
    for raw in tokens {
        let raw = raw.as_ref();
        match classify(raw)? {
            Token::Fragment(fragment) => chain.fragment(raw, fragment)?,
            Token::Combinator(combinator) => chain.combinator(raw, combinator)?,
        }
    }
    chain.finish()
}
