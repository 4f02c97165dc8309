//! Turning command-line tokens into a selector.
//!
//! `kind=value` tokens add a fragment to the current compound selector.
//! Any other token is a combinator symbol: it closes the current compound
//! and the next compound is joined to everything before it.

use std::fmt;

use anyhow::{Context, Result, bail};
use kata_selector::{Category, Combined, Render, SelectorBuilder, Specificity, combine};

/// Either a lone compound selector or a chain of combined ones.
#[derive(Debug)]
pub enum Built {
    /// No combinator was given.
    Compound(SelectorBuilder),
    /// At least one combinator was given.
    Complex(Combined),
}

impl Render for Built {
    fn render(&self) -> String {
        match self {
            Self::Compound(builder) => builder.render(),
            Self::Complex(combined) => combined.render(),
        }
    }

    fn specificity(&self) -> Specificity {
        match self {
            Self::Compound(builder) => builder.specificity(),
            Self::Complex(combined) => combined.specificity(),
        }
    }
}

impl fmt::Display for Built {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build a selector from tokens, left to right.
pub fn build(tokens: &[String]) -> Result<Built> {
    let mut done: Option<Built> = None;
    let mut pending: Option<&str> = None;
    let mut current = SelectorBuilder::new();

    for token in tokens {
        if let Some((kind, value)) = token.split_once('=') {
            let category: Category = kind
                .parse()
                .with_context(|| format!("unknown fragment kind {kind:?} in {token:?}"))?;
            current
                .push(category, value)
                .with_context(|| format!("cannot add {token:?}"))?;
        } else {
            if current.is_empty() {
                bail!("combinator {token:?} must follow a selector");
            }
            done = Some(join(done, pending, std::mem::take(&mut current)));
            pending = Some(token);
        }
    }

    if let Some(symbol) = pending
        && current.is_empty()
    {
        bail!("combinator {symbol:?} has no selector after it");
    }
    Ok(join(done, pending, current))
}

fn join(done: Option<Built>, symbol: Option<&str>, next: SelectorBuilder) -> Built {
    match (done, symbol) {
        (Some(left), Some(symbol)) => Built::Complex(combine(&left, symbol, &next)),
        _ => Built::Compound(next),
    }
}
