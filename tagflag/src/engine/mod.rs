//! The primitive flag engine the binder drives.
//!
//! The binder never parses tokens itself. It registers one [`FlagSpec`] per
//! bindable field, hands the token list to [`FlagEngine::parse`], then reads
//! back which flags were supplied, their values and the unconsumed tokens.
//! [`ClapEngine`] is the engine used by default.

mod clap_engine;

use std::collections::HashSet;

use crate::error::FlagResult;
use crate::value::{ScalarKind, ScalarValue};

pub use clap_engine::ClapEngine;

/// Registration request for a single flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSpec {
    /// Flag name without the leading `--`.
    pub name: String,
    /// Record field the flag is bound to, used in diagnostics.
    pub field: String,
    /// Kind of value the flag accepts.
    pub kind: ScalarKind,
    /// Value reported when the flag is not supplied.
    pub default: ScalarValue,
    /// Help text shown by the engine.
    pub description: String,
}

/// Names of the flags explicitly supplied during one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet(HashSet<String>);

impl VisitedSet {
    /// Whether `flag` was supplied.
    #[must_use]
    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    /// Records `flag` as supplied.
    pub fn insert(&mut self, flag: impl Into<String>) -> bool {
        self.0.insert(flag.into())
    }

    /// Number of supplied flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no flag was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the supplied flag names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for VisitedSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Registers flags, parses a token list and reports what was seen.
///
/// Implementations are single-use: `register` is called for every flag before
/// the one call to `parse`, and the query methods are only meaningful
/// afterwards.
pub trait FlagEngine {
    /// Registers a flag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlagError::DuplicateFlag`] when a flag with the same
    /// name is already registered.
    fn register(&mut self, flag: FlagSpec) -> FlagResult<()>;

    /// Parses `tokens`, which exclude the program name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FlagError::CliParsing`] for unknown flags, missing
    /// values and values that do not parse as the flag's kind.
    fn parse(&mut self, tokens: Vec<String>) -> FlagResult<()>;

    /// Flags supplied on the command line.
    fn visited(&self) -> VisitedSet;

    /// Value of `flag`: the parsed value when supplied, else its default.
    ///
    /// Returns `None` for flags that were never registered.
    fn value(&self, flag: &str) -> Option<ScalarValue>;

    /// Tokens not consumed by any flag, in command-line order.
    fn remaining(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests;
