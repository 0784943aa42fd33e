//! Error types produced while binding a record to command-line flags.

use thiserror::Error;

use crate::value::ScalarKind;

/// Exit status used when binding fails at the process boundary.
pub const EXIT_STATUS: i32 = 2;

/// Errors that can occur while binding command-line flags to a record.
///
/// Every variant is terminal for the current parse: caller-contract
/// violations signal a programming error in the record description, while
/// [`FlagError::AmbiguousBoolean`] and [`FlagError::CliParsing`] signal bad
/// input on the command line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagError {
    /// Two fields derive the same flag name.
    #[error("flag `--{flag}` is derived from both `{first}` and `{second}`")]
    DuplicateFlag {
        /// Flag name both fields map to.
        flag: String,
        /// Field that registered the flag first.
        first: String,
        /// Field whose registration collided.
        second: String,
    },

    /// The record declares more than one leftover-arguments field.
    #[error("only one leftover-arguments field is allowed, found `{first}` and `{second}`")]
    MultipleLeftover {
        /// Field declared first.
        first: String,
        /// Field declared second.
        second: String,
    },

    /// A standalone boolean token appeared while a boolean flag is registered.
    #[error(
        "standalone `{token}` is ambiguous while boolean flags are registered; \
         use `--Name={token}` instead of `--Name {token}`"
    )]
    AmbiguousBoolean {
        /// Offending token as it appeared on the command line.
        token: String,
    },

    /// A flag engine handed back a value of a different kind than registered.
    #[error("flag `--{flag}` produced a value that is not {expected}")]
    ValueKind {
        /// Flag whose value was mismatched.
        flag: String,
        /// Kind the flag was registered with.
        expected: ScalarKind,
    },

    /// The command line could not be parsed.
    #[error("failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),
}

impl FlagError {
    /// Process exit status for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        EXIT_STATUS
    }

    /// Returns `true` when the error stems from the record description rather
    /// than from command-line input.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::DuplicateFlag { .. } | Self::MultipleLeftover { .. } | Self::ValueKind { .. }
        )
    }
}

impl From<clap::Error> for FlagError {
    fn from(err: clap::Error) -> Self {
        Self::CliParsing(Box::new(err))
    }
}

/// Result alias used throughout the crate.
pub type FlagResult<T> = Result<T, FlagError>;
