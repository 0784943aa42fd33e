//! [`FlagEngine`] backed by `clap`'s builder API.
//!
//! The command is rebuilt from the registered specs at parse time:
//!
//! - every flag is long-only (`--Name`) and the last occurrence wins;
//! - non-boolean flags take the next token as their value even when it starts
//!   with `-`;
//! - boolean flags are switches that optionally take `=value`;
//! - a single trailing positional swallows the first non-flag token and
//!   everything after it.

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

use super::{FlagEngine, FlagSpec, VisitedSet};
use crate::error::{FlagError, FlagResult};
use crate::value::{
    ScalarKind, ScalarValue, parse_bool_token, parse_f64_token, parse_i32_token, parse_i64_token,
};

/// Argument id of the positional that collects leftover tokens.
const LEFTOVER_ID: &str = "tagflag::leftover";

/// The default flag engine.
#[derive(Debug, Clone)]
pub struct ClapEngine {
    program: String,
    specs: Vec<FlagSpec>,
    matches: Option<ArgMatches>,
}

impl ClapEngine {
    /// Creates an engine whose diagnostics name `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            specs: Vec::new(),
            matches: None,
        }
    }

    /// Builds the `clap` command for the registered flags.
    #[must_use]
    pub fn command(&self) -> Command {
        let leftover = Arg::new(LEFTOVER_ID)
            .value_name("ARGS")
            .num_args(0..)
            .trailing_var_arg(true)
            .action(ArgAction::Append)
            .value_parser(value_parser!(String));
        self.specs.iter().map(flag_arg).fold(
            Command::new(self.program.clone())
                .no_binary_name(true)
                .disable_help_flag(true)
                .disable_version_flag(true)
                .args_override_self(true)
                .arg(leftover),
            |command, arg| command.arg(arg),
        )
    }

    fn spec(&self, flag: &str) -> Option<&FlagSpec> {
        self.specs.iter().find(|spec| spec.name == flag)
    }
}

fn flag_arg(spec: &FlagSpec) -> Arg {
    let arg = Arg::new(spec.name.clone())
        .long(spec.name.clone())
        .help(spec.description.clone())
        .action(ArgAction::Set);
    match spec.kind {
        ScalarKind::Bool => arg
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .value_parser(parse_bool_token),
        ScalarKind::Text => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(value_parser!(String)),
        ScalarKind::Int32 => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(parse_i32_token),
        ScalarKind::Int64 => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(parse_i64_token),
        ScalarKind::Float64 => arg
            .num_args(1)
            .allow_hyphen_values(true)
            .value_parser(parse_f64_token),
    }
}

fn parsed_value(matches: &ArgMatches, spec: &FlagSpec) -> Option<ScalarValue> {
    let id = spec.name.as_str();
    match spec.kind {
        ScalarKind::Text => matches
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .cloned()
            .map(ScalarValue::Text),
        ScalarKind::Int32 => matches
            .try_get_one::<i32>(id)
            .ok()
            .flatten()
            .copied()
            .map(ScalarValue::Int32),
        ScalarKind::Int64 => matches
            .try_get_one::<i64>(id)
            .ok()
            .flatten()
            .copied()
            .map(ScalarValue::Int64),
        ScalarKind::Bool => matches
            .try_get_one::<bool>(id)
            .ok()
            .flatten()
            .copied()
            .map(ScalarValue::Bool),
        ScalarKind::Float64 => matches
            .try_get_one::<f64>(id)
            .ok()
            .flatten()
            .copied()
            .map(ScalarValue::Float64),
    }
}

impl FlagEngine for ClapEngine {
    fn register(&mut self, flag: FlagSpec) -> FlagResult<()> {
        if let Some(existing) = self.spec(&flag.name) {
            return Err(FlagError::DuplicateFlag {
                flag: flag.name,
                first: existing.field.clone(),
                second: flag.field,
            });
        }
        tracing::debug!(flag = %flag.name, kind = %flag.kind, default = %flag.default, "registered flag");
        self.specs.push(flag);
        Ok(())
    }

    fn parse(&mut self, tokens: Vec<String>) -> FlagResult<()> {
        let matches = self.command().try_get_matches_from(tokens)?;
        self.matches = Some(matches);
        Ok(())
    }

    fn visited(&self) -> VisitedSet {
        let Some(matches) = &self.matches else {
            return VisitedSet::default();
        };
        self.specs
            .iter()
            .filter(|spec| matches.value_source(&spec.name) == Some(ValueSource::CommandLine))
            .map(|spec| spec.name.as_str())
            .collect()
    }

    fn value(&self, flag: &str) -> Option<ScalarValue> {
        let spec = self.spec(flag)?;
        let parsed = self
            .matches
            .as_ref()
            .and_then(|matches| parsed_value(matches, spec));
        Some(parsed.unwrap_or_else(|| spec.default.clone()))
    }

    fn remaining(&self) -> Vec<String> {
        self.matches
            .as_ref()
            .and_then(|matches| matches.try_get_many::<String>(LEFTOVER_ID).ok().flatten())
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }
}
