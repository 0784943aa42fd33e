//! Binding a record's fields to command-line flags.
//!
//! [`Binder`] walks a record's field table, registers one flag per eligible
//! field with a [`FlagEngine`], writes usage text into the `Usage` field,
//! parses the arguments and stores the results back into the record.

mod plan;
mod usage;

use std::io::{self, Write};

pub use usage::{UsageLine, UsageText};

use self::plan::BindPlan;
use crate::engine::{ClapEngine, FlagEngine};
use crate::error::{FlagError, FlagResult};
use crate::record::{Field, FlagRecord, Slot};
use crate::tag::DEFAULT_DELIMITER;

/// Program name used when the process arguments are empty.
const FALLBACK_PROGRAM: &str = "tagflag";

/// Configures and runs a binding pass.
///
/// ```
/// use tagflag::{Binder, Fields, FlagRecord};
///
/// struct Opt {
///     age: i64,
///     rest: Vec<String>,
/// }
///
/// impl FlagRecord for Opt {
///     fn fields(&mut self) -> Fields<'_> {
///         Fields::new()
///             .field("Age", "how old | 20", &mut self.age)
///             .field("Args", "", &mut self.rest)
///     }
/// }
///
/// let mut opt = Opt { age: 0, rest: Vec::new() };
/// Binder::new()
///     .args(["--Age", "10", "hello"])
///     .parse(&mut opt)
///     .expect("arguments are valid");
/// assert_eq!(opt.age, 10);
/// assert_eq!(opt.rest, ["hello"]);
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    program: Option<String>,
    args: Option<Vec<String>>,
    delimiter: char,
}

impl Default for Binder {
    fn default() -> Self {
        Self {
            program: None,
            args: None,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl Binder {
    /// Creates a binder that reads the process arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the program name shown in usage text and diagnostics.
    #[must_use]
    pub fn program_name(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Parses `args` instead of the process arguments.
    ///
    /// The program name must not be included.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Changes the delimiter used by tags that do not override it.
    #[must_use]
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Binds `record` with the default [`ClapEngine`].
    ///
    /// # Errors
    ///
    /// Returns [`FlagError`] when the record is malformed, when an argument
    /// is an ambiguous boolean literal, or when the arguments do not parse.
    pub fn parse<R>(&self, record: &mut R) -> FlagResult<()>
    where
        R: FlagRecord + ?Sized,
    {
        self.parse_with(record, ClapEngine::new(self.program()))
    }

    /// Binds `record` using `engine` for registration and parsing.
    ///
    /// # Errors
    ///
    /// See [`Binder::parse`]. Errors raised by `engine` are passed through.
    pub fn parse_with<R, E>(&self, record: &mut R, mut engine: E) -> FlagResult<()>
    where
        R: FlagRecord + ?Sized,
        E: FlagEngine,
    {
        let mut fields = record.fields().into_entries();
        let plan = BindPlan::build(&fields, self.delimiter)?;
        for binding in &plan.bindings {
            engine.register(binding.spec.clone())?;
        }

        let tokens = self.tokens(&fields, plan.leftover);
        if plan.has_boolean {
            reject_ambiguous_booleans(&tokens)?;
        }
        if let Some((index, header)) = &plan.usage {
            let text = self.usage_text(header, &plan).to_string();
            if let Some(Slot::Text(usage)) = fields.get_mut(*index).map(Field::slot_mut) {
                **usage = text;
            }
        }

        tracing::debug!(tokens = tokens.len(), flags = plan.bindings.len(), "parsing arguments");
        engine.parse(tokens)?;

        let visited = engine.visited();
        for binding in &plan.bindings {
            let flag = binding.spec.name.as_str();
            if binding.optional && !visited.contains(flag) {
                continue;
            }
            let value = engine
                .value(flag)
                .unwrap_or_else(|| binding.spec.default.clone());
            let Some(field) = fields.get_mut(binding.index) else {
                continue;
            };
            if !field.slot_mut().assign(value) {
                return Err(FlagError::ValueKind {
                    flag: flag.to_owned(),
                    expected: binding.spec.kind,
                });
            }
            tracing::trace!(flag, field = %binding.spec.field, "stored flag value");
        }

        if let Some(Slot::TextList(rest)) = plan
            .leftover
            .and_then(|index| fields.get_mut(index))
            .map(Field::slot_mut)
        {
            **rest = engine.remaining();
        }
        Ok(())
    }

    /// Renders the usage text `record` would receive, without parsing.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::MultipleLeftover`] when the record is malformed.
    pub fn usage<R>(&self, record: &mut R) -> FlagResult<String>
    where
        R: FlagRecord + ?Sized,
    {
        let fields = record.fields().into_entries();
        let plan = BindPlan::build(&fields, self.delimiter)?;
        let header = plan
            .usage
            .as_ref()
            .map(|(_, header)| header.as_str())
            .unwrap_or_default();
        Ok(self.usage_text(header, &plan).to_string())
    }

    /// Binds `record`, exiting the process with status 2 on failure.
    ///
    /// The diagnostic and the usage text are written to standard error first.
    pub fn parse_or_exit<R>(&self, record: &mut R)
    where
        R: FlagRecord + ?Sized,
    {
        let Err(err) = self.parse(record) else {
            return;
        };
        let usage = self.usage(record).unwrap_or_default();
        // Nothing more can be reported once stderr itself fails.
        let _unreported = report(&err, &usage);
        std::process::exit(err.exit_code());
    }

    fn program(&self) -> String {
        self.program
            .clone()
            .or_else(|| {
                std::env::args_os()
                    .next()
                    .map(|arg| arg.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| FALLBACK_PROGRAM.to_owned())
    }

    fn usage_text(&self, header: &str, plan: &BindPlan) -> UsageText {
        let mut text = UsageText::new(self.program(), header);
        for line in &plan.usage_lines {
            text.push(line.clone());
        }
        text
    }

    /// Explicit arguments, then a pre-filled leftover field, then the process
    /// arguments.
    fn tokens(&self, fields: &[Field<'_>], leftover: Option<usize>) -> Vec<String> {
        if let Some(args) = &self.args {
            return args.clone();
        }
        let preset = leftover
            .and_then(|index| fields.get(index))
            .and_then(|field| match field.slot() {
                Slot::TextList(rest) if !rest.is_empty() => Some(rest.to_vec()),
                _ => None,
            });
        if let Some(rest) = preset {
            tracing::debug!("using the pre-filled leftover field as arguments");
            return rest;
        }
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Rejects a bare `true` or `false` token in any letter case.
///
/// `--Verbose true` would otherwise set the switch and silently turn `true`
/// into a leftover argument.
fn reject_ambiguous_booleans(tokens: &[String]) -> FlagResult<()> {
    tokens
        .iter()
        .find(|token| token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false"))
        .map_or(Ok(()), |token| {
            Err(FlagError::AmbiguousBoolean {
                token: token.clone(),
            })
        })
}

fn report(err: &FlagError, usage: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    match err {
        FlagError::CliParsing(source) => write!(stderr, "{source}")?,
        other => writeln!(stderr, "error: {other}")?,
    }
    writeln!(stderr, "{usage}")
}
