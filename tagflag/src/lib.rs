//! Command-line flags declared by annotating record fields.
//!
//! Each field of a record carries a tag such as `"how old | 20"`: the text
//! before the last delimiter describes the flag and the text after it is the
//! default. Binding a record registers one `--flag` per eligible field,
//! parses the arguments and writes the results back into the record.
//!
//! ```
//! use tagflag::FlagRecord;
//!
//! #[derive(FlagRecord, Default)]
//! struct Opt {
//!     #[flag("kitchen sink demo")]
//!     usage: String,
//!     #[flag("how old | 20")]
//!     age: i64,
//!     #[flag("do not inflate | 42", rename = "IQ")]
//!     iq: i32,
//!     #[flag("loud output")]
//!     verbose: Option<bool>,
//!     args: Vec<String>,
//! }
//!
//! let mut opt = Opt::default();
//! tagflag::parse_from(&mut opt, ["--Age", "10", "--Verbose", "hello"])
//!     .expect("arguments are valid");
//! assert_eq!(opt.age, 10);
//! assert_eq!(opt.iq, 42);
//! assert_eq!(opt.verbose, Some(true));
//! assert_eq!(opt.args, ["hello"]);
//! assert!(opt.usage.contains("--Age: 20 <-- Default, i64 # how old"));
//! ```
//!
//! Flag names are the record field names. A single trailing `_` asks for a
//! lower-case flag: it is dropped and the first character is lower-cased, so
//! `IQ` stays `--IQ` while `Baz_` becomes `--baz`. Boolean switches take
//! `--Flag` or `--Flag=value`; a separate `true` or `false` argument is
//! rejected as ambiguous.

extern crate self as tagflag;

mod binder;
mod engine;
mod error;
mod record;
mod tag;
mod value;

pub use binder::{Binder, UsageLine, UsageText};
pub use engine::{ClapEngine, FlagEngine, FlagSpec, VisitedSet};
pub use error::{EXIT_STATUS, FlagError, FlagResult};
pub use record::{
    Field, FieldKind, Fields, FlagRecord, Slot, USAGE_FIELD, flag_name, is_visible_name,
};
pub use tag::{DEFAULT_DELIMITER, TagParts, interpret_tag, interpret_tag_with};
pub use tagflag_macros::FlagRecord;
pub use value::{ScalarKind, ScalarValue, parse_bool_literal};

/// Binds `record` from the process arguments.
///
/// # Errors
///
/// See [`Binder::parse`].
pub fn parse<R>(record: &mut R) -> FlagResult<()>
where
    R: FlagRecord + ?Sized,
{
    Binder::new().parse(record)
}

/// Binds `record` from `args`, which must not include the program name.
///
/// # Errors
///
/// See [`Binder::parse`].
pub fn parse_from<R, I, S>(record: &mut R, args: I) -> FlagResult<()>
where
    R: FlagRecord + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Binder::new().args(args).parse(record)
}

/// Binds `record` from the process arguments, exiting with status
/// [`EXIT_STATUS`] after printing a diagnostic and the usage text on failure.
pub fn parse_or_exit<R>(record: &mut R)
where
    R: FlagRecord + ?Sized,
{
    Binder::new().parse_or_exit(record);
}
