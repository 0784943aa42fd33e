//! Scalar kinds and the literal grammars used for defaults and flag values.
//!
//! Defaults taken from tags are parsed leniently: malformed text degrades to
//! the zero value of the kind. Values supplied on the command line go through
//! the strict parsers at the bottom of this module and fail the parse instead.

use std::fmt;

/// The five scalar kinds a flag can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// UTF-8 text.
    Text,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Boolean switch.
    Bool,
    /// 64-bit floating point number.
    Float64,
}

impl ScalarKind {
    /// Rust type name printed in usage lines.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Bool => "bool",
            Self::Float64 => "f64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

/// A value of one of the [`ScalarKind`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// Text value.
    Text(String),
    /// 32-bit integer value.
    Int32(i32),
    /// 64-bit integer value.
    Int64(i64),
    /// Boolean value.
    Bool(bool),
    /// Floating point value.
    Float64(f64),
}

impl ScalarValue {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Text(_) => ScalarKind::Text,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Float64(_) => ScalarKind::Float64,
        }
    }

    /// Zero value of `kind`: empty text, `0`, `false` or `0.0`.
    #[must_use]
    pub const fn zero(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Text => Self::Text(String::new()),
            ScalarKind::Int32 => Self::Int32(0),
            ScalarKind::Int64 => Self::Int64(0),
            ScalarKind::Bool => Self::Bool(false),
            ScalarKind::Float64 => Self::Float64(0.0),
        }
    }

    /// Parses default text taken from a field tag.
    ///
    /// Integers are read as plain decimal. Text that does not parse yields
    /// [`ScalarValue::zero`] rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagflag::{ScalarKind, ScalarValue};
    ///
    /// assert_eq!(
    ///     ScalarValue::from_default_text(ScalarKind::Int32, "42"),
    ///     ScalarValue::Int32(42),
    /// );
    /// assert_eq!(
    ///     ScalarValue::from_default_text(ScalarKind::Int32, "forty-two"),
    ///     ScalarValue::Int32(0),
    /// );
    /// ```
    #[must_use]
    pub fn from_default_text(kind: ScalarKind, text: &str) -> Self {
        let parsed = match kind {
            ScalarKind::Text => Some(Self::Text(text.to_owned())),
            ScalarKind::Int32 => text.parse().ok().map(Self::Int32),
            ScalarKind::Int64 => text.parse().ok().map(Self::Int64),
            ScalarKind::Bool => parse_bool_literal(text).map(Self::Bool),
            ScalarKind::Float64 => text.parse().ok().map(Self::Float64),
        };
        parsed.unwrap_or_else(|| {
            tracing::debug!(kind = %kind, text, "default does not parse; using zero value");
            Self::zero(kind)
        })
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int32(value) => write!(f, "{value}"),
            Self::Int64(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Float64(value) => write!(f, "{value}"),
        }
    }
}

/// Parses the boolean spellings `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
#[must_use]
pub fn parse_bool_literal(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parses a signed integer with an optional `0x`, `0o` or `0b` prefix.
fn parse_int_literal(text: &str) -> Result<i64, String> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = split_radix(unsigned);
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(format!("invalid integer `{text}`"));
    }
    let magnitude =
        u64::from_str_radix(digits, radix).map_err(|err| format!("invalid integer `{text}`: {err}"))?;
    let signed = if negative {
        0_i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    signed.ok_or_else(|| format!("integer `{text}` is out of range for i64"))
}

fn split_radix(text: &str) -> (u32, &str) {
    const PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];
    PREFIXES
        .iter()
        .find_map(|(prefix, radix)| text.strip_prefix(prefix).map(|rest| (*radix, rest)))
        .unwrap_or((10, text))
}

pub(crate) fn parse_i32_token(token: &str) -> Result<i32, String> {
    let wide = parse_int_literal(token)?;
    i32::try_from(wide).map_err(|_| format!("integer `{token}` is out of range for i32"))
}

pub(crate) fn parse_i64_token(token: &str) -> Result<i64, String> {
    parse_int_literal(token)
}

pub(crate) fn parse_f64_token(token: &str) -> Result<f64, String> {
    token
        .parse()
        .map_err(|err| format!("invalid number `{token}`: {err}"))
}

pub(crate) fn parse_bool_token(token: &str) -> Result<bool, String> {
    parse_bool_literal(token).ok_or_else(|| format!("invalid boolean `{token}`"))
}
