//! Usage text assembled from field tags.

use std::fmt;

/// One `--flag` line of the usage text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageLine {
    /// Flag name without dashes.
    pub flag: String,
    /// Default text exactly as written in the tag.
    pub default_text: String,
    /// Declared type of the field.
    pub type_tag: &'static str,
    /// Description from the tag.
    pub description: String,
}

impl fmt::Display for UsageLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n\t--{}: {} <-- Default, {} # {}",
            self.flag, self.default_text, self.type_tag, self.description
        )
    }
}

/// Usage text for a record: a header naming the program followed by one line
/// per flag that declares a default.
///
/// ```
/// use tagflag::{UsageLine, UsageText};
///
/// let mut usage = UsageText::new("demo", "tagflag demonstrator");
/// usage.push(UsageLine {
///     flag: "IQ".to_owned(),
///     default_text: "42".to_owned(),
///     type_tag: "i32",
///     description: "do not inflate".to_owned(),
/// });
/// assert_eq!(
///     usage.to_string(),
///     "\n Usage of demo # tagflag demonstrator\n ARGS:\n\t--IQ: 42 <-- Default, i32 # do not inflate",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageText {
    program: String,
    header: String,
    lines: Vec<UsageLine>,
}

impl UsageText {
    /// Starts usage text for `program` with the usage field's own tag as
    /// `header`.
    #[must_use]
    pub fn new(program: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            header: header.into(),
            lines: Vec::new(),
        }
    }

    /// Appends a flag line.
    pub fn push(&mut self, line: UsageLine) {
        self.lines.push(line);
    }

    /// Flag lines in declaration order.
    #[must_use]
    pub fn lines(&self) -> &[UsageLine] {
        &self.lines
    }
}

impl fmt::Display for UsageText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n Usage of {} # {}\n ARGS:", self.program, self.header)?;
        self.lines.iter().try_for_each(|line| line.fmt(f))
    }
}
