//! Field tag interpretation.
//!
//! A tag carries a description and a default value separated by a delimiter,
//! `|` unless the tag opens with a non-alphabetic character, in which case that
//! character is the delimiter for this tag only:
//!
//! ```text
//! "contains the something | /dev/null"          -> ("contains the something", "/dev/null")
//! "! pipe char ! 'yes | head'"                  -> ("pipe char", "'yes | head'")
//! ```
//!
//! The split happens at the last delimiter so earlier occurrences stay part of
//! the description.

/// Delimiter used when a tag does not choose its own.
pub const DEFAULT_DELIMITER: char = '|';

/// Result of interpreting a non-empty tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts {
    /// Text left of the split point, trimmed.
    pub description: String,
    /// Text right of the split point, trimmed; the whole tag when no
    /// delimiter occurs.
    pub default_text: String,
    /// Whether the tag contained the delimiter.
    pub has_default: bool,
    /// Delimiter the tag was split with.
    pub delimiter: char,
}

/// Interprets `raw` using [`DEFAULT_DELIMITER`].
///
/// Returns `None` for an empty or whitespace-only tag, which marks the field
/// as not bindable.
///
/// # Examples
///
/// ```
/// use tagflag::interpret_tag;
///
/// let parts = interpret_tag("in milliseconds since epoch | 42000000000000").unwrap();
/// assert_eq!(parts.description, "in milliseconds since epoch");
/// assert_eq!(parts.default_text, "42000000000000");
/// assert!(parts.has_default);
/// ```
#[must_use]
pub fn interpret_tag(raw: &str) -> Option<TagParts> {
    interpret_tag_with(raw, DEFAULT_DELIMITER)
}

/// Interprets `raw`, splitting on `delimiter` unless the tag overrides it.
///
/// Never fails: malformed tags degrade to an empty description or default.
#[must_use]
pub fn interpret_tag_with(raw: &str, delimiter: char) -> Option<TagParts> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let (delimiter, body) = if first.is_alphabetic() {
        (delimiter, trimmed)
    } else {
        (first, chars.as_str())
    };
    let parts = match body.rsplit_once(delimiter) {
        Some((description, default_text)) => TagParts {
            description: description.trim().to_owned(),
            default_text: default_text.trim().to_owned(),
            has_default: true,
            delimiter,
        },
        None => TagParts {
            description: String::new(),
            default_text: body.trim().to_owned(),
            has_default: false,
            delimiter,
        },
    };
    Some(parts)
}
