//! Field-descriptor tables describing a bindable record.
//!
//! A record exposes its fields, in declaration order, as a [`Fields`] table.
//! Each entry pairs the field's name and tag with a [`Slot`], a typed mutable
//! borrow of the field's storage. Tables are normally generated by
//! `#[derive(FlagRecord)]` but can be written by hand:
//!
//! ```
//! use tagflag::{Fields, FlagRecord};
//!
//! struct Opts {
//!     iq: i32,
//!     out: Option<String>,
//! }
//!
//! impl FlagRecord for Opts {
//!     fn fields(&mut self) -> Fields<'_> {
//!         Fields::new()
//!             .field("IQ", "do not inflate | 42", &mut self.iq)
//!             .field("Out", "output path", &mut self.out)
//!     }
//! }
//! ```

use std::borrow::Cow;

use crate::value::{ScalarKind, ScalarValue};

/// Name of the field that receives the assembled usage text.
pub const USAGE_FIELD: &str = "Usage";

/// A record whose fields can be bound to command-line flags.
pub trait FlagRecord {
    /// Returns the record's field table in declaration order.
    fn fields(&mut self) -> Fields<'_>;
}

/// Semantic kind of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A plain scalar, always holding a value.
    Scalar(ScalarKind),
    /// A scalar that may be absent.
    Optional(ScalarKind),
    /// An ordered list of text, used for leftover arguments.
    TextList,
}

impl FieldKind {
    /// Declared type printed in usage lines.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Scalar(kind) => kind.type_tag(),
            Self::Optional(ScalarKind::Text) => "Option<String>",
            Self::Optional(ScalarKind::Int32) => "Option<i32>",
            Self::Optional(ScalarKind::Int64) => "Option<i64>",
            Self::Optional(ScalarKind::Bool) => "Option<bool>",
            Self::Optional(ScalarKind::Float64) => "Option<f64>",
            Self::TextList => "Vec<String>",
        }
    }

    /// Scalar kind carried by the field, if any.
    #[must_use]
    pub const fn scalar(self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) | Self::Optional(kind) => Some(kind),
            Self::TextList => None,
        }
    }
}

/// Mutable access to one field's storage.
#[derive(Debug)]
pub enum Slot<'a> {
    /// `String` field.
    Text(&'a mut String),
    /// `i32` field.
    Int32(&'a mut i32),
    /// `i64` field.
    Int64(&'a mut i64),
    /// `bool` field.
    Bool(&'a mut bool),
    /// `f64` field.
    Float64(&'a mut f64),
    /// `Option<String>` field.
    OptionalText(&'a mut Option<String>),
    /// `Option<i32>` field.
    OptionalInt32(&'a mut Option<i32>),
    /// `Option<i64>` field.
    OptionalInt64(&'a mut Option<i64>),
    /// `Option<bool>` field.
    OptionalBool(&'a mut Option<bool>),
    /// `Option<f64>` field.
    OptionalFloat64(&'a mut Option<f64>),
    /// `Vec<String>` field.
    TextList(&'a mut Vec<String>),
}

impl Slot<'_> {
    /// Semantic kind of the slot.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Scalar(ScalarKind::Text),
            Self::Int32(_) => FieldKind::Scalar(ScalarKind::Int32),
            Self::Int64(_) => FieldKind::Scalar(ScalarKind::Int64),
            Self::Bool(_) => FieldKind::Scalar(ScalarKind::Bool),
            Self::Float64(_) => FieldKind::Scalar(ScalarKind::Float64),
            Self::OptionalText(_) => FieldKind::Optional(ScalarKind::Text),
            Self::OptionalInt32(_) => FieldKind::Optional(ScalarKind::Int32),
            Self::OptionalInt64(_) => FieldKind::Optional(ScalarKind::Int64),
            Self::OptionalBool(_) => FieldKind::Optional(ScalarKind::Bool),
            Self::OptionalFloat64(_) => FieldKind::Optional(ScalarKind::Float64),
            Self::TextList(_) => FieldKind::TextList,
        }
    }

    /// Current value of a plain scalar slot.
    pub(crate) fn current(&self) -> Option<ScalarValue> {
        match self {
            Self::Text(v) => Some(ScalarValue::Text((**v).clone())),
            Self::Int32(v) => Some(ScalarValue::Int32(**v)),
            Self::Int64(v) => Some(ScalarValue::Int64(**v)),
            Self::Bool(v) => Some(ScalarValue::Bool(**v)),
            Self::Float64(v) => Some(ScalarValue::Float64(**v)),
            _ => None,
        }
    }

    /// Whether an optional slot already holds a value.
    pub(crate) const fn is_present(&self) -> bool {
        match self {
            Self::OptionalText(v) => v.is_some(),
            Self::OptionalInt32(v) => v.is_some(),
            Self::OptionalInt64(v) => v.is_some(),
            Self::OptionalBool(v) => v.is_some(),
            Self::OptionalFloat64(v) => v.is_some(),
            _ => false,
        }
    }

    /// Stores `value`, making optional slots present.
    ///
    /// Returns `false`, leaving the slot untouched, when the kinds differ.
    pub(crate) fn assign(&mut self, value: ScalarValue) -> bool {
        match (self, value) {
            (Self::Text(slot), ScalarValue::Text(v)) => **slot = v,
            (Self::Int32(slot), ScalarValue::Int32(v)) => **slot = v,
            (Self::Int64(slot), ScalarValue::Int64(v)) => **slot = v,
            (Self::Bool(slot), ScalarValue::Bool(v)) => **slot = v,
            (Self::Float64(slot), ScalarValue::Float64(v)) => **slot = v,
            (Self::OptionalText(slot), ScalarValue::Text(v)) => **slot = Some(v),
            (Self::OptionalInt32(slot), ScalarValue::Int32(v)) => **slot = Some(v),
            (Self::OptionalInt64(slot), ScalarValue::Int64(v)) => **slot = Some(v),
            (Self::OptionalBool(slot), ScalarValue::Bool(v)) => **slot = Some(v),
            (Self::OptionalFloat64(slot), ScalarValue::Float64(v)) => **slot = Some(v),
            _ => return false,
        }
        true
    }
}

macro_rules! slot_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for Slot<'a> {
                fn from(value: &'a mut $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

slot_from! {
    String => Text,
    i32 => Int32,
    i64 => Int64,
    bool => Bool,
    f64 => Float64,
    Option<String> => OptionalText,
    Option<i32> => OptionalInt32,
    Option<i64> => OptionalInt64,
    Option<bool> => OptionalBool,
    Option<f64> => OptionalFloat64,
    Vec<String> => TextList,
}

/// One entry of a field table.
#[derive(Debug)]
pub struct Field<'a> {
    name: Cow<'a, str>,
    tag: Cow<'a, str>,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Describes a field.
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        tag: impl Into<Cow<'a, str>>,
        slot: impl Into<Slot<'a>>,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            slot: slot.into(),
        }
    }

    /// Field name as declared in the record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw tag text.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Semantic kind of the field.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.slot.kind()
    }

    /// Flag name derived from the field name, see [`flag_name`].
    #[must_use]
    pub fn flag_name(&self) -> String {
        flag_name(&self.name)
    }

    /// Whether this is the text field that receives the usage string.
    #[must_use]
    pub fn is_usage(&self) -> bool {
        self.name == USAGE_FIELD && matches!(self.slot, Slot::Text(_))
    }

    pub(crate) const fn slot(&self) -> &Slot<'a> {
        &self.slot
    }

    pub(crate) const fn slot_mut(&mut self) -> &mut Slot<'a> {
        &mut self.slot
    }
}

/// Ordered field table returned by [`FlagRecord::fields`].
#[derive(Debug, Default)]
pub struct Fields<'a> {
    entries: Vec<Field<'a>>,
}

impl<'a> Fields<'a> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a field described by `name`, `tag` and its storage.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<Cow<'a, str>>,
        tag: impl Into<Cow<'a, str>>,
        slot: impl Into<Slot<'a>>,
    ) -> Self {
        self.entries.push(Field::new(name, tag, slot));
        self
    }

    /// Appends an already built field.
    pub fn push(&mut self, field: Field<'a>) {
        self.entries.push(field);
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the fields in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Field<'a>> {
        self.entries.iter()
    }

    pub(crate) fn into_entries(self) -> Vec<Field<'a>> {
        self.entries
    }
}

impl<'a> IntoIterator for Fields<'a> {
    type Item = Field<'a>;
    type IntoIter = std::vec::IntoIter<Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, 'b> IntoIterator for &'b Fields<'a> {
    type Item = &'b Field<'a>;
    type IntoIter = std::slice::Iter<'b, Field<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> Extend<Field<'a>> for Fields<'a> {
    fn extend<T: IntoIterator<Item = Field<'a>>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

/// Derives the command-line flag name for a field name.
///
/// A single trailing underscore requests a lower-case flag: it is removed and
/// the first character is lower-cased. Other names are used verbatim.
///
/// ```
/// use tagflag::flag_name;
///
/// assert_eq!(flag_name("Iq_"), "iq");
/// assert_eq!(flag_name("SomeFile"), "SomeFile");
/// ```
#[must_use]
pub fn flag_name(field_name: &str) -> String {
    let Some(stem) = field_name.strip_suffix('_') else {
        return field_name.to_owned();
    };
    let mut chars = stem.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Whether `field_name` is visible to the binder.
///
/// Names must start with an upper-case character; others are treated as
/// private and never bound.
#[must_use]
pub fn is_visible_name(field_name: &str) -> bool {
    field_name.chars().next().is_some_and(char::is_uppercase)
}
