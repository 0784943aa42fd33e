//! Classification of a record's fields before anything is registered.

use super::usage::UsageLine;
use crate::engine::FlagSpec;
use crate::error::{FlagError, FlagResult};
use crate::record::{Field, FieldKind, USAGE_FIELD, is_visible_name};
use crate::tag::interpret_tag_with;
use crate::value::{ScalarKind, ScalarValue};

/// A field that will be registered as a flag.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    /// Position of the field in the table.
    pub index: usize,
    /// Whether the field is optional and only written when visited.
    pub optional: bool,
    pub spec: FlagSpec,
}

/// What the binder will do with each field of one record.
#[derive(Debug, Default)]
pub(crate) struct BindPlan {
    /// Index of the usage field and its trimmed tag.
    pub usage: Option<(usize, String)>,
    /// Index of the leftover-arguments field.
    pub leftover: Option<usize>,
    pub bindings: Vec<Binding>,
    pub usage_lines: Vec<UsageLine>,
    /// Whether any boolean flag is registered.
    pub has_boolean: bool,
}

impl BindPlan {
    /// Walks `fields` in order and classifies each one.
    ///
    /// `delimiter` is the split character for tags that do not pick their own.
    pub(crate) fn build(fields: &[Field<'_>], delimiter: char) -> FlagResult<Self> {
        let mut plan = Self::default();
        for (index, field) in fields.iter().enumerate() {
            plan.classify(index, field, fields, delimiter)?;
        }
        Ok(plan)
    }

    fn classify(
        &mut self,
        index: usize,
        field: &Field<'_>,
        fields: &[Field<'_>],
        delimiter: char,
    ) -> FlagResult<()> {
        let name = field.name();
        if name == USAGE_FIELD {
            if field.is_usage() {
                self.usage = Some((index, field.tag().trim().to_owned()));
            } else {
                tracing::debug!(
                    field = name,
                    kind = field.kind().type_tag(),
                    "non-text usage field skipped"
                );
            }
            return Ok(());
        }
        let kind = field.kind();
        if kind == FieldKind::TextList {
            return self.claim_leftover(index, field, fields);
        }
        if !is_visible_name(name) {
            tracing::trace!(field = name, "field name is not visible; skipped");
            return Ok(());
        }
        let scalar = match kind {
            FieldKind::TextList => return Ok(()),
            FieldKind::Optional(_) if field.slot().is_present() => {
                tracing::debug!(field = name, "optional field already set; skipped");
                return Ok(());
            }
            FieldKind::Scalar(scalar) | FieldKind::Optional(scalar) => scalar,
        };
        let Some(parts) = interpret_tag_with(field.tag(), delimiter) else {
            tracing::trace!(field = name, "blank tag; skipped");
            return Ok(());
        };

        let flag = field.flag_name();
        let optional = matches!(kind, FieldKind::Optional(_));
        let default = if optional {
            ScalarValue::zero(scalar)
        } else if parts.has_default {
            ScalarValue::from_default_text(scalar, &parts.default_text)
        } else {
            field
                .slot()
                .current()
                .unwrap_or_else(|| ScalarValue::zero(scalar))
        };
        if !optional && parts.has_default {
            self.usage_lines.push(UsageLine {
                flag: flag.clone(),
                default_text: parts.default_text,
                type_tag: kind.type_tag(),
                description: parts.description.clone(),
            });
        }
        self.has_boolean |= scalar == ScalarKind::Bool;
        self.bindings.push(Binding {
            index,
            optional,
            spec: FlagSpec {
                name: flag,
                field: name.to_owned(),
                kind: scalar,
                default,
                description: parts.description,
            },
        });
        Ok(())
    }

    fn claim_leftover(
        &mut self,
        index: usize,
        field: &Field<'_>,
        fields: &[Field<'_>],
    ) -> FlagResult<()> {
        if let Some(first) = self.leftover.and_then(|claimed| fields.get(claimed)) {
            return Err(FlagError::MultipleLeftover {
                first: first.name().to_owned(),
                second: field.name().to_owned(),
            });
        }
        self.leftover = Some(index);
        Ok(())
    }
}
