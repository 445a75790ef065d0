use crate::{
    error::{InternalError, SerializerError},
    model::field::{FieldKind, FieldKindTag, FieldModel, Flag},
    obs::sink::{MetricsEvent, record},
    sanitize::{EmptyToNull, Sanitizer, StripTags},
    serializer::{EncodedColumn, FieldSerializer},
    validate::{Constraint, ConstraintValidator, DefaultValidator, ViolationList},
    value::ValueType,
    write::{EntityExistence, KeyValuePair, WriteParameterBag},
};

///
/// StringFieldSerializer
///
/// Encoder for `FieldKind::String` columns.
///
/// Encoding runs, in order: type guard, empty-to-null, validation, tag
/// stripping, validation again. Stripping can change length and blankness,
/// so the second pass re-checks the stored form.
///

#[derive(Clone, Debug, Default)]
pub struct StringFieldSerializer<V = DefaultValidator> {
    validator: V,
}

impl StringFieldSerializer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validator: DefaultValidator::new(),
        }
    }
}

impl<V: ConstraintValidator> StringFieldSerializer<V> {
    pub const fn with_validator(validator: V) -> Self {
        Self { validator }
    }
}

impl<V: ConstraintValidator> FieldSerializer for StringFieldSerializer<V> {
    type Output = String;

    fn encode(
        &self,
        field: &FieldModel,
        existence: &EntityExistence,
        pair: &mut KeyValuePair,
        params: &mut WriteParameterBag,
    ) -> Result<EncodedColumn, InternalError> {
        if !matches!(field.kind, FieldKind::String { .. }) {
            let actual = field.kind.tag();
            tracing::warn!(field = %field.name, %actual, "string serializer wired to non-string field");
            record(MetricsEvent::SerializerMismatch { field: &field.name });

            return Err(SerializerError::InvalidSerializerField {
                expected: FieldKindTag::String,
                actual,
                field: field.name.clone(),
            }
            .into());
        }

        record(MetricsEvent::EncodeStart { field: &field.name });
        tracing::debug!(
            entity = %existence.entity_name,
            field = %field.name,
            storage = %field.storage_name,
            "encoding string field"
        );

        let allow_empty = field.is(Flag::AllowEmptyString);
        if !allow_empty {
            normalize_empty(field, pair);
        }

        let first = self.validate_if_needed(field, existence, pair, params, &ViolationList::new());

        if !pair.value.is_null() && !field.is(Flag::AllowHtml) {
            let before = pair.value.string_form();
            StripTags.sanitize(&mut pair.value);

            if pair.value.as_text() != before.as_deref() {
                tracing::debug!(field = %field.name, "markup stripped");
                record(MetricsEvent::MarkupStripped { field: &field.name });
            }

            // markup-only input must not leave "" behind
            if !allow_empty {
                normalize_empty(field, pair);
            }
        }

        // a field reports each failing constraint at most once
        let second = self.validate_if_needed(field, existence, pair, params, &first);

        record(MetricsEvent::EncodeFinish {
            field: &field.name,
            violations: first.len() + second.len(),
        });

        Ok(EncodedColumn::new(
            field.storage_name.clone(),
            pair.value.string_form(),
        ))
    }

    fn decode(&self, _field: &FieldModel, value: Option<String>) -> Option<String> {
        value
    }

    fn constraints(&self, field: &FieldModel) -> Vec<Constraint> {
        let mut constraints = vec![Constraint::Type(ValueType::String)];

        if let Some(max) = field.max_length() {
            constraints.push(Constraint::Length { max });
        }

        if !field.is(Flag::AllowEmptyString) {
            constraints.push(Constraint::NotBlank);
        }

        constraints
    }

    fn validator(&self) -> &dyn ConstraintValidator {
        &self.validator
    }
}

fn normalize_empty(field: &FieldModel, pair: &mut KeyValuePair) {
    if pair.value.is_empty_text() {
        EmptyToNull.sanitize(&mut pair.value);
        record(MetricsEvent::EmptyNormalized { field: &field.name });
    }
}
