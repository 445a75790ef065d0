//! Field serializers: per-kind encode/decode between write payload values
//! and storage columns.

pub mod string;

use crate::{
    error::InternalError,
    model::field::{FieldModel, Flag},
    obs::sink::{MetricsEvent, record},
    validate::{Constraint, ConstraintValidator, ViolationList},
    value::Value,
    write::{EntityExistence, KeyValuePair, WriteParameterBag},
};

///
/// EncodedColumn
/// The single storage column one field encodes to.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncodedColumn {
    pub storage_name: String,
    pub value: Option<String>,
}

impl EncodedColumn {
    pub fn new(storage_name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            storage_name: storage_name.into(),
            value,
        }
    }

    /// `(column, value)` view for statement builders.
    #[must_use]
    pub fn as_pair(&self) -> (&str, Option<&str>) {
        (&self.storage_name, self.value.as_deref())
    }
}

///
/// FieldSerializer
///
/// Encodes one field of one entity write and decodes stored values back.
///
/// `encode` fails only for wiring faults; bad input is reported as
/// violations through `params.context` and encoding still completes.
///

pub trait FieldSerializer {
    /// Decoded representation handed back to readers.
    type Output;

    fn encode(
        &self,
        field: &FieldModel,
        existence: &EntityExistence,
        pair: &mut KeyValuePair,
        params: &mut WriteParameterBag,
    ) -> Result<EncodedColumn, InternalError>;

    fn decode(&self, field: &FieldModel, value: Option<String>) -> Option<Self::Output>;

    /// Constraints every validated value of `field` must satisfy.
    fn constraints(&self, field: &FieldModel) -> Vec<Constraint>;

    fn validator(&self) -> &dyn ConstraintValidator;

    /// Non-null values are always validated. Null values are skipped when
    /// they will be inherited from a parent row, or when a translation is
    /// written in a non-system language; otherwise only required fields
    /// validate them.
    fn requires_validation(
        &self,
        field: &FieldModel,
        existence: &EntityExistence,
        value: &Value,
        params: &WriteParameterBag,
    ) -> bool {
        if !value.is_null() {
            return true;
        }

        if existence.child && field.is(Flag::Inherited) {
            return false;
        }

        if existence.translation && !params.is_system_language() {
            return false;
        }

        field.is(Flag::Required)
    }

    /// Validate the pair's current value and attribute violations to the
    /// pair's property path. Violations whose code `reported` already holds
    /// for that path are dropped. Returns the violations recorded.
    fn validate_if_needed(
        &self,
        field: &FieldModel,
        existence: &EntityExistence,
        pair: &KeyValuePair,
        params: &mut WriteParameterBag,
        reported: &ViolationList,
    ) -> ViolationList {
        if !self.requires_validation(field, existence, &pair.value, params) {
            return ViolationList::new();
        }

        let path = params.property_path(&pair.key);
        let violations: ViolationList = self
            .validator()
            .validate_all(&pair.value, &self.constraints(field))
            .into_iter()
            .map(|violation| violation.at(path.clone()))
            .filter(|violation| !reported.reports(violation.code, &violation.property_path))
            .collect();

        if !violations.is_empty() {
            let added = params.context.add_violations(violations.iter().cloned());
            tracing::debug!(field = %field.name, %path, added, "constraint violations recorded");
            record(MetricsEvent::ViolationsReported {
                field: &field.name,
                count: added,
            });
        }

        violations
    }
}
