//! Write-time inputs handed to serializers by the write pipeline.

mod context;

#[cfg(test)]
mod tests;

pub use context::WriteContext;

use crate::{
    SYSTEM_LANGUAGE_ID,
    error::InternalError,
    model::field::FieldModel,
    serializer::{EncodedColumn, FieldSerializer},
    value::Value,
};

///
/// KeyValuePair
///
/// One property being written. Serializers may overwrite `value` in place
/// but never keep it beyond the call.
///

#[derive(Clone, Debug, PartialEq)]
pub struct KeyValuePair {
    pub key: String,
    pub value: Value,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}

///
/// EntityExistence
///
/// Where the row stands before this write. Serializers only use it to decide
/// whether null values must be validated.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntityExistence {
    pub entity_name: String,
    /// `true` for updates, `false` for inserts.
    pub exists: bool,
    /// Row inherits unset values from a parent row.
    pub child: bool,
    /// Row belongs to a translation entity.
    pub translation: bool,
}

impl EntityExistence {
    pub fn insert(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            ..Self::default()
        }
    }

    pub fn update(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            exists: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn as_child(mut self) -> Self {
        self.child = true;
        self
    }

    #[must_use]
    pub fn as_translation(mut self) -> Self {
        self.translation = true;
        self
    }
}

///
/// WriteParameterBag
///
/// Ambient context of one write operation.
///

#[derive(Debug)]
pub struct WriteParameterBag {
    /// Location of the current entity in the payload, e.g. `/0`.
    pub path: String,
    pub language_id: String,
    pub context: WriteContext,
}

impl WriteParameterBag {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            language_id: SYSTEM_LANGUAGE_ID.to_string(),
            context: WriteContext::new(),
        }
    }

    #[must_use]
    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = language_id.into();
        self
    }

    #[must_use]
    pub fn is_system_language(&self) -> bool {
        self.language_id == SYSTEM_LANGUAGE_ID
    }

    /// Property path a violation on `key` is reported under.
    #[must_use]
    pub fn property_path(&self, key: &str) -> String {
        format!("{}/{key}", self.path)
    }
}

impl Default for WriteParameterBag {
    fn default() -> Self {
        Self::new("")
    }
}

///
/// encode_fields
///
/// Run a serializer over every pair of one entity, in pair order.
///
/// Violations are aggregated into `params.context` and never stop the loop.
/// A pair without a registered field, or a fatal serializer error, aborts.
///
pub fn encode_fields<S: FieldSerializer + ?Sized>(
    serializer: &S,
    fields: &[FieldModel],
    existence: &EntityExistence,
    pairs: &mut [KeyValuePair],
    params: &mut WriteParameterBag,
) -> Result<Vec<EncodedColumn>, InternalError> {
    let mut columns = Vec::with_capacity(pairs.len());

    for pair in pairs.iter_mut() {
        let field = fields
            .iter()
            .find(|field| field.name == pair.key)
            .ok_or_else(|| {
                InternalError::write_internal(format!(
                    "no field registered for key '{}' on entity '{}'",
                    pair.key, existence.entity_name
                ))
            })?;

        columns.push(serializer.encode(field, existence, pair, params)?);
    }

    Ok(columns)
}
