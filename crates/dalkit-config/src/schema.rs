use crate::ConfigError;
use dalkit_core::{
    DEFAULT_STRING_MAX_LENGTH,
    model::field::{FieldKind, FieldKindTag, FieldModel, Flag},
};
use serde::Deserialize;
use std::collections::BTreeSet;

///
/// SchemaConfig
///

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    #[serde(default, rename = "entity")]
    pub entities: Vec<EntityConfig>,
}

impl SchemaConfig {
    #[must_use]
    pub fn entity(&self, name: &str) -> Option<&EntityConfig> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let mut names = BTreeSet::new();

        for entity in &self.entities {
            if entity.name.is_empty() {
                return Err(ConfigError::invalid("entity name must not be empty"));
            }
            if !names.insert(entity.name.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate entity '{}'",
                    entity.name
                )));
            }

            entity.validate()?;
        }

        Ok(())
    }
}

///
/// EntityConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityConfig {
    pub name: String,
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldConfig>,
}

impl EntityConfig {
    /// Materialize the declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> Vec<FieldModel> {
        self.fields.iter().map(FieldConfig::to_model).collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut names = BTreeSet::new();
        let mut columns = BTreeSet::new();

        for field in &self.fields {
            let at = format!("{}.{}", self.name, field.name);

            if field.name.is_empty() {
                return Err(ConfigError::invalid(format!(
                    "entity '{}' has a field without a name",
                    self.name
                )));
            }
            if !names.insert(field.name.as_str()) {
                return Err(ConfigError::invalid(format!("duplicate field '{at}'")));
            }
            if !columns.insert(field.storage_name()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate storage name '{}' at '{at}'",
                    field.storage_name()
                )));
            }

            match (field.kind, field.max_length) {
                (FieldKindTag::String, Some(0)) => {
                    return Err(ConfigError::invalid(format!(
                        "max_length of '{at}' must be positive"
                    )));
                }
                (FieldKindTag::String, _) | (_, None) => {}
                (kind, Some(_)) => {
                    return Err(ConfigError::invalid(format!(
                        "max_length is only valid on string fields, '{at}' is {kind}"
                    )));
                }
            }
        }

        Ok(())
    }
}

///
/// FieldConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    /// Defaults to `name`.
    #[serde(default)]
    pub storage_name: Option<String>,
    pub kind: FieldKindTag,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub flags: Vec<Flag>,
}

impl FieldConfig {
    #[must_use]
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn to_model(&self) -> FieldModel {
        let kind = match self.kind {
            FieldKindTag::Bool => FieldKind::Bool,
            FieldKindTag::Date => FieldKind::Date,
            FieldKindTag::Float => FieldKind::Float,
            FieldKindTag::Id => FieldKind::Id,
            FieldKindTag::Int => FieldKind::Int,
            FieldKindTag::Json => FieldKind::Json,
            FieldKindTag::LongText => FieldKind::LongText,
            FieldKindTag::String => {
                FieldKind::string_with_max(self.max_length.unwrap_or(DEFAULT_STRING_MAX_LENGTH))
            }
        };

        FieldModel::new(self.name.clone(), kind)
            .with_storage_name(self.storage_name())
            .with_flags(self.flags.iter().copied().collect())
    }
}
