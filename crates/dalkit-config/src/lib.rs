//! Schema-registration config for dalkit.
//!
//! Field descriptors are declared once in TOML and materialized into
//! immutable [`FieldModel`]s that serializers read during writes.

mod error;
mod schema;

pub use error::ConfigError;
pub use schema::{EntityConfig, FieldConfig, SchemaConfig};

use dalkit_core::model::field::FieldModel;
use std::{fs, path::Path};

/// Parse and validate a schema document.
pub fn load_str(source: &str) -> Result<SchemaConfig, ConfigError> {
    let config: SchemaConfig = toml::from_str(source)?;
    config.validate()?;

    tracing::debug!(entities = config.entities.len(), "schema config loaded");

    Ok(config)
}

/// Read, parse and validate a schema document from disk.
pub fn load_path(path: impl AsRef<Path>) -> Result<SchemaConfig, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    load_str(&source)
}

/// Field models of one entity, or `None` if the entity is not declared.
#[must_use]
pub fn entity_fields(config: &SchemaConfig, entity: &str) -> Option<Vec<FieldModel>> {
    config.entity(entity).map(EntityConfig::fields)
}
