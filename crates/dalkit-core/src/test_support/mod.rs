//! Shared fixtures for serializer and write tests.

use crate::{
    model::field::{FieldKind, FieldModel, Flag},
    write::{EntityExistence, KeyValuePair, WriteParameterBag},
};

pub(crate) const ENTITY: &str = "product";

/// `title`: max 10, no markup, no empty string, required.
pub(crate) fn title_field() -> FieldModel {
    FieldModel::new("title", FieldKind::string_with_max(10)).with_flag(Flag::Required)
}

/// `note`: empty string and markup allowed.
pub(crate) fn note_field() -> FieldModel {
    FieldModel::string("note")
        .with_flag(Flag::AllowEmptyString)
        .with_flag(Flag::AllowHtml)
}

/// `description`: optional, default length, no markup.
pub(crate) fn description_field() -> FieldModel {
    FieldModel::string("description").with_storage_name("description_text")
}

pub(crate) fn insert() -> EntityExistence {
    EntityExistence::insert(ENTITY)
}

pub(crate) fn params() -> WriteParameterBag {
    WriteParameterBag::new("/0")
}

pub(crate) fn pair(key: &str, value: impl Into<crate::value::Value>) -> KeyValuePair {
    KeyValuePair::new(key, value)
}
