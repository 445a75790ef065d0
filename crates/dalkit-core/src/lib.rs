//! Core runtime for dalkit: field descriptors, write-time inputs, constraint
//! validation, markup sanitizing, and the field serializers that turn raw
//! write payload values into storage columns.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod model;
pub mod obs;
pub mod sanitize;
pub mod serializer;
pub mod validate;
pub mod value;
pub mod write;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Language id of the system (default) language.
///
/// Translation rows written in any other language may leave fields null
/// without tripping `required` validation.
pub const SYSTEM_LANGUAGE_ID: &str = "2fbb5fe2e29a4d70aa5854ce7ce3e20b";

/// Default maximum character length of a string column.
pub const DEFAULT_STRING_MAX_LENGTH: usize = 255;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::field::{FieldFlags, FieldKind, FieldModel, Flag},
        serializer::{EncodedColumn, FieldSerializer, string::StringFieldSerializer},
        value::Value,
        write::{EntityExistence, KeyValuePair, WriteParameterBag},
    };
}
