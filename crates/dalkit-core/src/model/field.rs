use crate::DEFAULT_STRING_MAX_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// FieldModel
/// Runtime field metadata used by serializers and validation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Property name as used in write payloads.
    pub name: String,
    /// Column the encoded value is stored under.
    pub storage_name: String,
    /// Tagged storage kind; serializers dispatch on this.
    pub kind: FieldKind,
    pub flags: FieldFlags,
}

impl FieldModel {
    /// Build a field whose storage name equals its property name.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let name = name.into();

        Self {
            storage_name: name.clone(),
            name,
            kind,
            flags: FieldFlags::default(),
        }
    }

    /// String field with the default max length.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::string())
    }

    #[must_use]
    pub fn with_storage_name(mut self, storage_name: impl Into<String>) -> Self {
        self.storage_name = storage_name.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FieldFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags = self.flags.with(flag);
        self
    }

    #[must_use]
    pub const fn is(&self, flag: Flag) -> bool {
        self.flags.is(flag)
    }

    /// Max length for string kinds, `None` for every other kind.
    #[must_use]
    pub const fn max_length(&self) -> Option<usize> {
        match self.kind {
            FieldKind::String { max_length } => Some(max_length),
            _ => None,
        }
    }
}

///
/// FieldKind
///
/// Storage kind of a field. Each kind is handled by exactly one serializer.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum FieldKind {
    Bool,
    Date,
    Float,
    Id,
    Int,
    Json,
    LongText,
    String { max_length: usize },
}

impl FieldKind {
    #[must_use]
    pub const fn string() -> Self {
        Self::String {
            max_length: DEFAULT_STRING_MAX_LENGTH,
        }
    }

    #[must_use]
    pub const fn string_with_max(max_length: usize) -> Self {
        Self::String { max_length }
    }

    #[must_use]
    pub const fn tag(&self) -> FieldKindTag {
        match self {
            Self::Bool => FieldKindTag::Bool,
            Self::Date => FieldKindTag::Date,
            Self::Float => FieldKindTag::Float,
            Self::Id => FieldKindTag::Id,
            Self::Int => FieldKindTag::Int,
            Self::Json => FieldKindTag::Json,
            Self::LongText => FieldKindTag::LongText,
            Self::String { .. } => FieldKindTag::String,
        }
    }
}

///
/// FieldKindTag
/// Payload-free discriminant of [`FieldKind`], used in errors and config.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum FieldKindTag {
    Bool,
    Date,
    Float,
    Id,
    Int,
    Json,
    LongText,
    String,
}

impl fmt::Display for FieldKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Float => "float",
            Self::Id => "id",
            Self::Int => "int",
            Self::Json => "json",
            Self::LongText => "long_text",
            Self::String => "string",
        };
        write!(f, "{label}")
    }
}

///
/// Flag
/// Named capability toggles that alter normalization and validation.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    AllowEmptyString,
    AllowHtml,
    Inherited,
    Required,
}

///
/// FieldFlags
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldFlags {
    /// Keep `""` instead of normalizing it to null; disables `NotBlank`.
    pub allow_empty_string: bool,
    /// Keep markup instead of stripping tags.
    pub allow_html: bool,
    /// Null values are validated even when the write omits them.
    pub required: bool,
    /// Value may be inherited from a parent row.
    pub inherited: bool,
}

impl FieldFlags {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_empty_string: false,
            allow_html: false,
            required: false,
            inherited: false,
        }
    }

    #[must_use]
    pub const fn is(&self, flag: Flag) -> bool {
        match flag {
            Flag::AllowEmptyString => self.allow_empty_string,
            Flag::AllowHtml => self.allow_html,
            Flag::Inherited => self.inherited,
            Flag::Required => self.required,
        }
    }

    #[must_use]
    pub const fn with(mut self, flag: Flag) -> Self {
        match flag {
            Flag::AllowEmptyString => self.allow_empty_string = true,
            Flag::AllowHtml => self.allow_html = true,
            Flag::Inherited => self.inherited = true,
            Flag::Required => self.required = true,
        }
        self
    }
}

impl FromIterator<Flag> for FieldFlags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_field_defaults() {
        let field = FieldModel::string("title");

        assert_eq!(field.storage_name, "title");
        assert_eq!(field.max_length(), Some(DEFAULT_STRING_MAX_LENGTH));
        assert_eq!(field.flags, FieldFlags::default());
    }

    #[test]
    fn flags_collect_from_iterator() {
        let flags: FieldFlags = [Flag::AllowHtml, Flag::Required].into_iter().collect();

        assert!(flags.is(Flag::AllowHtml));
        assert!(flags.is(Flag::Required));
        assert!(!flags.is(Flag::AllowEmptyString));
        assert!(!flags.is(Flag::Inherited));
    }

    #[test]
    fn non_string_kinds_have_no_max_length() {
        let field = FieldModel::new("stock", FieldKind::Int);

        assert_eq!(field.max_length(), None);
        assert_eq!(field.kind.tag(), FieldKindTag::Int);
    }

    #[test]
    fn storage_name_override() {
        let field = FieldModel::string("metaTitle").with_storage_name("meta_title");

        assert_eq!(field.name, "metaTitle");
        assert_eq!(field.storage_name, "meta_title");
    }
}
