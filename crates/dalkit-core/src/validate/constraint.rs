use crate::value::ValueType;
use std::fmt;

///
/// Constraint
/// One rule a field value must satisfy.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum Constraint {
    /// Character count of the value's string form must not exceed `max`.
    Length { max: usize },
    /// Null, `""` and `false` are rejected.
    NotBlank,
    /// Non-null values must be of the given type.
    Type(ValueType),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { max } => write!(f, "length(max={max})"),
            Self::NotBlank => write!(f, "not_blank"),
            Self::Type(ty) => write!(f, "type({ty})"),
        }
    }
}

///
/// codes
/// Stable violation codes, one per failure kind.
///

pub mod codes {
    pub const INVALID_TYPE: &str = "ba785a8c-82cb-4283-967c-3cf342181b40";
    pub const IS_BLANK: &str = "c1051bb4-d103-4f74-8988-acbcafc7fdc3";
    pub const TOO_LONG: &str = "d94b19cc-114f-4f44-9cc4-4138e80a87b2";
}
