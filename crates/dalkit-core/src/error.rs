use crate::{model::field::FieldKindTag, validate::ViolationList};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Raised for faults the write pipeline must not recover from.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `origin`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct a serialize-origin invariant violation.
    pub(crate) fn serialize_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Serialize,
            message,
        )
    }

    /// Construct a write-origin internal error.
    pub(crate) fn write_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Write, message)
    }

    #[must_use]
    pub const fn is_serializer_mismatch(&self) -> bool {
        matches!(
            self.detail,
            Some(ErrorDetail::Serializer(
                SerializerError::InvalidSerializerField { .. }
            ))
        )
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<SerializerError> for InternalError {
    fn from(err: SerializerError) -> Self {
        let mut internal = Self::serialize_invariant(err.to_string());
        internal.detail = Some(ErrorDetail::Serializer(err));

        internal
    }
}

///
/// ErrorDetail
///
/// Structured, origin-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Serializer(SerializerError),
}

///
/// SerializerError
///
/// Serializer wiring faults. Never returned directly; always wrapped in
/// [`ErrorDetail::Serializer`].
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SerializerError {
    #[error("expected field of kind \"{expected}\" but field \"{field}\" is of kind \"{actual}\"")]
    InvalidSerializerField {
        expected: FieldKindTag,
        actual: FieldKindTag,
        field: String,
    },
}

///
/// WriteError
///
/// Outcome of a write whose collected violations made the pipeline abort.
///

#[derive(Debug, ThisError)]
pub enum WriteError {
    #[error("write rejected with {} constraint violation(s)", .0.len())]
    ConstraintViolations(ViolationList),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl WriteError {
    #[must_use]
    pub const fn violations(&self) -> Option<&ViolationList> {
        match self {
            Self::ConstraintViolations(list) => Some(list),
            Self::Internal(_) => None,
        }
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Internal,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Internal => "internal",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Serialize,
    Write,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Serialize => "serialize",
            Self::Write => "write",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
