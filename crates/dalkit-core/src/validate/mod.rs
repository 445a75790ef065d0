//! Constraint validation.
//!
//! Validation is non-failing at the call level: a validator reports every
//! violation it finds and the caller decides what to do with them.

mod constraint;
mod violation;


pub use constraint::{Constraint, codes};
pub use violation::{ConstraintViolation, ViolationList};

use crate::value::Value;
use std::collections::BTreeMap;

///
/// ConstraintValidator
///
/// Executes one constraint against one value.
/// Violations come back unattributed; the caller pins them to a path.
///

pub trait ConstraintValidator {
    fn validate(&self, value: &Value, constraint: &Constraint) -> Vec<ConstraintViolation>;

    /// Run every constraint in order and collect all violations.
    fn validate_all(&self, value: &Value, constraints: &[Constraint]) -> Vec<ConstraintViolation> {
        constraints
            .iter()
            .flat_map(|constraint| self.validate(value, constraint))
            .collect()
    }
}

///
/// DefaultValidator
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultValidator;

impl DefaultValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConstraintValidator for DefaultValidator {
    fn validate(&self, value: &Value, constraint: &Constraint) -> Vec<ConstraintViolation> {
        let violation = match constraint {
            Constraint::Length { max } => validate_length(value, *max),
            Constraint::NotBlank => validate_not_blank(value),
            Constraint::Type(expected) => {
                if value.is_null() || value.value_type() == *expected {
                    None
                } else {
                    Some(ConstraintViolation::new(
                        codes::INVALID_TYPE,
                        "This value should be of type {{ type }}.",
                        params([
                            ("{{ value }}", quote(value)),
                            ("{{ type }}", expected.to_string()),
                        ]),
                        value.clone(),
                    ))
                }
            }
        };

        violation.into_iter().collect()
    }
}

fn validate_length(value: &Value, max: usize) -> Option<ConstraintViolation> {
    let len = value.string_form()?.chars().count();
    if len <= max {
        return None;
    }

    let template = if max == 1 {
        "This value is too long. It should have {{ limit }} character or less."
    } else {
        "This value is too long. It should have {{ limit }} characters or less."
    };

    Some(ConstraintViolation::new(
        codes::TOO_LONG,
        template,
        params([("{{ value }}", quote(value)), ("{{ limit }}", max.to_string())]),
        value.clone(),
    ))
}

fn validate_not_blank(value: &Value) -> Option<ConstraintViolation> {
    value.is_blank().then(|| {
        ConstraintViolation::new(
            codes::IS_BLANK,
            "This value should not be blank.",
            params([("{{ value }}", quote(value))]),
            value.clone(),
        )
    })
}

fn params<const N: usize>(pairs: [(&'static str, String); N]) -> BTreeMap<&'static str, String> {
    pairs.into_iter().collect()
}

fn quote(value: &Value) -> String {
    value.to_string()
}
