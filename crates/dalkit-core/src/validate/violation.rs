use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use std::{collections::BTreeMap, fmt};

///
/// ConstraintViolation
///
/// Structured report that a value failed one constraint.
/// `property_path` is empty until the violation is attributed to a field.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintViolation {
    pub code: &'static str,
    pub message_template: &'static str,
    pub message: String,
    pub parameters: BTreeMap<&'static str, String>,
    pub property_path: String,
    pub invalid_value: Value,
}

impl ConstraintViolation {
    pub fn new(
        code: &'static str,
        message_template: &'static str,
        parameters: BTreeMap<&'static str, String>,
        invalid_value: Value,
    ) -> Self {
        let message = render(message_template, &parameters);

        Self {
            code,
            message_template,
            message,
            parameters,
            property_path: String::new(),
            invalid_value,
        }
    }

    /// Pin the violation to a property path.
    #[must_use]
    pub fn at(mut self, property_path: impl Into<String>) -> Self {
        self.property_path = property_path.into();
        self
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.property_path, self.message)
        }
    }
}

fn render(template: &str, parameters: &BTreeMap<&'static str, String>) -> String {
    parameters
        .iter()
        .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value))
}

///
/// ViolationList
/// Ordered violations, as collected across one or more fields.
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct ViolationList(Vec<ConstraintViolation>);

impl ViolationList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: ConstraintViolation) {
        self.0.push(violation);
    }

    /// Whether a violation with `code` is already recorded at `property_path`.
    #[must_use]
    pub fn reports(&self, code: &str, property_path: &str) -> bool {
        self.0
            .iter()
            .any(|v| v.code == code && v.property_path == property_path)
    }

    /// Messages grouped by property path.
    #[must_use]
    pub fn by_path(&self) -> BTreeMap<String, Vec<String>> {
        let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in &self.0 {
            out.entry(violation.property_path.clone())
                .or_default()
                .push(violation.message.clone());
        }

        out
    }

    #[must_use]
    pub fn for_path(&self, property_path: &str) -> Vec<&ConstraintViolation> {
        self.0
            .iter()
            .filter(|v| v.property_path == property_path)
            .collect()
    }
}

impl Extend<ConstraintViolation> for ViolationList {
    fn extend<I: IntoIterator<Item = ConstraintViolation>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<ConstraintViolation> for ViolationList {
    fn from_iter<I: IntoIterator<Item = ConstraintViolation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
