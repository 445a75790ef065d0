use crate::{
    error::WriteError,
    validate::{ConstraintViolation, ViolationList},
};

///
/// WriteContext
///
/// Per-write aggregation of violations across every field of every entity
/// in the payload. Serializers only ever add to it.
///

#[derive(Debug, Default)]
pub struct WriteContext {
    violations: ViolationList,
}

impl WriteContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: ViolationList::new(),
        }
    }

    /// Record violations; returns how many were added.
    pub fn add_violations(
        &mut self,
        violations: impl IntoIterator<Item = ConstraintViolation>,
    ) -> usize {
        let before = self.violations.len();
        self.violations.extend(violations);

        self.violations.len() - before
    }

    #[must_use]
    pub const fn violations(&self) -> &ViolationList {
        &self.violations
    }

    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Close the write: any collected violation rejects it.
    pub fn into_result(self) -> Result<(), WriteError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(WriteError::ConstraintViolations(self.violations))
        }
    }
}
