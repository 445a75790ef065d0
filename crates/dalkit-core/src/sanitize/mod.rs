//! Value sanitizers applied by serializers before storage.
//!
//! Sanitization is total and non-failing: a sanitizer rewrites its input in
//! place and never rejects it. Rejection is the job of `validate`.

mod html;

pub use html::{StripTags, strip_tags};

use crate::value::Value;

///
/// Sanitizer
///

pub trait Sanitizer<T: ?Sized> {
    fn sanitize(&self, value: &mut T);
}

///
/// EmptyToNull
/// Rewrites `""` to null. Every other value is left untouched.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyToNull;

impl Sanitizer<Value> for EmptyToNull {
    fn sanitize(&self, value: &mut Value) {
        if value.is_empty_text() {
            *value = Value::Null;
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_to_null_only_touches_empty_text() {
        let mut v = Value::text("");
        EmptyToNull.sanitize(&mut v);
        assert_eq!(v, Value::Null);

        let mut v = Value::text(" ");
        EmptyToNull.sanitize(&mut v);
        assert_eq!(v, Value::text(" "));

        let mut v = Value::Bool(false);
        EmptyToNull.sanitize(&mut v);
        assert_eq!(v, Value::Bool(false));
    }
}
