use crate::{sanitize::Sanitizer, value::Value};
use regex::Regex;
use std::sync::LazyLock;

// A tag opens with `<` that is not followed by whitespace and runs to the
// next `>` or the end of input. Comments may contain `>`.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?(?:-->|\z)|<(?:[^\s>][^>]*)?(?:>|\z)")
        .expect("tag pattern is a valid regex")
});

///
/// strip_tags
/// Remove markup tags and comments, keeping text content.
///
/// A `<` followed by whitespace is treated as text, so `a < b` survives.
/// Every `<` left in the output is followed by whitespace, which makes a
/// second pass a no-op.
///
#[must_use]
pub fn strip_tags(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }

    TAG_PATTERN.replace_all(input, "").into_owned()
}

///
/// StripTags
///

#[derive(Clone, Copy, Debug, Default)]
pub struct StripTags;

impl Sanitizer<String> for StripTags {
    fn sanitize(&self, value: &mut String) {
        if value.contains('<') {
            *value = strip_tags(value);
        }
    }
}

// Non-null scalars are coerced to text by this step.
impl Sanitizer<Value> for StripTags {
    fn sanitize(&self, value: &mut Value) {
        if let Some(mut text) = value.string_form() {
            self.sanitize(&mut text);
            *value = Value::Text(text);
        }
    }
}

///
/// TESTS
///
