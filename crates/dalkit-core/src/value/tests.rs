use super::*;

#[test]
fn string_form_of_scalars() {
    assert_eq!(Value::text("abc").string_form().as_deref(), Some("abc"));
    assert_eq!(Value::Int(-42).string_form().as_deref(), Some("-42"));
    assert_eq!(Value::Uint(7).string_form().as_deref(), Some("7"));
    assert_eq!(Value::Float(1.5).string_form().as_deref(), Some("1.5"));
    assert_eq!(Value::Bool(true).string_form().as_deref(), Some("1"));
    assert_eq!(Value::Bool(false).string_form().as_deref(), Some(""));
    assert_eq!(Value::Null.string_form(), None);
}

#[test]
fn blankness() {
    assert!(Value::Null.is_blank());
    assert!(Value::text("").is_blank());
    assert!(Value::Bool(false).is_blank());

    assert!(!Value::text(" ").is_blank());
    assert!(!Value::Int(0).is_blank());
    assert!(!Value::text("0").is_blank());
}

#[test]
fn value_types() {
    assert_eq!(Value::text("x").value_type(), ValueType::String);
    assert_eq!(Value::Uint(1).value_type(), ValueType::Int);
    assert_eq!(Value::Null.value_type(), ValueType::Null);
    assert_eq!(ValueType::String.to_string(), "string");
}

#[test]
fn deserializes_untagged_json_scalars() {
    let values: Vec<Value> =
        serde_json::from_str(r#"[null, true, -3, 18446744073709551615, 2.5, "hi"]"#)
            .expect("payload should deserialize");

    assert_eq!(
        values,
        vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(-3),
            Value::Uint(u64::MAX),
            Value::Float(2.5),
            Value::text("hi"),
        ]
    );
}

#[test]
fn from_option() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::text("x"));
}
