use super::*;
use crate::{
    error::{ErrorOrigin, WriteError},
    model::field::FieldKind,
    serializer::string::StringFieldSerializer,
    test_support::{ENTITY, description_field, insert, note_field, pair, params, title_field},
    validate::codes,
};

fn fields() -> Vec<FieldModel> {
    vec![title_field(), note_field(), description_field()]
}

#[test]
fn encode_fields_collects_columns_and_violations() {
    let mut pairs = vec![
        pair("title", ""),
        pair("note", "<i>kept</i>"),
        pair("description", "<p>way too <b>bold</b></p>"),
    ];
    let mut params = params();

    let columns = encode_fields(
        &StringFieldSerializer::new(),
        &fields(),
        &insert(),
        &mut pairs,
        &mut params,
    )
    .expect("all pairs have string fields");

    let emitted: Vec<_> = columns.iter().map(EncodedColumn::as_pair).collect();
    assert_eq!(
        emitted,
        vec![
            ("title", None),
            ("note", Some("<i>kept</i>")),
            ("description_text", Some("way too bold")),
        ]
    );

    let grouped = params.context.violations().by_path();
    assert_eq!(grouped.len(), 1);
    assert!(grouped.contains_key("/0/title"));
}

#[test]
fn encode_fields_rejects_unknown_keys() {
    let mut pairs = vec![pair("title", "ok"), pair("sku", "A-1")];
    let mut params = params();

    let err = encode_fields(
        &StringFieldSerializer::new(),
        &fields(),
        &insert(),
        &mut pairs,
        &mut params,
    )
    .expect_err("sku has no field");

    assert_eq!(err.origin, ErrorOrigin::Write);
    assert!(err.message.contains("'sku'"));
    assert!(err.message.contains(ENTITY));
}

#[test]
fn encode_fields_stops_on_serializer_mismatch() {
    let fields = vec![title_field(), FieldModel::new("stock", FieldKind::Int)];
    let mut pairs = vec![pair("stock", "5"), pair("title", "")];
    let mut params = params();

    let err = encode_fields(
        &StringFieldSerializer::new(),
        &fields,
        &insert(),
        &mut pairs,
        &mut params,
    )
    .expect_err("stock is not a string field");

    assert!(err.is_serializer_mismatch());
    // the title pair was never reached
    assert_eq!(pairs[1].value, crate::value::Value::text(""));
    assert!(!params.context.has_violations());
}

#[test]
fn context_into_result_rejects_when_violations_exist() {
    let mut pairs = vec![pair("title", "")];
    let mut params = params();

    encode_fields(
        &StringFieldSerializer::new(),
        &fields(),
        &insert(),
        &mut pairs,
        &mut params,
    )
    .expect("title is a string field");

    let err = params
        .context
        .into_result()
        .expect_err("blank title must reject the write");

    assert!(matches!(err, WriteError::ConstraintViolations(_)));
    let violations = err.violations().expect("constraint violations");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, codes::IS_BLANK);
    assert_eq!(err.to_string(), "write rejected with 1 constraint violation(s)");
}

#[test]
fn context_into_result_accepts_clean_write() {
    assert!(WriteContext::new().into_result().is_ok());
}

#[test]
fn parameter_bag_defaults_to_system_language() {
    let bag = WriteParameterBag::new("/3/translations/0");

    assert!(bag.is_system_language());
    assert_eq!(bag.property_path("name"), "/3/translations/0/name");
    assert!(!bag.with_language("other").is_system_language());
}

#[test]
fn existence_builders() {
    let update = EntityExistence::update(ENTITY).as_child();

    assert!(update.exists);
    assert!(update.child);
    assert!(!update.translation);
    assert!(!insert().exists);
}

#[test]
fn key_value_pair_set_value() {
    let mut kv = KeyValuePair::new("title", "a");
    kv.set_value(None::<String>);

    assert!(kv.value().is_null());
}
