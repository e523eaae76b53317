use verdict::{is, parse, safe_parse, Schema, Value};
use serde_json::json;
use stillwater::Validation;

#[test]
fn test_is_agrees_with_parse() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .field("age", Schema::number());

    let good = Value::from(json!({"name": "Alice", "age": 30}));
    let bad = Value::from(json!({"name": 1, "age": "x"}));

    assert!(is(&schema, &good));
    assert!(parse(&schema, good.clone()).is_ok());
    assert!(safe_parse(&schema, good).is_success());

    assert!(!is(&schema, &bad));
    assert!(parse(&schema, bad.clone()).is_err());
    assert!(safe_parse(&schema, bad).is_failure());
}

#[test]
fn test_parse_returns_value_unchanged() {
    let schema = Schema::object().field("name", Schema::string());
    let value = Value::from(json!({"name": "Alice", "extra": [1, 2]}));

    // No coercion, no stripping of undeclared keys.
    assert_eq!(parse(&schema, value.clone()), Ok(value));
}

#[test]
fn test_parse_error_carries_all_issues() {
    let schema = Schema::object()
        .field("name", Schema::string())
        .field("age", Schema::number())
        .field("tags", Schema::array(Schema::string()));

    let err = parse(
        &schema,
        Value::from(json!({"name": 1, "age": "x", "tags": [true]})),
    )
    .unwrap_err();

    assert_eq!(err.issues.len(), 3);
    // The headline message is the first issue's message.
    assert_eq!(err.message, "Expected string, received number");
    assert_eq!(err.issues.first().path.to_string(), "name");
    assert_eq!(err.to_string(), err.message);
}

#[test]
fn test_safe_parse_failure_payload() {
    let schema = Schema::string();

    match safe_parse(&schema, Value::Null) {
        Validation::Failure(error) => {
            assert_eq!(error.message, "Expected string, received null");
            assert_eq!(error.issues.len(), 1);
        }
        Validation::Success(_) => panic!("expected failure"),
    }
}

#[test]
fn test_safe_parse_success_returns_input() {
    let value = Value::from(json!([1, 2, 3]));
    match safe_parse(&Schema::array(Schema::number()), value.clone()) {
        Validation::Success(returned) => assert_eq!(returned, value),
        Validation::Failure(_) => panic!("expected success"),
    }
}

#[test]
fn test_validation_is_idempotent() {
    let schema = Schema::object().field("n", Schema::number());
    let value = Value::from(json!({"n": 1}));

    let first = parse(&schema, value.clone());
    let second = parse(&schema, value);
    assert_eq!(first, second);

    let bad = Value::from(json!({"n": "x"}));
    let first = parse(&schema, bad.clone()).unwrap_err();
    let second = parse(&schema, bad).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_transform_never_leaks_mapped_value() {
    let schema = Schema::transform(Schema::string(), |v: &Value| match v {
        Value::Number(n) => Value::from(n.to_string()),
        other => other.clone(),
    });

    // The mapping makes 5 pass as "5", but parse hands back the number.
    assert_eq!(parse(&schema, Value::from(5.0)), Ok(Value::from(5.0)));
}
