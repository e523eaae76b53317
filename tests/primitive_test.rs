use verdict::{is, Kind, Origin, Path, Schema, Validate, Value};
use serde_json::json;

#[test]
fn test_string() {
    assert!(is(&Schema::string(), &Value::from("hello")));
    assert!(is(&Schema::string(), &Value::from("")));
    assert!(!is(&Schema::string(), &Value::from(1.0)));
    assert!(!is(&Schema::string(), &Value::Null));
    assert!(!is(&Schema::string(), &Value::Undefined));
}

#[test]
fn test_number() {
    assert!(is(&Schema::number(), &Value::from(3.5)));
    assert!(is(&Schema::number(), &Value::from(-1.0)));
    // A bigint is not a number.
    assert!(!is(&Schema::number(), &Value::BigInt(3)));
    assert!(!is(&Schema::number(), &Value::from("3")));
}

#[test]
fn test_boolean() {
    assert!(is(&Schema::boolean(), &Value::Bool(true)));
    assert!(is(&Schema::boolean(), &Value::Bool(false)));
    assert!(!is(&Schema::boolean(), &Value::from(0.0)));
    assert!(!is(&Schema::boolean(), &Value::Null));
}

#[test]
fn test_bigint_and_symbol() {
    assert!(is(&Schema::bigint(), &Value::BigInt(170141183460469231731687303715884105727)));
    assert!(!is(&Schema::bigint(), &Value::from(1.0)));

    assert!(is(&Schema::symbol(), &Value::Symbol("id".into())));
    assert!(!is(&Schema::symbol(), &Value::from("id")));
}

#[test]
fn test_function_and_promise() {
    assert!(is(&Schema::function(), &Value::Function("callback".into())));
    assert!(!is(&Schema::function(), &Value::from("callback")));

    assert!(is(&Schema::promise(), &Value::Promise));
    assert!(!is(&Schema::promise(), &Value::Null));
}

#[test]
fn test_date() {
    let now = Value::Date(chrono::Utc::now());
    assert!(is(&Schema::date(), &now));
    assert!(!is(&Schema::date(), &Value::from("2026-08-25")));
}

#[test]
fn test_integer() {
    assert!(is(&Schema::integer(), &Value::from(5.0)));
    assert!(is(&Schema::integer(), &Value::from(-3.0)));
    assert!(is(&Schema::integer(), &Value::from(0.0)));
    assert!(!is(&Schema::integer(), &Value::from(5.5)));
    assert!(!is(&Schema::integer(), &Value::Number(f64::NAN)));
    assert!(!is(&Schema::integer(), &Value::Number(f64::INFINITY)));
    assert!(!is(&Schema::integer(), &Value::BigInt(5)));
}

#[test]
fn test_nullish() {
    assert!(is(&Schema::nullish(), &Value::Null));
    assert!(is(&Schema::nullish(), &Value::Undefined));
    assert!(!is(&Schema::nullish(), &Value::Bool(false)));
    assert!(!is(&Schema::nullish(), &Value::from(0.0)));
}

#[test]
fn test_any_unknown_never() {
    for value in [
        Value::Null,
        Value::Undefined,
        Value::from("x"),
        Value::from(json!({"a": 1})),
    ] {
        assert!(is(&Schema::any(), &value));
        assert!(is(&Schema::unknown(), &value));
        assert!(!is(&Schema::never(), &value));
    }
}

#[test]
fn test_literal() {
    let two = Schema::literal(2i64);
    assert!(is(&two, &Value::from(2.0)));
    assert!(!is(&two, &Value::from(3.0)));
    // Same magnitude, different kind.
    assert!(!is(&two, &Value::BigInt(2)));

    let greeting = Schema::literal("hi");
    assert!(is(&greeting, &Value::from("hi")));
    assert!(!is(&greeting, &Value::from("hello")));
}

#[test]
fn test_enums() {
    let direction = Schema::enums(vec![Value::from("north"), Value::from("south")]);
    assert!(is(&direction, &Value::from("north")));
    assert!(is(&direction, &Value::from("south")));
    assert!(!is(&direction, &Value::from("east")));
    assert!(!is(&direction, &Value::Null));
}

#[test]
fn test_instance() {
    let map_like = Schema::instance(Kind::Map);
    assert!(is(&map_like, &Value::Map(vec![])));
    assert!(!is(&map_like, &Value::from(json!({}))));

    let date_like = Schema::instance(Kind::Date);
    assert!(is(&date_like, &Value::Date(chrono::Utc::now())));
    assert!(!is(&date_like, &Value::from("2026-01-01")));
}

#[test]
fn test_generated_message_names_expected_and_received() {
    let issues = Schema::string().check(&Value::from(1.0), &Path::root(), Origin::Value);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Expected string, received number");
    assert_eq!(issues[0].expected, "string");
    assert_eq!(issues[0].received, Value::from(1.0));
    assert!(issues[0].path.is_root());
}

#[test]
fn test_message_override() {
    let name = Schema::string().error("a name is required");
    let issues = name.check(&Value::Null, &Path::root(), Origin::Value);
    assert_eq!(issues[0].message, "a name is required");
    // The tag is untouched by the override.
    assert_eq!(issues[0].expected, "string");
}

#[test]
fn test_define_custom_leaf() {
    let even = Schema::define(
        "even",
        |v: &Value| matches!(v, Value::Number(n) if n % 2.0 == 0.0),
    );
    assert!(is(&even, &Value::from(4.0)));
    assert!(!is(&even, &Value::from(3.0)));

    let issues = even.check(&Value::from(3.0), &Path::root(), Origin::Value);
    assert_eq!(issues[0].message, "Expected even, received number");
}
