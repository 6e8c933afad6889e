//! Unit tests for runtime values.

use super::value::Value;

#[test]
fn test_nil_equals_nil() {
    assert!(Value::Nil.is_equal(&Value::Nil));
}

#[test]
fn test_nil_not_equal_to_other_kinds() {
    assert!(!Value::Nil.is_equal(&Value::Number(0.0)));
    assert!(!Value::Nil.is_equal(&Value::Boolean(false)));
    assert!(!Value::Nil.is_equal(&Value::String(String::new())));
    assert!(!Value::Number(0.0).is_equal(&Value::Nil));
}

#[test]
fn test_mixed_kinds_not_equal() {
    assert!(!Value::Number(1.0).is_equal(&Value::String("1".to_string())));
    assert!(!Value::Boolean(true).is_equal(&Value::Number(1.0)));
}

#[test]
fn test_nan_not_equal_to_itself() {
    assert!(!Value::Number(f64::NAN).is_equal(&Value::Number(f64::NAN)));
}

#[test]
fn test_display() {
    assert_eq!(Value::Number(9.0).to_string(), "9.0");
    assert_eq!(Value::Number(0.5).to_string(), "0.5");
    assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::String("ab".to_string()).to_string(), "ab");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn test_accessors() {
    assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
    assert_eq!(Value::Nil.as_number(), None);
    assert_eq!(Value::from("x").as_string(), Some("x"));
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::Number(1.0).as_bool(), None);
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::from("a").type_name(), "string");
    assert_eq!(Value::Boolean(true).type_name(), "bool");
    assert_eq!(Value::Nil.type_name(), "nil");
}
