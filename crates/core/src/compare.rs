//! Value comparison for query predicates and sorts
//!
//! Equality is structural; numbers compare by numeric value regardless of
//! integer/float representation. Ordering is only defined between values of
//! the same type (numbers, strings, booleans); a cross-type comparison is
//! unordered and range predicates against it fail.

use serde_json::Value;
use std::cmp::Ordering;

/// Structural equality between two values
///
/// Numbers are compared numerically, so `1` and `1.0` are equal. Arrays and
/// objects compare element- and key-wise with the same rules.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(k, x)| ys.get(k).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Same-type partial ordering
///
/// Returns `None` for mixed types and for containers, which have no
/// relational order here.
pub fn value_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_scalars() {
        assert!(values_equal(&json!("a"), &json!("a")));
        assert!(values_equal(&json!(true), &json!(true)));
        assert!(values_equal(&json!(null), &json!(null)));
        assert!(!values_equal(&json!("a"), &json!("b")));
    }

    #[test]
    fn test_integer_float_equality() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(!values_equal(&json!(1), &json!(1.5)));
    }

    #[test]
    fn test_cross_type_not_equal() {
        assert!(!values_equal(&json!(1), &json!("1")));
        assert!(!values_equal(&json!(0), &json!(false)));
        assert!(!values_equal(&json!(null), &json!(0)));
    }

    #[test]
    fn test_structural_array_equality() {
        assert!(values_equal(&json!([1, 2.0]), &json!([1.0, 2])));
        assert!(!values_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!values_equal(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn test_structural_object_equality() {
        assert!(values_equal(
            &json!({"a": 1, "b": [true]}),
            &json!({"b": [true], "a": 1.0})
        ));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 2})));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_number_ordering() {
        assert_eq!(value_cmp(&json!(1), &json!(2)), Some(Ordering::Less));
        assert_eq!(value_cmp(&json!(2.5), &json!(2)), Some(Ordering::Greater));
        assert_eq!(value_cmp(&json!(3), &json!(3.0)), Some(Ordering::Equal));
    }

    #[test]
    fn test_string_ordering() {
        assert_eq!(value_cmp(&json!("a"), &json!("b")), Some(Ordering::Less));
        assert_eq!(value_cmp(&json!("b"), &json!("a")), Some(Ordering::Greater));
    }

    #[test]
    fn test_bool_ordering() {
        assert_eq!(value_cmp(&json!(false), &json!(true)), Some(Ordering::Less));
    }

    #[test]
    fn test_cross_type_unordered() {
        assert_eq!(value_cmp(&json!(1), &json!("1")), None);
        assert_eq!(value_cmp(&json!(null), &json!(1)), None);
    }

    #[test]
    fn test_containers_unordered() {
        assert_eq!(value_cmp(&json!([1]), &json!([2])), None);
        assert_eq!(value_cmp(&json!({"a": 1}), &json!({"a": 2})), None);
    }
}
