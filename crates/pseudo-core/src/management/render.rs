//! Rendering of JSON values into outcome messages.

use serde_json::{Number, Value};

/// Render a decoded JSON value the way string concatenation in a browser
/// renders it.
///
/// Strings appear without quotes. Whole-valued floats drop their fraction
/// (`1.0` renders as `1`). Arrays join their elements with `,`, and nested
/// nulls become empty. Objects collapse to `[object Object]`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Number(n) => render_number(n),
        Value::Null | Value::Bool(_) => value.to_string(),
    }
}

fn render_number(n: &Number) -> String {
    match n.as_f64() {
        // Integers beyond 1e21 switch to exponent form in the browser; leave
        // those to serde_json
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(render_value(&json!("OK")), "OK");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(3)), "3");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&Value::Null), "null");
    }

    #[test]
    fn whole_floats_drop_fraction() {
        assert_eq!(render_value(&json!(1.0)), "1");
        assert_eq!(render_value(&json!(-3.0)), "-3");
        assert_eq!(render_value(&json!(-0.0)), "0");
        assert_eq!(render_value(&json!([2.0, 0.25])), "2,0.25");
        assert_eq!(render_value(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn arrays_join_with_commas() {
        assert_eq!(render_value(&json!([1, "a", null, [2, 3]])), "1,a,,2,3");
        assert_eq!(render_value(&json!([])), "");
    }

    #[test]
    fn objects_collapse() {
        assert_eq!(render_value(&json!({"detail": "x"})), "[object Object]");
    }
}
