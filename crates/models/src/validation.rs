//! Field rules applied to request payloads before anything touches the
//! database. Every failing rule is reported, in field order.

use serde::Serialize;
use serde_json::Value;

pub const NAME_REQUIRED: &str = "Name is required";
pub const REGISTRATION_NUMBER_REQUIRED: &str = "Registration number is required";
pub const DESCRIPTION_REQUIRED: &str = "Description is required";
pub const PRICE_POSITIVE: &str = "Price must be a positive number";
pub const COMPANY_ID_REQUIRED: &str = "Company ID is required";

/// One violated rule, serialized as `{"path", "msg", "location"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub msg: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn body(path: &str, msg: &str) -> Self {
        Self { path: path.to_string(), msg: msg.to_string(), location: "body" }
    }
}

pub fn summarize(errors: &[FieldError]) -> String {
    errors.iter().map(|e| format!("{}: {}", e.path, e.msg)).collect::<Vec<_>>().join(", ")
}

/// Accumulates violations while extracting checked values.
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<FieldError>,
}

impl Violations {
    pub fn new() -> Self { Self::default() }

    /// Text that is present and non-empty. Whitespace counts as content.
    pub fn text(&mut self, path: &str, value: Option<String>, msg: &str) -> String {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                self.errors.push(FieldError::body(path, msg));
                String::new()
            }
        }
    }

    /// A JSON number, or a string holding one, strictly greater than zero.
    pub fn positive_float(&mut self, path: &str, value: Option<&Value>, msg: &str) -> f64 {
        match value.and_then(parse_float) {
            Some(v) if v > 0.0 => v,
            _ => {
                self.errors.push(FieldError::body(path, msg));
                0.0
            }
        }
    }

    /// Record `msg` against `path` unless `ok`.
    pub fn require(&mut self, ok: bool, path: &str, msg: &str) -> bool {
        if !ok {
            self.errors.push(FieldError::body(path, msg));
        }
        ok
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool { self.errors.is_empty() }

    #[cfg(test)]
    fn into_errors(self) -> Vec<FieldError> { self.errors }

    /// `Ok(value)` when no rule failed.
    pub fn finish<T>(self, value: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() { Ok(value) } else { Err(self.errors) }
    }
}

fn parse_float(value: &Value) -> Option<f64> {
    let v = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_rejects_missing_and_empty_but_keeps_whitespace() {
        let mut v = Violations::new();
        v.text("a", None, "A is required");
        v.text("b", Some(String::new()), "B is required");
        let blank = v.text("c", Some("   ".into()), "C is required");
        assert_eq!(blank, "   ");
        let ok = v.text("d", Some("Acme".into()), "D is required");
        assert_eq!(ok, "Acme");
        let errs = v.into_errors();
        assert_eq!(errs.iter().map(|e| e.path.as_str()).collect::<Vec<_>>(), ["a", "b"]);
        assert!(errs.iter().all(|e| e.location == "body"));
    }

    #[test]
    fn positive_float_accepts_numbers_and_numeric_strings() {
        let mut v = Violations::new();
        assert_eq!(v.positive_float("price", Some(&json!(500)), PRICE_POSITIVE), 500.0);
        assert_eq!(v.positive_float("price", Some(&json!(0.01)), PRICE_POSITIVE), 0.01);
        assert_eq!(v.positive_float("price", Some(&json!("12.5")), PRICE_POSITIVE), 12.5);
        assert!(v.is_empty());
    }

    #[test]
    fn positive_float_rejects_zero_negative_and_non_numeric() {
        for bad in [json!(0), json!(-1.5), json!("abc"), json!(true), json!(null), json!([1])] {
            let mut v = Violations::new();
            v.positive_float("price", Some(&bad), PRICE_POSITIVE);
            assert_eq!(v.into_errors(), vec![FieldError::body("price", PRICE_POSITIVE)], "value {bad}");
        }
        let mut v = Violations::new();
        v.positive_float("price", None, PRICE_POSITIVE);
        assert!(!v.is_empty());
    }

    #[test]
    fn finish_returns_value_only_without_errors() {
        let v = Violations::new();
        assert_eq!(v.finish(7), Ok(7));

        let mut v = Violations::new();
        v.text("name", None, NAME_REQUIRED);
        assert_eq!(v.finish(7), Err(vec![FieldError::body("name", NAME_REQUIRED)]));
    }

    #[test]
    fn summarize_joins_paths_and_messages() {
        let errs = vec![FieldError::body("name", NAME_REQUIRED), FieldError::body("price", PRICE_POSITIVE)];
        assert_eq!(summarize(&errs), "name: Name is required, price: Price must be a positive number");
    }
}
