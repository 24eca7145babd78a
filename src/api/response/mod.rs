mod schema;

pub use schema::{Length, Schema};

use super::Cause;
use crate::model::TypeCode;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

/* Some firmwares leave empty fields in the data array */
const EMPTY_FIELD: &str = ",,";
const ZERO_FIELD: &str = ",0.0,";

/// Register as sent by the dongle: a number, occasionally a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Register {
    Number(f64),
    Text(String),
}

impl Register {
    fn value(&self) -> Option<f64> {
        match self {
            Register::Number(v) => Some(*v),
            Register::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A response that passed a model's schema, not decoded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub registers: Vec<f64>,
    pub type_code: TypeCode,
    pub serial_number: Option<String>,
    pub version: Option<String>,
    pub information: Vec<Value>,
}

impl RawResponse {
    /// Text of the `Information` entry at `index`, if present.
    pub fn information_str(&self, index: usize) -> Option<String> {
        match self.information.get(index)? {
            Value::String(s) => Some(s.to_owned()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Replace every run of empty array fields with zeroes.
pub fn patch(body: &str) -> Cow<'_, str> {
    if !body.contains(EMPTY_FIELD) {
        return Cow::Borrowed(body);
    }
    let mut patched = body.replace(EMPTY_FIELD, ZERO_FIELD);
    while patched.contains(EMPTY_FIELD) {
        patched = patched.replace(EMPTY_FIELD, ZERO_FIELD);
    }
    Cow::Owned(patched)
}

/// Parse a raw response body into JSON.
pub fn parse(body: &str) -> Result<Value, Cause> {
    let patched = patch(body);
    serde_json::from_str(&patched).map_err(|e| Cause::InvalidJson {
        error: e.to_string(),
        body: body.to_owned(),
    })
}

fn registers(data: &Value) -> Result<Vec<f64>, String> {
    let registers = Vec::<Register>::deserialize(data).map_err(|e| e.to_string())?;
    registers
        .iter()
        .enumerate()
        .map(|(i, r)| {
            r.value()
                .ok_or_else(|| format!("data[{}] is not a number", i))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn patch_fills_empty_fields() {
        assert_eq!("[1,0.0,2]", patch("[1,,2]"));
        assert_eq!("[1,0.0,0.0,2]", patch("[1,,,2]"));
        assert_eq!("[1,0.0,0.0,0.0,2]", patch("[1,,,,2]"));
        assert!(matches!(patch("[1,2]"), Cow::Borrowed(_)));
    }

    #[test]
    fn parse_patched_body() {
        let value = parse(r#"{"Data":[1,,3]}"#).unwrap();
        assert_eq!(
            vec![1.0, 0.0, 3.0],
            registers(value.get("Data").unwrap()).unwrap()
        );
    }

    #[test]
    fn parse_rejects_non_json() {
        match parse("<html>Not found</html>") {
            Err(Cause::InvalidJson { body, .. }) => assert_eq!("<html>Not found</html>", body),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn registers_accept_numeric_strings() {
        let data: Value = serde_json::from_str(r#"[1, "2", " 3.5 "]"#).unwrap();
        assert_eq!(vec![1.0, 2.0, 3.5], registers(&data).unwrap());

        let data: Value = serde_json::from_str(r#"[1, "two"]"#).unwrap();
        assert_eq!(Err("data[1] is not a number".to_string()), registers(&data));

        let data: Value = serde_json::from_str(r#"{"a": 1}"#).unwrap();
        assert!(registers(&data).is_err());
    }

    #[test]
    fn information_entries() {
        let raw = RawResponse {
            registers: vec![1.0],
            type_code: TypeCode::Code(4),
            serial_number: None,
            version: None,
            information: serde_json::from_str(r#"[3.0, 4, "XB302", null]"#).unwrap(),
        };
        assert_eq!(Some("XB302".to_string()), raw.information_str(2));
        assert_eq!(Some("4".to_string()), raw.information_str(1));
        assert_eq!(None, raw.information_str(3));
        assert_eq!(None, raw.information_str(10));
    }
}
