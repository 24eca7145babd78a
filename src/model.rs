use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A decoded sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    /// Enum registers decoded into their operating-mode text.
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// The `type` field of a response: numeric on current firmware, a model name on older ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeCode {
    Code(i64),
    Name(String),
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCode::Code(c) => write!(f, "{}", c),
            TypeCode::Name(n) => f.write_str(n),
        }
    }
}

/// Rule confirming that a response belongs to a given model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identification {
    Code(i64),
    Prefix(&'static str),
    CodeOrPrefix(i64, &'static str),
}

impl Identification {
    pub fn matches(&self, type_code: &TypeCode) -> bool {
        match (self, type_code) {
            (Identification::Code(c), TypeCode::Code(t))
            | (Identification::CodeOrPrefix(c, _), TypeCode::Code(t)) => c == t,
            (Identification::Prefix(p), TypeCode::Name(n))
            | (Identification::CodeOrPrefix(_, p), TypeCode::Name(n)) => n.starts_with(*p),
            _ => false,
        }
    }
}

impl fmt::Display for Identification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identification::Code(c) => write!(f, "{}", c),
            Identification::Prefix(p) => write!(f, "{}*", p),
            Identification::CodeOrPrefix(c, p) => write!(f, "{} or {}*", c, p),
        }
    }
}

/// A decoded real-time reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InverterResponse {
    pub data: HashMap<String, Value>,
    /// Serial number of the WiFi dongle answering the request.
    pub serial_number: Option<String>,
    pub inverter_serial_number: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub type_code: TypeCode,
}

impl InverterResponse {
    pub fn dongle_serial_number(&self) -> Option<&str> {
        self.serial_number.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identification_by_code_and_prefix() {
        let x1 = Identification::CodeOrPrefix(3, "X1-");
        assert!(x1.matches(&TypeCode::Code(3)));
        assert!(x1.matches(&TypeCode::Name("X1-Hybiyd-G3".to_string())));
        assert!(!x1.matches(&TypeCode::Code(4)));
        assert!(!x1.matches(&TypeCode::Name("X3-Hybiyd-G3".to_string())));

        assert!(Identification::Code(14).matches(&TypeCode::Code(14)));
        assert!(!Identification::Code(14).matches(&TypeCode::Name("14".to_string())));
        assert!(Identification::Prefix("AL_SE").matches(&TypeCode::Name("AL_SE".to_string())));
        assert!(!Identification::Prefix("AL_SE").matches(&TypeCode::Code(0)));
    }

    #[test]
    fn type_code_deserializes_both_forms() {
        let code: TypeCode = serde_json::from_str("4").unwrap();
        assert_eq!(TypeCode::Code(4), code);
        let name: TypeCode = serde_json::from_str("\"X1-Boost\"").unwrap();
        assert_eq!(TypeCode::Name("X1-Boost".to_string()), name);
    }
}
