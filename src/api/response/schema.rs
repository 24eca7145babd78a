use super::{registers, RawResponse};
use crate::api::Cause;
use crate::model::TypeCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

const TYPE: &str = "type";

/// Accepted length of a response array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Exact(usize),
    OneOf(&'static [usize]),
    /// Inclusive range.
    Between(usize, usize),
}

impl Length {
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            Length::Exact(n) => len == n,
            Length::OneOf(lengths) => lengths.contains(&len),
            Length::Between(min, max) => (min..=max).contains(&len),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Exact(n) => write!(f, "{}", n),
            Length::OneOf(lengths) => write!(f, "one of {:?}", lengths),
            Length::Between(min, max) => write!(f, "{}..={}", min, max),
        }
    }
}

/// Structure a model's responses must have.
///
/// Keys are matched with their exact spelling, e.g. `Data` and `data` are different schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub serial_key: &'static str,
    pub version_key: &'static str,
    pub data_key: &'static str,
    pub data_length: Length,
    pub information: Option<(&'static str, Length)>,
}

fn missing(key: &str) -> Cause {
    Cause::Schema(format!("required key '{}' not provided", key))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<String, Cause> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s.to_owned()),
        Some(other) => Err(Cause::Schema(format!(
            "expected a string for '{}', got {}",
            key, other
        ))),
        None => Err(missing(key)),
    }
}

fn first_str(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

impl Schema {
    /// Check `response` and extract the parts the decoder needs.
    pub fn validate(&self, response: &Value) -> Result<RawResponse, Cause> {
        let object = response
            .as_object()
            .ok_or_else(|| Cause::Schema(format!("expected a JSON object, got {}", response)))?;

        let type_code = object
            .get(TYPE)
            .ok_or_else(|| missing(TYPE))
            .and_then(|v| {
                TypeCode::deserialize(v)
                    .map_err(|_| Cause::Schema(format!("invalid type code {}", v)))
            })?;

        string_field(object, self.serial_key)?;
        string_field(object, self.version_key)?;

        let data = object.get(self.data_key).ok_or_else(|| missing(self.data_key))?;
        let registers = registers(data).map_err(Cause::Schema)?;
        if !self.data_length.accepts(registers.len()) {
            return Err(Cause::Schema(format!(
                "'{}' has length {}, expected {}",
                self.data_key,
                registers.len(),
                self.data_length
            )));
        }
        if registers.iter().all(|r| *r == 0.0) {
            return Err(Cause::Schema(format!(
                "all values of '{}' are zero",
                self.data_key
            )));
        }

        let information = match self.information {
            Some((key, length)) => {
                let information = object
                    .get(key)
                    .ok_or_else(|| missing(key))?
                    .as_array()
                    .ok_or_else(|| Cause::Schema(format!("'{}' is not an array", key)))?;
                if !length.accepts(information.len()) {
                    return Err(Cause::Schema(format!(
                        "'{}' has length {}, expected {}",
                        key,
                        information.len(),
                        length
                    )));
                }
                information.to_owned()
            }
            None => Vec::new(),
        };

        Ok(RawResponse {
            registers,
            type_code,
            serial_number: first_str(object, &["SN", "sn"]),
            version: first_str(object, &["ver", "version"]),
            information,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SCHEMA: Schema = Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::OneOf(&[3, 4]),
        information: Some(("Information", Length::Between(2, 3))),
    };

    fn validate(body: &str) -> Result<RawResponse, Cause> {
        SCHEMA.validate(&serde_json::from_str(body).unwrap())
    }

    #[test]
    fn lengths() {
        assert!(Length::Exact(3).accepts(3));
        assert!(!Length::Exact(3).accepts(4));
        assert!(Length::OneOf(&[102, 103, 107]).accepts(107));
        assert!(!Length::OneOf(&[102, 103, 107]).accepts(104));
        assert!(Length::Between(290, 300).accepts(290));
        assert!(Length::Between(290, 300).accepts(300));
        assert!(!Length::Between(290, 300).accepts(301));
    }

    #[test]
    fn valid_response() {
        let raw = validate(
            r#"{"sn":"SWXXXX","ver":"3.005","type":3,"Data":[1,2,3],"Information":[1,"X"]}"#,
        )
        .unwrap();
        assert_eq!(vec![1.0, 2.0, 3.0], raw.registers);
        assert_eq!(TypeCode::Code(3), raw.type_code);
        assert_eq!(Some("SWXXXX".to_string()), raw.serial_number);
        assert_eq!(Some("3.005".to_string()), raw.version);
        assert_eq!(Some("X".to_string()), raw.information_str(1));
    }

    #[test]
    fn string_type_code() {
        let raw = validate(
            r#"{"sn":"A","ver":"B","type":"X1-Boost","Data":[0,0,9],"Information":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(TypeCode::Name("X1-Boost".to_string()), raw.type_code);
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(
            Err(missing("Data")),
            validate(r#"{"sn":"A","ver":"B","type":3,"data":[1,2,3],"Information":[1,2]}"#)
        );
        assert_eq!(
            Err(missing("sn")),
            validate(r#"{"SN":"A","ver":"B","type":3,"Data":[1,2,3],"Information":[1,2]}"#)
        );
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(matches!(
            validate(r#"{"sn":"A","ver":"B","type":3,"Data":[1,2],"Information":[1,2]}"#),
            Err(Cause::Schema(_))
        ));
        assert!(matches!(
            validate(r#"{"sn":"A","ver":"B","type":3,"Data":[1,2,3],"Information":[1]}"#),
            Err(Cause::Schema(_))
        ));
    }

    #[test]
    fn rejects_all_zero_data() {
        assert!(matches!(
            validate(r#"{"sn":"A","ver":"B","type":3,"Data":[0,0,0,0],"Information":[1,2]}"#),
            Err(Cause::Schema(_))
        ));
    }

    #[test]
    fn rejects_unrelated_json() {
        assert_eq!(Err(missing("type")), validate(r#"{"bingo":"bango"}"#));
        assert!(matches!(validate("[1,2,3]"), Err(Cause::Schema(_))));
        assert!(matches!(
            validate(r#"{"sn":"A","ver":"B","type":[3],"Data":[1,2,3],"Information":[1,2]}"#),
            Err(Cause::Schema(_))
        ));
    }
}
