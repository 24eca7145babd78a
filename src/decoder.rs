//! Declarative decoder tables.
//!
//! Every model describes its sensors as a static slice of [`Sensor`]s. The raw value of a
//! sensor is read first (packing multi-register values), then its transforms are applied in
//! order. A transform may read another register directly, which is how wrapped totals are
//! rebuilt from their resets counter without exposing the counter as a sensor.

use crate::api::Cause;
use crate::model::Value;
use crate::units::SensorUnit;
use crate::utils;
use std::collections::HashMap;
use std::fmt;

/// Source register(s) of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indices {
    Single(usize),
    /// 16-bit registers forming one value, least significant word first.
    Packed(&'static [usize]),
}

impl Indices {
    pub fn first(&self) -> usize {
        match self {
            Indices::Single(i) => *i,
            Indices::Packed(indices) => indices.first().copied().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Div10,
    Div100,
    ToSigned,
    ToSigned32,
    TwowayDiv10,
    TwowayDiv100,
    Lookup(&'static utils::Lookup),
    /// Add the register at `resets` times the wrap size.
    ResettingCounter { resets: usize },
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Div10 => f.write_str("div10"),
            Transform::Div100 => f.write_str("div100"),
            Transform::ToSigned => f.write_str("to_signed"),
            Transform::ToSigned32 => f.write_str("to_signed32"),
            Transform::TwowayDiv10 => f.write_str("twoway_div10"),
            Transform::TwowayDiv100 => f.write_str("twoway_div100"),
            Transform::Lookup(_) => f.write_str("lookup"),
            Transform::ResettingCounter { resets } => write!(f, "resetting_counter([{}])", resets),
        }
    }
}

impl Transform {
    fn apply(&self, value: Value, registers: &[f64]) -> Result<Value, Cause> {
        let number = match value {
            Value::Number(n) => n,
            Value::Text(text) => {
                return Err(Cause::Decode(format!(
                    "cannot apply {:?} to text '{}'",
                    self, text
                )))
            }
        };
        let value = match *self {
            Transform::Div10 => Value::Number(utils::div10(number)),
            Transform::Div100 => Value::Number(utils::div100(number)),
            Transform::ToSigned => Value::Number(utils::to_signed(number)),
            Transform::ToSigned32 => Value::Number(utils::to_signed32(number)),
            Transform::TwowayDiv10 => Value::Number(utils::twoway_div10(number)),
            Transform::TwowayDiv100 => Value::Number(utils::twoway_div100(number)),
            Transform::Lookup(table) => Value::Text(utils::lookup(table, number)),
            Transform::ResettingCounter { resets } => {
                let resets = registers.get(resets).ok_or_else(|| {
                    Cause::Decode(format!(
                        "resets index {} is out of range (got {} values)",
                        resets,
                        registers.len()
                    ))
                })?;
                Value::Number(utils::resetting_counter(number, *resets))
            }
        };
        Ok(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sensor {
    pub name: &'static str,
    pub indices: Indices,
    pub unit: SensorUnit,
    pub transforms: &'static [Transform],
}

pub const fn single(
    name: &'static str,
    index: usize,
    unit: SensorUnit,
    transforms: &'static [Transform],
) -> Sensor {
    Sensor {
        name,
        indices: Indices::Single(index),
        unit,
        transforms,
    }
}

pub const fn packed(
    name: &'static str,
    indices: &'static [usize],
    unit: SensorUnit,
    transforms: &'static [Transform],
) -> Sensor {
    Sensor {
        name,
        indices: Indices::Packed(indices),
        unit,
        transforms,
    }
}

fn register(registers: &[f64], index: usize, sensor: &Sensor) -> Result<f64, Cause> {
    registers.get(index).copied().ok_or_else(|| {
        Cause::Decode(format!(
            "index {} of '{}' is out of range (got {} values)",
            index,
            sensor.name,
            registers.len()
        ))
    })
}

impl Sensor {
    fn raw_value(&self, registers: &[f64]) -> Result<f64, Cause> {
        match self.indices {
            Indices::Single(index) => register(registers, index, self),
            Indices::Packed(indices) => {
                let words = indices
                    .iter()
                    .map(|i| register(registers, *i, self))
                    .collect::<Result<Vec<_>, _>>()?;
                utils::pack_u16(&words).ok_or_else(|| {
                    Cause::Decode(format!("cannot pack {:?} of '{}'", words, self.name))
                })
            }
        }
    }
}

/// Decode `registers` into named values.
pub fn decode(sensors: &[Sensor], registers: &[f64]) -> Result<HashMap<String, Value>, Cause> {
    let mut decoded = HashMap::with_capacity(sensors.len());
    for sensor in sensors {
        let mut value = Value::Number(sensor.raw_value(registers)?);
        for transform in sensor.transforms {
            value = transform.apply(value, registers)?;
        }
        decoded.insert(sensor.name.to_string(), value);
    }
    Ok(decoded)
}

/// Name to (first source index, unit) description of a decoder table.
pub fn sensor_map(sensors: &[Sensor]) -> HashMap<&'static str, (usize, SensorUnit)> {
    sensors
        .iter()
        .map(|sensor| (sensor.name, (sensor.indices.first(), sensor.unit)))
        .collect()
}

#[cfg(test)]
mod test {
    use super::Transform::*;
    use super::*;
    use crate::units::Units;
    use crate::utils::INVERTER_OPERATION_MODES;

    const SENSORS: &[Sensor] = &[
        single("Voltage", 0, SensorUnit::Measurement(Units::V), &[Div10]),
        single("Power", 1, SensorUnit::Measurement(Units::W), &[ToSigned]),
        packed(
            "Total Energy",
            &[2, 3],
            SensorUnit::Total(Units::KWh),
            &[Div10],
        ),
        single(
            "Run Mode",
            4,
            SensorUnit::Measurement(Units::None),
            &[Lookup(INVERTER_OPERATION_MODES)],
        ),
        single(
            "Feed-in",
            5,
            SensorUnit::Total(Units::KWh),
            &[ResettingCounter { resets: 6 }, Div100],
        ),
        single("Raw", 7, SensorUnit::Measurement(Units::None), &[]),
    ];

    #[test]
    fn decode_table() {
        let registers = [2301.0, 65436.0, 19251.0, 1.0, 2.0, 100.0, 2.0, 7.0];
        let decoded = decode(SENSORS, &registers).unwrap();

        assert_eq!(6, decoded.len());
        assert_eq!(Value::Number(230.1), decoded["Voltage"]);
        assert_eq!(Value::Number(-100.0), decoded["Power"]);
        assert_eq!(Value::Number(8478.7), decoded["Total Energy"]);
        assert_eq!(Value::Text("Normal".to_string()), decoded["Run Mode"]);
        assert_eq!(Value::Number(1311.7), decoded["Feed-in"]);
        assert_eq!(Value::Number(7.0), decoded["Raw"]);
    }

    #[test]
    fn index_out_of_range() {
        let registers = [1.0, 2.0, 3.0];
        assert!(matches!(
            decode(SENSORS, &registers),
            Err(Cause::Decode(_))
        ));
    }

    #[test]
    fn text_cannot_be_scaled() {
        const SENSORS: &[Sensor] = &[single(
            "Mode",
            0,
            SensorUnit::Measurement(Units::None),
            &[Lookup(INVERTER_OPERATION_MODES), Div10],
        )];
        assert!(matches!(decode(SENSORS, &[2.0]), Err(Cause::Decode(_))));
    }

    #[test]
    fn resets_index_out_of_range() {
        const SENSORS: &[Sensor] = &[single(
            "Total",
            0,
            SensorUnit::Total(Units::KWh),
            &[ResettingCounter { resets: 5 }],
        )];
        assert!(matches!(decode(SENSORS, &[2.0]), Err(Cause::Decode(_))));
    }

    #[test]
    fn packing_negative_register_fails() {
        const SENSORS: &[Sensor] = &[packed(
            "Total",
            &[0, 1],
            SensorUnit::Total(Units::KWh),
            &[],
        )];
        assert!(matches!(
            decode(SENSORS, &[-1.0, 0.0]),
            Err(Cause::Decode(_))
        ));
    }

    #[test]
    fn packing_oversized_register_fails() {
        const SENSORS: &[Sensor] = &[packed(
            "Total",
            &[0, 1],
            SensorUnit::Total(Units::KWh),
            &[],
        )];
        assert!(matches!(
            decode(SENSORS, &[70000.0, 1.0]),
            Err(Cause::Decode(_))
        ));
        assert_eq!(
            Value::Number(65537.0),
            decode(SENSORS, &[1.0, 1.0]).unwrap()["Total"]
        );
    }

    #[test]
    fn map_uses_first_index() {
        let map = sensor_map(SENSORS);
        assert_eq!((2, SensorUnit::Total(Units::KWh)), map["Total Energy"]);
        assert_eq!((0, SensorUnit::Measurement(Units::V)), map["Voltage"]);
        assert_eq!(SENSORS.len(), map.len());
    }
}
