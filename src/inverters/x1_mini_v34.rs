use super::QUERY_OR_BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;

const SENSORS: &[Sensor] = &[
    single("Network Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Output Current", 1, Measurement(Units::A), &[Div10]),
    single("AC Power", 2, Measurement(Units::W), &[]),
    single("PV1 Voltage", 3, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 5, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 6, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 7, Measurement(Units::W), &[]),
    single("PV2 Power", 8, Measurement(Units::W), &[]),
    single("Grid Frequency", 9, Measurement(Units::Hz), &[Div100]),
    single("Total Energy", 11, Total(Units::KWh), &[Div10]),
    single("Today's Energy", 13, Measurement(Units::KWh), &[Div10]),
    single("Total Feed-in Energy", 41, Total(Units::KWh), &[Div10]),
    single("Total Consumption", 42, Total(Units::KWh), &[Div10]),
    single("Power Now", 43, Measurement(Units::W), &[Div10]),
    single("Inverter Temperature", 55, Measurement(Units::C), &[]),
];

/// X1 Mini on Pocket WiFi 2.034.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1MiniV34",
    manufacturer: SOLAX,
    identification: Identification::Code(4),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::OneOf(&[69, 100]),
        information: Some(("Information", Length::Between(9, 10))),
    },
    transports: QUERY_OR_BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
