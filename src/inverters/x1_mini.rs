use super::QUERY_OR_BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{single, Sensor};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;

const SENSORS: &[Sensor] = &[
    single("PV1 Current", 0, Measurement(Units::A), &[]),
    single("PV2 Current", 1, Measurement(Units::A), &[]),
    single("PV1 Voltage", 2, Measurement(Units::V), &[]),
    single("PV2 Voltage", 3, Measurement(Units::V), &[]),
    single("Output Current", 4, Measurement(Units::A), &[]),
    single("Network Voltage", 5, Measurement(Units::V), &[]),
    single("AC Power", 6, Measurement(Units::W), &[]),
    single("Inverter Temperature", 7, Measurement(Units::C), &[]),
    single("Today's Energy", 8, Measurement(Units::KWh), &[]),
    single("Total Energy", 9, Total(Units::KWh), &[]),
    single("Exported Power", 10, Measurement(Units::W), &[]),
    single("PV1 Power", 11, Measurement(Units::W), &[]),
    single("PV2 Power", 12, Measurement(Units::W), &[]),
    single("Total Feed-in Energy", 41, Total(Units::KWh), &[]),
    single("Total Consumption", 42, Total(Units::KWh), &[]),
    single("Power Now", 43, Measurement(Units::W), &[]),
    single("Grid Frequency", 50, Measurement(Units::Hz), &[]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1Mini",
    manufacturer: SOLAX,
    identification: Identification::CodeOrPrefix(4, "X1-"),
    schema: Schema {
        serial_key: "SN",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(69),
        information: Some(("Information", Length::Exact(9))),
    },
    transports: QUERY_OR_BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
