use super::BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;
use crate::utils::Lookup as Modes;

const RUN_MODES: &Modes = &[
    (0, "Waiting"),
    (1, "Checking"),
    (2, "Normal"),
    (3, "Fault"),
    (4, "Permanent Fault"),
    (5, "Updating"),
    (6, "EpsCheck"),
    (7, "Eps"),
];

const SENSORS: &[Sensor] = &[
    single("Grid Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Grid Current", 1, Measurement(Units::A), &[Div10]),
    single("Grid Frequency", 2, Measurement(Units::Hz), &[Div100]),
    single("Grid Power", 3, Measurement(Units::W), &[ToSigned]),
    single("PV1 Voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 5, Measurement(Units::V), &[Div10]),
    single("PV3 Voltage", 6, Measurement(Units::V), &[Div10]),
    single("PV4 Voltage", 7, Measurement(Units::V), &[Div10]),
    single("Pv1 Current", 8, Measurement(Units::A), &[Div10]),
    single("Pv2 Current", 9, Measurement(Units::A), &[Div10]),
    single("Run Mode", 10, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    single("Pv3 Current", 11, Measurement(Units::A), &[Div10]),
    single("Pv4 Current", 12, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 13, Measurement(Units::W), &[ToSigned]),
    single("PV2 Power", 14, Measurement(Units::W), &[ToSigned]),
    single("PV3 Power", 15, Measurement(Units::W), &[ToSigned]),
    single("PV4 Power", 16, Measurement(Units::W), &[ToSigned]),
    packed("Yield Total", &[19, 20], Total(Units::KWh), &[Div10]),
    single("Yield Today", 21, Measurement(Units::KWh), &[Div10]),
    single("Rate Power", 22, Measurement(Units::KWh), &[ToSigned]),
    single("Radiator Temperature", 23, Measurement(Units::C), &[ToSigned]),
    single("Invert temperature", 24, Measurement(Units::C), &[ToSigned]),
    packed("Feed in Power", &[72, 73], Measurement(Units::W), &[ToSigned32]),
    packed("Feed in Energy", &[74, 75], Measurement(Units::KWh), &[Div100]),
    packed("Consume Energy", &[76, 77], Measurement(Units::KWh), &[Div100]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1MiniG4",
    manufacturer: SOLAX,
    identification: Identification::Code(22),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(100),
        information: Some(("Information", Length::Between(9, 10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
