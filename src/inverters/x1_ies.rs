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
    (8, "Self Test"),
    (9, "Idle"),
    (10, "Standby"),
    (11, "Init"),
];

const SENSORS: &[Sensor] = &[
    single("Grid Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Grid Current", 1, Measurement(Units::A), &[Div10]),
    single("Grid Power", 2, Measurement(Units::W), &[ToSigned]),
    single("Grid Frequency", 3, Measurement(Units::Hz), &[Div100]),
    single("PV1 Voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 5, Measurement(Units::V), &[Div10]),
    single("Pv1 Current", 6, Measurement(Units::A), &[Div10]),
    single("Pv2 Current", 7, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 8, Measurement(Units::W), &[ToSigned]),
    single("PV2 Power", 9, Measurement(Units::W), &[ToSigned]),
    single("Run Mode", 10, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    packed("Yield Total", &[11, 12], Total(Units::KWh), &[Div10]),
    single("Yield Today", 13, Measurement(Units::KWh), &[Div10]),
    single("Battery Voltage", 14, Measurement(Units::V), &[Div100]),
    single("Battery Current", 15, Measurement(Units::A), &[Div100]),
    single("Battery Power", 16, Measurement(Units::W), &[ToSigned]),
    single("Battery Temperature", 17, Measurement(Units::C), &[ToSigned]),
    single("Battery Capacity", 18, Measurement(Units::Percent), &[]),
    packed("Battery Discharge Total", &[19, 20], Total(Units::KWh), &[Div10]),
    packed("Battery Charge Total", &[21, 22], Total(Units::KWh), &[Div10]),
    single("Battery Surplus Energy", 23, Measurement(Units::W), &[Div10]),
    single("Radiator Temperature", 26, Measurement(Units::C), &[ToSigned]),
    single("EPS Power", 28, Measurement(Units::W), &[ToSigned]),
    single("EPS Voltage", 29, Measurement(Units::V), &[Div10]),
    single("EPS Current", 30, Measurement(Units::A), &[Div10]),
    single("EPS Frequency", 31, Measurement(Units::Hz), &[Div100]),
    packed("Feed in Power", &[32, 33], Measurement(Units::W), &[ToSigned32]),
    packed("Feed in Energy Total", &[34, 35], Measurement(Units::KWh), &[Div100]),
    packed("Consume Total", &[36, 37], Total(Units::KWh), &[Div100]),
    single("Selfuse Power", 38, Measurement(Units::W), &[ToSigned]),
    single("Invert temperature", 39, Measurement(Units::C), &[ToSigned]),
    packed("Feed in Energy Today", &[78, 79], Measurement(Units::KWh), &[Div100]),
    packed("Consume Energy Today", &[80, 81], Measurement(Units::KWh), &[Div100]),
    single("EPS Today", 82, Measurement(Units::KWh), &[Div10]),
    packed("EPS Total", &[83, 84], Measurement(Units::KWh), &[Div10]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1Ies",
    manufacturer: SOLAX,
    identification: Identification::Code(23),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(300),
        information: Some(("Information", Length::Between(9, 10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
