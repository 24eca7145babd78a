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
    (20, "VPP"),
    (21, "TOU-Self use"),
    (22, "TOU-Charging"),
    (23, "TOU-Discharging"),
    (24, "TOU-Battery off"),
    (25, "TOU-Peak Shaving"),
];

const SENSORS: &[Sensor] = &[
    single("Grid 1 Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Grid 2 Voltage", 1, Measurement(Units::V), &[Div10]),
    single("Grid 3 Voltage", 2, Measurement(Units::V), &[Div10]),
    single("Grid 1 Current", 3, Measurement(Units::A), &[Div10]),
    single("Grid 2 Current", 4, Measurement(Units::A), &[Div10]),
    single("Grid 3 Current", 5, Measurement(Units::A), &[Div10]),
    single("Grid 1 Power", 6, Measurement(Units::W), &[ToSigned]),
    single("Grid 2 Power", 7, Measurement(Units::W), &[ToSigned]),
    single("Grid 3 Power", 8, Measurement(Units::W), &[ToSigned]),
    single("Grid Power Total", 9, Measurement(Units::W), &[ToSigned]),
    single("PV1 Voltage", 10, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 11, Measurement(Units::V), &[Div10]),
    single("Pv1 Current", 12, Measurement(Units::A), &[Div10]),
    single("Pv2 Current", 13, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 14, Measurement(Units::W), &[ToSigned]),
    single("PV2 Power", 15, Measurement(Units::W), &[ToSigned]),
    single("Grid 1 Frequency", 16, Measurement(Units::Hz), &[Div100]),
    single("Grid 2 Frequency", 17, Measurement(Units::Hz), &[Div100]),
    single("Grid 3 Frequency", 18, Measurement(Units::Hz), &[Div100]),
    single("Run Mode", 19, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    single("EPS 1 Voltage", 23, Measurement(Units::V), &[Div10]),
    single("EPS 2 Voltage", 24, Measurement(Units::V), &[Div10]),
    single("EPS 3 Voltage", 25, Measurement(Units::V), &[Div10]),
    single("EPS 1 Current", 26, Measurement(Units::A), &[Div10]),
    single("EPS 2 Current", 27, Measurement(Units::A), &[Div10]),
    single("EPS 3 Current", 28, Measurement(Units::A), &[Div10]),
    single("EPS 1 Power", 29, Measurement(Units::W), &[ToSigned]),
    single("EPS 2 Power", 30, Measurement(Units::W), &[ToSigned]),
    single("EPS 3 Power", 31, Measurement(Units::W), &[ToSigned]),
    single("EPS Frequency", 32, Measurement(Units::Hz), &[Div100]),
    single("Battery Voltage", 39, Measurement(Units::V), &[Div100]),
    single("Battery Current", 40, Measurement(Units::A), &[Div100]),
    single("Battery Power", 41, Measurement(Units::W), &[ToSigned]),
    single("Invert temperature", 46, Measurement(Units::C), &[ToSigned]),
    single("Selfuse Power", 47, Measurement(Units::W), &[ToSigned]),
    single("Radiator Temperature", 54, Measurement(Units::C), &[ToSigned]),
    single("Yield Output Today", 70, Measurement(Units::KWh), &[Div10]),
    packed("Yield Input Total", &[71, 72], Total(Units::KWh), &[Div10]),
    single("Yield Input Today", 73, Measurement(Units::KWh), &[Div10]),
    packed("Battery Discharge Total", &[74, 75], Total(Units::KWh), &[Div10]),
    packed("Battery Charge Total", &[76, 77], Total(Units::KWh), &[Div10]),
    single("OutputEnergy Charge Today", 78, Measurement(Units::KWh), &[Div10]),
    single("InputEnergy Charge Today", 79, Measurement(Units::KWh), &[Div10]),
    packed("Pv Yield Total", &[80, 81], Total(Units::KWh), &[Div10]),
    single("Solar Energy Today", 82, Measurement(Units::KWh), &[Div10]),
    packed("Eps Yield Total", &[83, 84], Total(Units::KWh), &[Div10]),
    single("Eps Yield Today", 85, Measurement(Units::KWh), &[Div10]),
    packed("Feed in Energy Total", &[86, 87], Total(Units::KWh), &[Div100]),
    packed("Consume Energy Total", &[88, 89], Total(Units::KWh), &[Div100]),
    packed("Feed In Energy Today", &[90, 91], Total(Units::KWh), &[Div100]),
    packed("Consume Energy Today", &[92, 93], Total(Units::KWh), &[Div100]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X3Ies",
    manufacturer: SOLAX,
    identification: Identification::Code(24),
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
