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
];

const SENSORS: &[Sensor] = &[
    single("Grid Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Grid Current", 1, Measurement(Units::A), &[Div10]),
    single("Grid Power", 2, Measurement(Units::W), &[ToSigned]),
    single("Grid Frequency", 3, Measurement(Units::Hz), &[Div100]),
    single("PV1 Voltage", 5, Measurement(Units::V), &[Div10]),
    single("Pv1 Current", 6, Measurement(Units::A), &[Div10]),
    single("PV2 Voltage", 7, Measurement(Units::V), &[Div10]),
    single("Pv2 Current", 8, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 9, Measurement(Units::W), &[ToSigned]),
    single("PV2 Power", 10, Measurement(Units::W), &[ToSigned]),
    single("Run Mode", 12, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    packed("Yield Total", &[14, 15], Total(Units::KWh), &[Div10]),
    packed("Consume Total", &[16, 17], Total(Units::KWh), &[Div10]),
    single("Yield Today", 18, Measurement(Units::KWh), &[Div10]),
    single("Consume Today", 19, Measurement(Units::KWh), &[Div10]),
    single("Battery Voltage", 20, Measurement(Units::V), &[Div10]),
    single("Battery Current", 21, Measurement(Units::A), &[Div10]),
    single("Battery Power", 22, Measurement(Units::W), &[ToSigned]),
    packed("Battery Charge Total", &[23, 24], Total(Units::KWh), &[Div10]),
    packed("Battery Discharge Total", &[25, 26], Total(Units::KWh), &[Div10]),
    single("Battery Charge Today", 27, Total(Units::KWh), &[Div10]),
    single("Battery Discharge Today", 28, Total(Units::KWh), &[Div10]),
    packed("Feed in Power", &[29, 30], Measurement(Units::W), &[ToSigned32]),
    packed("Feed in Energy Total", &[31, 32], Measurement(Units::KWh), &[Div10]),
    packed("Consume Energy Total", &[33, 34], Measurement(Units::KWh), &[Div10]),
    packed("Feed in Energy Today", &[35, 36], Measurement(Units::KWh), &[Div10]),
    packed("Consume Energy Today", &[37, 38], Measurement(Units::KWh), &[Div10]),
    single("Invert temperature", 39, Measurement(Units::C), &[Div10]),
    single("Radiator Temperature", 40, Measurement(Units::C), &[Div10]),
    single("EPS Voltage", 41, Measurement(Units::V), &[Div10]),
    single("EPS Current", 42, Measurement(Units::A), &[Div10]),
    single("EPS Power", 43, Measurement(Units::W), &[Div10]),
    single("EPS Frequency", 44, Measurement(Units::Hz), &[Div100]),
    single("EPS Today", 45, Measurement(Units::KWh), &[Div10]),
    packed("EPS Total", &[46, 47], Measurement(Units::KWh), &[Div10]),
    single("PV Today", 51, Measurement(Units::KWh), &[Div10]),
    packed("PV Total", &[52, 53], Measurement(Units::KWh), &[Div10]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1HybridLv",
    manufacturer: SOLAX,
    identification: Identification::Code(102),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(200),
        information: Some(("Information", Length::Between(9, 10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
