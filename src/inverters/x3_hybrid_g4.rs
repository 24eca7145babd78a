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
    (6, "EPS Check"),
    (7, "EPS Mode"),
    (8, "Self Test"),
    (9, "Idle"),
    (10, "Standby"),
];

const SENSORS: &[Sensor] = &[
    single("Grid 1 Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Grid 2 Voltage", 1, Measurement(Units::V), &[Div10]),
    single("Grid 3 Voltage", 2, Measurement(Units::V), &[Div10]),
    single("Grid 1 Current", 3, Measurement(Units::A), &[TwowayDiv10]),
    single("Grid 2 Current", 4, Measurement(Units::A), &[TwowayDiv10]),
    single("Grid 3 Current", 5, Measurement(Units::A), &[TwowayDiv10]),
    single("Grid 1 Power", 6, Measurement(Units::W), &[ToSigned]),
    single("Grid 2 Power", 7, Measurement(Units::W), &[ToSigned]),
    single("Grid 3 Power", 8, Measurement(Units::W), &[ToSigned]),
    single("PV1 Voltage", 10, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 11, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 12, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 13, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 14, Measurement(Units::W), &[]),
    single("PV2 Power", 15, Measurement(Units::W), &[]),
    single("Grid 1 Frequency", 16, Measurement(Units::Hz), &[Div100]),
    single("Grid 2 Frequency", 17, Measurement(Units::Hz), &[Div100]),
    single("Grid 3 Frequency", 18, Measurement(Units::Hz), &[Div100]),
    single("Run mode", 19, Measurement(Units::None), &[]),
    single("Run mode text", 19, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    single("EPS 1 Voltage", 23, Measurement(Units::V), &[Div10]),
    single("EPS 2 Voltage", 24, Measurement(Units::V), &[Div10]),
    single("EPS 3 Voltage", 25, Measurement(Units::V), &[Div10]),
    single("EPS 1 Current", 26, Measurement(Units::A), &[TwowayDiv10]),
    single("EPS 2 Current", 27, Measurement(Units::A), &[TwowayDiv10]),
    single("EPS 3 Current", 28, Measurement(Units::A), &[TwowayDiv10]),
    single("EPS 1 Power", 29, Measurement(Units::W), &[ToSigned]),
    single("EPS 2 Power", 30, Measurement(Units::W), &[ToSigned]),
    single("EPS 3 Power", 31, Measurement(Units::W), &[ToSigned]),
    packed("Feed-in Power", &[34, 35], Measurement(Units::W), &[ToSigned32]),
    single("Battery Power", 41, Measurement(Units::W), &[ToSigned]),
    packed("Yield total", &[68, 69], Total(Units::KWh), &[Div10]),
    single("Yield today", 70, Measurement(Units::KWh), &[Div10]),
    packed("Feed-in Energy", &[86, 87], Total(Units::KWh), &[Div100]),
    packed("Consumed Energy", &[88, 89], Total(Units::KWh), &[Div100]),
    single("Battery Remaining Capacity", 103, Measurement(Units::Percent), &[]),
    single("Battery Temperature", 105, Measurement(Units::C), &[ToSigned]),
    packed("Battery Voltage", &[169, 170], Measurement(Units::V), &[Div100]),
];

/// X3 Hybrid G4 on firmware 3.006.04.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X3HybridG4",
    manufacturer: SOLAX,
    identification: Identification::Code(14),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(300),
        information: Some(("Information", Length::Exact(10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
