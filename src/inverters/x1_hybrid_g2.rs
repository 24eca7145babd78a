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
    (11, "Gen Check Mode"),
    (12, "Gen Run Mode"),
    (13, "RSD Standby"),
];

const SENSORS: &[Sensor] = &[
    single("Grid Voltage", 4, Measurement(Units::V), &[Div10]),
    single("Grid Current", 5, Measurement(Units::A), &[Div10]),
    single("Grid Power", 6, Measurement(Units::W), &[ToSigned]),
    single("Grid Frequency", 7, Measurement(Units::Hz), &[Div100]),
    single("Run Mode", 10, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    single("PV1 Voltage", 11, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 12, Measurement(Units::V), &[Div10]),
    single("PV3 Voltage", 13, Measurement(Units::V), &[Div10]),
    single("Pv1 Current", 15, Measurement(Units::A), &[Div10]),
    single("Pv2 Current", 16, Measurement(Units::A), &[Div10]),
    single("Pv3 Current", 17, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 19, Measurement(Units::W), &[ToSigned]),
    single("PV2 Power", 20, Measurement(Units::W), &[ToSigned]),
    single("PV3 Power", 21, Measurement(Units::W), &[ToSigned]),
    single("EPS Apparent Power", 23, Measurement(Units::W), &[ToSigned]),
    single("EPS Voltage", 24, Measurement(Units::V), &[Div10]),
    single("EPS Current", 25, Measurement(Units::A), &[Div10]),
    single("EPS Frequency", 26, Measurement(Units::Hz), &[Div100]),
    single("EPS Active Power", 27, Measurement(Units::W), &[ToSigned]),
    packed("Feed in Power", &[28, 29], Measurement(Units::W), &[ToSigned32]),
    single("Selfuse Power", 30, Measurement(Units::W), &[ToSigned]),
    single("Active Power", 31, Measurement(Units::W), &[ToSigned]),
    single("ReactivePower", 32, Measurement(Units::W), &[ToSigned]),
    packed("Feed in Energy", &[33, 34], Measurement(Units::KWh), &[Div10]),
    packed("Consume Energy", &[35, 36], Measurement(Units::KWh), &[Div10]),
    packed("Feedin Energy Today", &[37, 38], Measurement(Units::KWh), &[Div10]),
    packed("Consume Energy Today", &[39, 40], Measurement(Units::KWh), &[Div10]),
    packed("Yield Total", &[41, 42], Total(Units::KWh), &[Div10]),
    single("Yield Today", 43, Measurement(Units::KWh), &[Div10]),
    packed("Solar Yield Total", &[44, 45], Measurement(Units::KWh), &[Div10]),
    single("Solar Yield Today", 46, Measurement(Units::KWh), &[Div10]),
    packed("Eps Yield Total", &[47, 48], Measurement(Units::KWh), &[Div10]),
    single("Eps Yield Today", 49, Measurement(Units::KWh), &[Div10]),
    packed("BatCharge Yield Total", &[50, 51], Measurement(Units::KWh), &[Div10]),
    single("OutputEnergy Charge Today", 52, Measurement(Units::W), &[Div10]),
    single("InputEnergy Charge Today", 53, Measurement(Units::W), &[Div10]),
    packed("Green Solar Yield Total", &[54, 55], Measurement(Units::KWh), &[Div10]),
    single("Green Solar Yield Today", 56, Measurement(Units::W), &[Div10]),
    single("Battery Voltage", 89, Measurement(Units::V), &[Div100]),
    single("Battery Current", 90, Measurement(Units::A), &[Div100]),
    single("Battery Power", 91, Measurement(Units::W), &[ToSigned]),
    single("Battery Temperature", 92, Measurement(Units::C), &[ToSigned]),
    single("Battery Capacity", 93, Measurement(Units::Percent), &[]),
    packed("Battery OutputEnergy", &[94, 95], Measurement(Units::KWh), &[Div10]),
    single("Battery SurplusEnergy", 99, Measurement(Units::KWh), &[Div10]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1HybridG2",
    manufacturer: SOLAX,
    identification: Identification::Code(19),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Between(290, 300),
        information: Some(("Information", Length::Between(9, 10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
