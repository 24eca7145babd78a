use super::BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{DailyTotal, Measurement, Total};
use crate::units::Units;
use crate::utils::Lookup as Modes;

const RUN_MODES: &Modes = &[
    (0, "Wait"),
    (1, "Check"),
    (2, "Normal"),
    (3, "Fault"),
    (4, "Permanent Fault"),
    (5, "Update"),
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
    single("PV1 Voltage", 9, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 10, Measurement(Units::V), &[Div10]),
    single("PV3 Voltage", 11, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 12, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 13, Measurement(Units::A), &[Div10]),
    single("PV3 Current", 14, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 15, Measurement(Units::W), &[]),
    single("PV2 Power", 16, Measurement(Units::W), &[]),
    single("PV3 Power", 17, Measurement(Units::W), &[]),
    single("Grid 1 Frequency", 18, Measurement(Units::Hz), &[Div100]),
    single("Grid 2 Frequency", 19, Measurement(Units::Hz), &[Div100]),
    single("Grid 3 Frequency", 20, Measurement(Units::Hz), &[Div100]),
    single("Run Mode", 21, Measurement(Units::None), &[Lookup(RUN_MODES)]),
    packed("Total Yield", &[22, 23], Total(Units::KWh), &[Div10]),
    single("Daily Yield", 24, DailyTotal(Units::KWh), &[Div10]),
    packed("Feed-in Power", &[72, 73], Measurement(Units::W), &[ToSigned32]),
    packed("Total Feed-in Energy", &[74, 75], Total(Units::KWh), &[Div100]),
    packed("Total Consumption", &[76, 77], Total(Units::KWh), &[Div100]),
];

/// X3-MIC/PRO G2 on firmware 3.008.10.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X3MicProG2",
    manufacturer: SOLAX,
    identification: Identification::Code(16),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "data",
        data_length: Length::Exact(100),
        information: Some(("information", Length::Exact(10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: Some(2),
};
