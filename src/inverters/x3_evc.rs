use super::BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;
use crate::utils::Lookup as Modes;

const DEVICE_STATES: &Modes = &[
    (0, "Preparing"),
    (1, "Preparing"),
    (2, "Charging"),
    (3, "Finishing"),
    (4, "Faulted"),
    (5, "Unavailable"),
    (6, "Reserved"),
    (7, "SuspendedEV"),
    (8, "SuspendedEVSE"),
];

const DEVICE_MODES: &Modes = &[(0, "STOP"), (1, "FAST"), (2, "ECO"), (3, "GREEN")];

const SENSORS: &[Sensor] = &[
    single("Device State", 0, Measurement(Units::None), &[Lookup(DEVICE_STATES)]),
    single("Device Mode", 1, Measurement(Units::None), &[Lookup(DEVICE_MODES)]),
    single("EQ Single", 12, Total(Units::KWh), &[Div10]),
    packed("EQ Total", &[14, 15], Total(Units::KWh), &[Div10]),
    single("Total Charger Power", 11, Measurement(Units::W), &[]),
    single("Voltage A", 2, Measurement(Units::V), &[Div100]),
    single("Voltage B", 3, Measurement(Units::V), &[Div100]),
    single("Voltage C", 4, Measurement(Units::V), &[Div100]),
    single("Current A", 5, Measurement(Units::A), &[Div100]),
    single("Current B", 6, Measurement(Units::A), &[Div100]),
    single("Current C", 7, Measurement(Units::A), &[Div100]),
    single("Charger Power A", 8, Measurement(Units::W), &[]),
    single("Charger Power B", 9, Measurement(Units::W), &[]),
    single("Charger Power C", 10, Measurement(Units::W), &[]),
    single("Extern Current A", 16, Measurement(Units::A), &[TwowayDiv100]),
    single("Extern Current B", 17, Measurement(Units::A), &[TwowayDiv100]),
    single("Extern Current C", 18, Measurement(Units::A), &[TwowayDiv100]),
    single("Extern Power A", 19, Measurement(Units::W), &[ToSigned]),
    single("Extern Power B", 20, Measurement(Units::W), &[ToSigned]),
    single("Extern Power C", 21, Measurement(Units::W), &[ToSigned]),
    single("Extern Total Power", 22, Measurement(Units::W), &[ToSigned]),
    single("Temperature Plug", 23, Measurement(Units::C), &[]),
    single("Temperature PCB", 24, Measurement(Units::C), &[]),
    single("CP State", 26, Measurement(Units::None), &[]),
    packed("Charging Duration", &[80, 81], Measurement(Units::None), &[ToSigned32]),
    single("OCPP Offline Mode", 85, Measurement(Units::None), &[]),
    single("Type Power", 87, Measurement(Units::None), &[]),
    single("Type Phase", 88, Measurement(Units::None), &[]),
    single("Type Charger", 89, Measurement(Units::None), &[]),
];

/// X3 EV charger.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X3EVC",
    manufacturer: SOLAX,
    identification: Identification::Code(1),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "data",
        data_length: Length::Exact(96),
        information: Some(("information", Length::Exact(10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: Some(2),
};
