use crate::api::response::{Length, Schema};
use crate::api::Transport;
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, QCELLS};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;
use crate::utils::{BATTERY_OPERATION_MODES, INVERTER_OPERATION_MODES};

/* 118-152: BMS and battery serial numbers, ASCII, two characters per register */
const SENSORS: &[Sensor] = &[
    single("Network Voltage", 0, Measurement(Units::V), &[Div10]),
    single("Inverter output current", 1, Measurement(Units::A), &[TwowayDiv10]),
    single("Inverter output power", 2, Measurement(Units::W), &[ToSigned]),
    single("Grid Frequency", 3, Measurement(Units::Hz), &[Div100]),
    single("PV1 Voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 5, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 6, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 7, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 8, Measurement(Units::W), &[]),
    single("PV2 Power", 9, Measurement(Units::W), &[]),
    single(
        "Inverter status",
        10,
        Measurement(Units::None),
        &[Lookup(INVERTER_OPERATION_MODES)],
    ),
    packed("Total inverter yield", &[11, 12], Total(Units::KWh), &[Div10]),
    single("Today's inverter yield", 13, Measurement(Units::KWh), &[Div10]),
    single("Battery Voltage", 14, Measurement(Units::V), &[Div100]),
    single("Battery Current", 15, Measurement(Units::A), &[TwowayDiv100]),
    single("Battery Power", 16, Measurement(Units::W), &[ToSigned]),
    single("Battery Temperature", 17, Measurement(Units::C), &[]),
    single("Battery Remaining Capacity", 18, Measurement(Units::Percent), &[]),
    packed(
        "Total battery discharged energy",
        &[19, 20],
        Total(Units::KWh),
        &[Div10],
    ),
    packed(
        "Total battery charged energy",
        &[21, 22],
        Total(Units::KWh),
        &[Div10],
    ),
    single("Battery Remaining Energy", 23, Measurement(Units::KWh), &[Div10]),
    packed("Current grid power", &[32, 33], Measurement(Units::W), &[ToSigned32]),
    packed("Total grid export", &[34, 35], Total(Units::KWh), &[Div100]),
    packed("Total grid import", &[36, 37], Total(Units::KWh), &[Div100]),
    single("Current power usage", 38, Measurement(Units::W), &[ToSigned]),
    packed("Total self-used solar", &[54, 55], Total(Units::KWh), &[Div10]),
    packed("Today's grid export", &[78, 79], Measurement(Units::KWh), &[Div100]),
    packed("Today's grid import", &[80, 81], Measurement(Units::KWh), &[Div100]),
    single("Today's solar yield", 85, Measurement(Units::KWh), &[Div10]),
    packed(
        "Total battery energy throughput",
        &[116, 117],
        Total(Units::Wh),
        &[],
    ),
    single(
        "Battery Operation mode",
        157,
        Measurement(Units::None),
        &[Lookup(BATTERY_OPERATION_MODES)],
    ),
];

/// Q.VOLT HYB-G3-1P.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "QVOLTHYBG31P",
    manufacturer: QCELLS,
    identification: Identification::Code(15),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(200),
        information: Some(("Information", Length::Exact(10))),
    },
    transports: &[Transport::POST_BODY_WITH_PASSWORD],
    sensors: SENSORS,
    inverter_serial_index: None,
};
