use crate::api::response::{Length, Schema};
use crate::api::Transport;
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, QCELLS};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;
use crate::utils::{BATTERY_OPERATION_MODES, INVERTER_OPERATION_MODES};

/*
 * Registers not listed are either constant or not understood yet:
 * 35 is 0 when 34 is negative and 65535 otherwise, 42-44 mirror 39-41 with other scaling,
 * 127-128 look like a resetting battery throughput counter in Wh.
 */
const SENSORS: &[Sensor] = &[
    single("Network Voltage Phase 1", 0, Measurement(Units::V), &[Div10]),
    single("Network Voltage Phase 2", 1, Measurement(Units::V), &[Div10]),
    single("Network Voltage Phase 3", 2, Measurement(Units::V), &[Div10]),
    single("Output Current Phase 1", 3, Measurement(Units::A), &[TwowayDiv10]),
    single("Output Current Phase 2", 4, Measurement(Units::A), &[TwowayDiv10]),
    single("Output Current Phase 3", 5, Measurement(Units::A), &[TwowayDiv10]),
    single("Power Now Phase 1", 6, Measurement(Units::W), &[ToSigned]),
    single("Power Now Phase 2", 7, Measurement(Units::W), &[ToSigned]),
    single("Power Now Phase 3", 8, Measurement(Units::W), &[ToSigned]),
    single("AC Power", 9, Measurement(Units::W), &[ToSigned]),
    single("PV1 Voltage", 10, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 11, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 12, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 13, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 14, Measurement(Units::W), &[]),
    single("PV2 Power", 15, Measurement(Units::W), &[]),
    single("Grid Frequency Phase 1", 16, Measurement(Units::Hz), &[Div100]),
    single("Grid Frequency Phase 2", 17, Measurement(Units::Hz), &[Div100]),
    single("Grid Frequency Phase 3", 18, Measurement(Units::Hz), &[Div100]),
    single(
        "Inverter Operation mode",
        19,
        Measurement(Units::None),
        &[Lookup(INVERTER_OPERATION_MODES)],
    ),
    single("Exported Power", 34, Measurement(Units::W), &[ToSigned]),
    single("Battery Voltage", 39, Measurement(Units::V), &[Div100]),
    single("Battery Current", 40, Measurement(Units::A), &[TwowayDiv100]),
    single("Battery Power", 41, Measurement(Units::W), &[ToSigned]),
    single("Power Now", 47, Measurement(Units::W), &[ToSigned]),
    packed("Total Energy", &[68, 69], Total(Units::KWh), &[Div10]),
    packed(
        "Total Battery Discharge Energy",
        &[74, 75],
        Total(Units::KWh),
        &[Div10],
    ),
    packed(
        "Total Battery Charge Energy",
        &[76, 77],
        Total(Units::KWh),
        &[Div10],
    ),
    single("Today's Battery Discharge Energy", 78, Measurement(Units::KWh), &[Div10]),
    single("Today's Battery Charge Energy", 79, Measurement(Units::KWh), &[Div10]),
    packed("Total PV Energy", &[80, 81], Total(Units::KWh), &[Div10]),
    single("Today's Energy", 82, Measurement(Units::KWh), &[Div10]),
    packed("Total Feed-in Energy", &[86, 87], Total(Units::KWh), &[Div100]),
    packed("Total Consumption", &[88, 89], Total(Units::KWh), &[Div100]),
    single("Today's Feed-in Energy", 90, Measurement(Units::KWh), &[Div100]),
    single("Today's Consumption", 92, Measurement(Units::KWh), &[Div100]),
    single("Battery Remaining Capacity", 103, Measurement(Units::Percent), &[]),
    single("Battery Temperature", 105, Measurement(Units::C), &[]),
    single("Battery Remaining Energy", 106, Measurement(Units::KWh), &[Div10]),
    single(
        "Battery Operation mode",
        168,
        Measurement(Units::None),
        &[Lookup(BATTERY_OPERATION_MODES)],
    ),
];

/// Q.VOLT HYB-G3-3P.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "QVOLTHYBG33P",
    manufacturer: QCELLS,
    identification: Identification::Code(14),
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
