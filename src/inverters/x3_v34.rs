use super::QUERY_OR_BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;

/* Totals are 16-bit registers; the register following each one counts its wraps */
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
    single("PV1 Voltage", 9, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 10, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 11, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 12, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 13, Measurement(Units::W), &[]),
    single("PV2 Power", 14, Measurement(Units::W), &[]),
    single(
        "Total PV Energy",
        89,
        Total(Units::KWh),
        &[ResettingCounter { resets: 90 }, Div10],
    ),
        single("Today's PV Energy", 112, Measurement(Units::KWh), &[Div10]),
    single("Grid Frequency Phase 1", 15, Measurement(Units::Hz), &[Div100]),
    single("Grid Frequency Phase 2", 16, Measurement(Units::Hz), &[Div100]),
    single("Grid Frequency Phase 3", 17, Measurement(Units::Hz), &[Div100]),
    single(
        "Total Energy",
        19,
        Total(Units::KWh),
        &[ResettingCounter { resets: 20 }, Div10],
    ),
        single("Today's Energy", 21, Measurement(Units::KWh), &[Div10]),
    single("Battery Voltage", 24, Measurement(Units::V), &[Div100]),
    single("Battery Current", 25, Measurement(Units::A), &[TwowayDiv100]),
    single("Battery Power", 26, Measurement(Units::W), &[ToSigned]),
    single("Battery Temperature", 27, Measurement(Units::C), &[]),
    single("Battery Remaining Capacity", 28, Measurement(Units::Percent), &[]),
    single(
        "Total Battery Discharge Energy",
        30,
        Total(Units::KWh),
        &[ResettingCounter { resets: 31 }, Div10],
    ),
        single("Today's Battery Discharge Energy", 113, Measurement(Units::KWh), &[Div10]),
    single("Battery Remaining Energy", 32, Measurement(Units::KWh), &[Div10]),
    single(
        "Total Battery Charge Energy",
        87,
        Total(Units::KWh),
        &[ResettingCounter { resets: 88 }, Div10],
    ),
        single("Today's Battery Charge Energy", 114, Measurement(Units::KWh), &[Div10]),
    single("Exported Power", 65, Measurement(Units::W), &[ToSigned]),
    single(
        "Total Feed-in Energy",
        67,
        Total(Units::KWh),
        &[ResettingCounter { resets: 68 }, Div100],
    ),
        single(
        "Total Consumption",
        69,
        Total(Units::KWh),
        &[ResettingCounter { resets: 70 }, Div100],
    ),
        single("AC Power", 181, Measurement(Units::W), &[ToSigned]),
    single("EPS Frequency", 63, Measurement(Units::Hz), &[Div100]),
    single(
        "EPS Total Energy",
        110,
        Measurement(Units::KWh),
        &[ResettingCounter { resets: 111 }, Div10],
    ),
    ];

/// X3 hybrid on Pocket WiFi 2.034.06.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X3V34",
    manufacturer: SOLAX,
    identification: Identification::Code(5),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "Data",
        data_length: Length::Exact(300),
        information: Some(("Information", Length::Exact(10))),
    },
    transports: QUERY_OR_BODY,
    sensors: SENSORS,
    inverter_serial_index: None,
};
