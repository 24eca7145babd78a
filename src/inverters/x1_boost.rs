use super::QUERY_OR_BODY_FORWARDED;
use crate::api::response::{Length, Schema};
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{DailyTotal, Measurement, Total};
use crate::units::Units;

const SENSORS: &[Sensor] = &[
    single("AC Voltage", 0, Measurement(Units::V), &[Div10]),
    single("AC Output Current", 1, Measurement(Units::A), &[Div10]),
    single("AC Output Power", 2, Measurement(Units::W), &[]),
    single("PV1 Voltage", 3, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 5, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 6, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 7, Measurement(Units::W), &[]),
    single("PV2 Power", 8, Measurement(Units::W), &[]),
    single("AC Frequency", 9, Measurement(Units::Hz), &[Div100]),
    packed("Total Generated Energy", &[11, 12], Total(Units::KWh), &[Div10]),
    single("Today's Generated Energy", 13, DailyTotal(Units::KWh), &[Div10]),
    single("Inverter Temperature", 39, Measurement(Units::C), &[]),
    single("Exported Power", 48, Measurement(Units::W), &[ToSigned]),
    packed("Total Export Energy", &[50, 51], Total(Units::KWh), &[Div100]),
    packed("Total Import Energy", &[52, 53], Total(Units::KWh), &[Div100]),
];

/// X1-Boost with Pocket WiFi 2.034.06.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1Boost",
    manufacturer: SOLAX,
    identification: Identification::Code(4),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "data",
        data_length: Length::Exact(200),
        information: Some(("information", Length::Exact(10))),
    },
    transports: QUERY_OR_BODY_FORWARDED,
    sensors: SENSORS,
    inverter_serial_index: Some(2),
};
