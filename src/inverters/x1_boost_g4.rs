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
    single("AC Frequency", 2, Measurement(Units::Hz), &[Div100]),
    single("AC Output Power", 3, Measurement(Units::W), &[]),
    single("PV1 Voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV2 Voltage", 5, Measurement(Units::V), &[Div10]),
    single("PV1 Current", 8, Measurement(Units::A), &[Div10]),
    single("PV2 Current", 9, Measurement(Units::A), &[Div10]),
    single("PV1 Power", 13, Measurement(Units::W), &[]),
    single("PV2 Power", 14, Measurement(Units::W), &[]),
    packed("Total Generated Energy", &[19, 20], Total(Units::KWh), &[Div10]),
    single("Today's Generated Energy", 21, DailyTotal(Units::KWh), &[Div10]),
    packed("Exported Power", &[72, 73], Measurement(Units::W), &[ToSigned32]),
    packed("Total Export Energy", &[74, 75], Total(Units::KWh), &[Div100]),
    packed("Total Import Energy", &[76, 77], Total(Units::KWh), &[Div100]),
];

/// X1-Boost gen 4 with Pocket WiFi 3.009.03.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1BoostG4",
    manufacturer: SOLAX,
    identification: Identification::Code(18),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "data",
        data_length: Length::Exact(100),
        information: Some(("information", Length::Exact(10))),
    },
    transports: QUERY_OR_BODY_FORWARDED,
    sensors: SENSORS,
    inverter_serial_index: Some(2),
};
