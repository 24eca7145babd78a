use super::BODY;
use crate::api::response::{Length, Schema};
use crate::decoder::{packed, single, Sensor, Transform::*};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{DailyTotal, Measurement, Total};
use crate::units::Units;

const SENSORS: &[Sensor] = &[
    single("AC voltage R", 0, Measurement(Units::V), &[Div10]),
    single("AC current", 1, Measurement(Units::A), &[Div10]),
    single("AC power", 2, Measurement(Units::W), &[ToSigned]),
    single("Grid frequency", 3, Measurement(Units::Hz), &[Div100]),
    single("PV1 voltage", 4, Measurement(Units::V), &[Div10]),
    single("PV2 voltage", 5, Measurement(Units::V), &[Div10]),
    single("PV1 current", 6, Measurement(Units::A), &[Div10]),
    single("PV2 current", 7, Measurement(Units::A), &[Div10]),
    single("PV1 power", 8, Measurement(Units::W), &[]),
    single("PV2 power", 9, Measurement(Units::W), &[]),
    packed("On-grid total yield", &[11, 12], Total(Units::KWh), &[Div10]),
    single("On-grid daily yield", 13, DailyTotal(Units::KWh), &[Div10]),
    single("Battery voltage", 14, Measurement(Units::V), &[Div100]),
    single("Battery current", 15, Measurement(Units::A), &[Div100]),
    single("Battery power", 16, Measurement(Units::W), &[ToSigned]),
    single("Battery temperature", 17, Measurement(Units::C), &[]),
    single("Battery SoC", 18, Measurement(Units::Percent), &[]),
    single("Inverter Temperature", 26, Measurement(Units::C), &[]),
    single("Grid power", 32, Measurement(Units::W), &[ToSigned]),
    packed("Total feed-in energy", &[34, 35], Total(Units::KWh), &[Div100]),
    packed("Total consumption", &[36, 37], Total(Units::KWh), &[Div100]),
];

pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "X1HybridGen4",
    manufacturer: SOLAX,
    identification: Identification::Code(15),
    schema: Schema {
        serial_key: "sn",
        version_key: "ver",
        data_key: "data",
        data_length: Length::Between(200, 300),
        information: Some(("information", Length::Between(9, 10))),
    },
    transports: BODY,
    sensors: SENSORS,
    inverter_serial_index: Some(2),
};
