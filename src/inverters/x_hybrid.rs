use crate::api::response::{Length, Schema};
use crate::api::Transport;
use crate::decoder::{single, Sensor};
use crate::inverter::{InverterDefinition, SOLAX};
use crate::model::Identification;
use crate::units::SensorUnit::{Measurement, Total};
use crate::units::Units;

/* https://github.com/GitHobi/solax/wiki/direct-data-retrieval */
const SENSORS: &[Sensor] = &[
    single("PV1 Current", 0, Measurement(Units::A), &[]),
    single("PV2 Current", 1, Measurement(Units::A), &[]),
    single("PV1 Voltage", 2, Measurement(Units::V), &[]),
    single("PV2 Voltage", 3, Measurement(Units::V), &[]),
    single("Output Current", 4, Measurement(Units::A), &[]),
    single("Network Voltage", 5, Measurement(Units::V), &[]),
    single("Power Now", 6, Measurement(Units::W), &[]),
    single("Inverter Temperature", 7, Measurement(Units::C), &[]),
    single("Today's Energy", 8, Measurement(Units::KWh), &[]),
    single("Total Energy", 9, Total(Units::KWh), &[]),
    single("Exported Power", 10, Measurement(Units::W), &[]),
    single("PV1 Power", 11, Measurement(Units::W), &[]),
    single("PV2 Power", 12, Measurement(Units::W), &[]),
    single("Battery Voltage", 13, Measurement(Units::V), &[]),
    single("Battery Current", 14, Measurement(Units::A), &[]),
    single("Battery Power", 15, Measurement(Units::W), &[]),
    single("Battery Temperature", 16, Measurement(Units::C), &[]),
    single("Battery Remaining Capacity", 17, Measurement(Units::Percent), &[]),
    single("Month's Energy", 19, Measurement(Units::KWh), &[]),
    single("Grid Frequency", 50, Measurement(Units::Hz), &[]),
    single("EPS Voltage", 53, Measurement(Units::V), &[]),
    single("EPS Current", 54, Measurement(Units::A), &[]),
    single("EPS Power", 55, Measurement(Units::W), &[]),
    single("EPS Frequency", 56, Measurement(Units::Hz), &[]),
];

/// First generation X-Hybrid, answering on the legacy GET endpoint.
pub const DEFINITION: InverterDefinition = InverterDefinition {
    name: "XHybrid",
    manufacturer: SOLAX,
    identification: Identification::Prefix("AL_SE"),
    schema: Schema {
        serial_key: "SN",
        version_key: "version",
        data_key: "Data",
        data_length: Length::Exact(58),
        information: None,
    },
    transports: &[Transport::GET],
    sensors: SENSORS,
    inverter_serial_index: None,
};
