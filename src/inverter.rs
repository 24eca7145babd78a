use crate::api::response::{self, Schema};
use crate::api::{Cause, Error, InverterHttpClient, Transport};
use crate::decoder::{self, Sensor};
use crate::inverters::Model;
use crate::model::{Identification, InverterResponse};
use crate::units::SensorUnit;
use std::collections::HashMap;
use std::fmt;

pub const SOLAX: &str = "Solax";
pub const QCELLS: &str = "Qcells";

/// Everything known about one inverter model.
#[derive(Debug)]
pub struct InverterDefinition {
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub identification: Identification,
    pub schema: Schema,
    /// Ways of requesting data, in the order they are tried.
    pub transports: &'static [Transport],
    pub sensors: &'static [Sensor],
    /// Position of the inverter serial number in the `Information` array.
    pub inverter_serial_index: Option<usize>,
}

impl InverterDefinition {
    /// Parse, validate, identify and decode a raw response body.
    pub fn handle_response(&self, body: &str) -> Result<InverterResponse, Cause> {
        let json = response::parse(body)?;
        let raw = self.schema.validate(&json)?;

        if !self.identification.matches(&raw.type_code) {
            return Err(Cause::TypeMismatch {
                expected: self.identification.to_string(),
                received: raw.type_code.to_string(),
            });
        }

        let data = decoder::decode(self.sensors, &raw.registers)?;
        let inverter_serial_number = self
            .inverter_serial_index
            .and_then(|index| raw.information_str(index));

        Ok(InverterResponse {
            data,
            serial_number: raw.serial_number,
            inverter_serial_number,
            version: raw.version,
            type_code: raw.type_code,
        })
    }

    pub fn sensor_map(&self) -> HashMap<&'static str, (usize, SensorUnit)> {
        decoder::sensor_map(self.sensors)
    }
}

/// A model bound to one way of reaching one device.
#[derive(Debug, Clone)]
pub struct Inverter {
    model: Model,
    http_client: InverterHttpClient,
}

impl Inverter {
    pub fn new(model: Model, http_client: InverterHttpClient) -> Self {
        Inverter { model, http_client }
    }

    /// One candidate per transport variant `model` accepts.
    pub fn build_all_variants(
        model: Model,
        client: &reqwest::Client,
        host: &str,
        port: u16,
        pwd: &str,
    ) -> Vec<Inverter> {
        model
            .definition()
            .transports
            .iter()
            .map(|transport| {
                Inverter::new(model, transport.client(client.clone(), host, port, pwd))
            })
            .collect()
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn manufacturer(&self) -> &'static str {
        self.model.definition().manufacturer
    }

    pub fn http_client(&self) -> &InverterHttpClient {
        &self.http_client
    }

    pub async fn get_data(&self) -> Result<InverterResponse, Error> {
        let body = self
            .http_client
            .request()
            .await
            .map_err(|cause| Error::inverter(self.model, cause))?;
        self.model
            .definition()
            .handle_response(&body)
            .map_err(|cause| Error::inverter(self.model, cause))
    }

    pub fn sensor_map(&self) -> HashMap<&'static str, (usize, SensorUnit)> {
        self.model.definition().sensor_map()
    }
}

impl fmt::Display for Inverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.model, self.http_client)
    }
}
