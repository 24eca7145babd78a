use prometheus::{Encoder, GaugeVec, IntGauge, TextEncoder};
use solax_rs::api::Error;
use solax_rs::{Inverter, InverterResponse};

lazy_static! {
    static ref SENSOR_GAUGE: GaugeVec = register_gauge_vec!(
        opts!("solax_sensor", "numeric reading reported by the inverter",),
        &["serial", "sensor", "unit"],
    )
    .unwrap();
    static ref UP_GAUGE: IntGauge = register_int_gauge!(opts!(
        "solax_up",
        "whether the last poll of the inverter succeeded",
    ))
    .unwrap();
}

/// Feed every numeric reading of `response` to the Prometheus registry.
///
/// Text readings (operating modes) have no gauge representation and are skipped.
pub fn collect(inverter: &Inverter, response: &InverterResponse) {
    let sensors = inverter.sensor_map();
    let serial = response
        .inverter_serial_number
        .as_deref()
        .or_else(|| response.dongle_serial_number())
        .unwrap_or_default();

    for (sensor, value) in &response.data {
        if let Some(value) = value.as_f64() {
            let unit = sensors
                .get(sensor.as_str())
                .map(|(_, unit)| unit.unit().as_str())
                .unwrap_or_default();
            SENSOR_GAUGE
                .with_label_values(&[serial, sensor.as_str(), unit])
                .set(value);
        }
    }
    UP_GAUGE.set(1);
}

pub fn mark_down() {
    UP_GAUGE.set(0);
}

/// Read metrics from Prometheus exporter registry.
pub async fn read() -> Result<String, Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode(&metric_families, &mut buffer)
        .or(Err(Error::FormatError))?;
    String::from_utf8(buffer).or(Err(Error::FormatError))
}
