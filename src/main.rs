#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

use config::Config;
use rocket::{Build, Rocket, State};
use solax_rs::api::Error;
use solax_rs::{InverterResponse, RealTimeApi};
use std::sync::Mutex;
use std::time::Instant;

mod metrics;

#[derive(Clone, serde::Deserialize)]
pub struct SolaxConfig {
    host: String,
    port: u16,
    password: String,
    interval: u64,
}

/// Structure containing state for API handlers.
pub struct StateData {
    settings: SolaxConfig,
    /// Inverter found by the first successful discovery.
    api: tokio::sync::Mutex<Option<RealTimeApi>>,
    /// Last successful poll and when it happened.
    last: Mutex<Option<(Instant, InverterResponse)>>,
}

impl StateData {
    fn new(settings: SolaxConfig) -> Self {
        StateData {
            settings,
            api: tokio::sync::Mutex::new(None),
            last: Mutex::new(None),
        }
    }

    /// Returns the cached inverter, running discovery on first use.
    async fn api(&self) -> Result<RealTimeApi, Error> {
        let mut api = self.api.lock().await;
        if let Some(api) = api.as_ref() {
            return Ok(api.clone());
        }

        let settings = &self.settings;
        let discovered =
            solax_rs::real_time_api(&settings.host, settings.port, &settings.password).await?;
        log::info!("using {}", discovered.inverter());
        *api = Some(discovered.clone());
        Ok(discovered)
    }

    /// Reads the inverter, feeds the gauges and caches the response.
    async fn poll(&self) -> Result<InverterResponse, Error> {
        let api = self.api().await?;
        let response = api.get_data().await?;
        metrics::collect(api.inverter(), &response);
        if let Ok(mut last) = self.last.lock() {
            *last = Some((Instant::now(), response.clone()));
        }
        Ok(response)
    }

    /// Cached response, unless it is older than `interval` seconds.
    fn fresh(&self) -> Option<InverterResponse> {
        let last = self.last.lock().ok()?;
        last.as_ref()
            .filter(|(at, _)| at.elapsed().as_secs() <= self.settings.interval)
            .map(|(_, response)| response.clone())
    }

    /// Cached response if fresh, otherwise a new poll.
    async fn current(&self) -> Result<InverterResponse, Error> {
        match self.fresh() {
            Some(response) => {
                log::debug!("interval not yet elapsed; using cached response");
                Ok(response)
            }
            None => self.poll().await,
        }
    }
}

pub fn read_settings() -> Result<SolaxConfig, Error> {
    let mut settings = Config::default();
    settings
        .merge(config::Environment::with_prefix("SOLAX"))
        .and_then(|s| s.set_default("port", 80))
        .and_then(|s| s.set_default("password", ""))
        .and_then(|s| s.set_default("interval", 30))
        .map_err(|e| Error::ConfigError(e.to_string()))?;

    settings
        .try_into()
        .map_err(|e| Error::ConfigError(e.to_string()))
}

#[get("/metrics")]
async fn metrics_route(state: &State<StateData>) -> Result<String, Error> {
    if let Err(e) = state.current().await {
        log::error!("{}", e);
        metrics::mark_down();
    }
    metrics::read().await
}

#[get("/sensors")]
async fn sensors_route(state: &State<StateData>) -> Result<String, Error> {
    let api = state.api().await?;
    let mut sensors: Vec<_> = api.inverter().sensor_map().into_iter().collect();
    sensors.sort_by_key(|(_, (index, _))| *index);

    Ok(sensors
        .iter()
        .map(|(name, (index, unit))| format!("{:>4}  {} [{:?}]\n", index, name, unit))
        .collect())
}

#[get("/data")]
async fn data_route(state: &State<StateData>) -> Result<String, Error> {
    let response = state.current().await?;
    serde_json::to_string_pretty(&response).or(Err(Error::FormatError))
}

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let settings = match read_settings() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{} (is SOLAX_HOST set?)", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "polling inverter at {}:{} every {}s",
        settings.host,
        settings.port,
        settings.interval
    );

    rocket::build()
        .manage(StateData::new(settings))
        .mount("/", routes![metrics_route, sensors_route, data_route])
}

#[cfg(test)]
mod test {
    use super::*;
    use solax_rs::model::TypeCode;
    use std::time::Duration;

    fn state(interval: u64) -> StateData {
        StateData::new(SolaxConfig {
            host: "localhost".to_string(),
            port: 80,
            password: String::new(),
            interval,
        })
    }

    fn response() -> InverterResponse {
        InverterResponse {
            data: Default::default(),
            serial_number: Some("SXXXXXXXXX".to_string()),
            inverter_serial_number: None,
            version: None,
            type_code: TypeCode::Code(4),
        }
    }

    fn cache(state: &StateData, age: Duration) {
        let at = Instant::now().checked_sub(age).unwrap();
        *state.last.lock().unwrap() = Some((at, response()));
    }

    #[test]
    fn nothing_cached_is_stale() {
        assert_eq!(None, state(30).fresh());
    }

    #[test]
    fn recent_response_is_reused() {
        let state = state(30);
        cache(&state, Duration::from_secs(10));
        assert_eq!(Some(response()), state.fresh());
    }

    #[test]
    fn old_response_is_stale() {
        let state = state(30);
        cache(&state, Duration::from_secs(31));
        assert_eq!(None, state.fresh());
    }
}
