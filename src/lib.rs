pub mod api;
pub mod decoder;
pub mod discovery;
pub mod inverter;
pub mod inverters;
pub mod model;
pub mod units;
pub mod utils;

#[cfg(test)]
mod testing;

pub use api::{Cause, Error};
pub use discovery::{discover, discover_all, Discovery, ReturnWhen};
pub use inverter::Inverter;
pub use inverters::Model;
pub use model::{InverterResponse, Value};
pub use units::{SensorUnit, Units};

use std::future::Future;
use std::time::Duration;

/// Added to the doubled wait after every timeout.
const RETRY_BACKOFF: Duration = Duration::from_secs(5);

/// Number of attempts `RealTimeApi::get_data` makes before giving up on timeouts.
pub const DEFAULT_RETRIES: u32 = 3;

/// Polling handle around a discovered inverter.
#[derive(Debug, Clone)]
pub struct RealTimeApi {
    inverter: Inverter,
}

impl RealTimeApi {
    pub fn new(inverter: Inverter) -> Self {
        RealTimeApi { inverter }
    }

    pub fn inverter(&self) -> &Inverter {
        &self.inverter
    }

    pub async fn get_data(&self) -> Result<InverterResponse, Error> {
        let inverter = &self.inverter;
        rt_request(move || inverter.get_data(), DEFAULT_RETRIES, Duration::ZERO).await
    }
}

/// Discover the inverter at `host:port` and wrap it for polling.
pub async fn real_time_api(host: &str, port: u16, pwd: &str) -> Result<RealTimeApi, Error> {
    let inverter = discover(host, port, pwd).await?;
    Ok(RealTimeApi::new(inverter))
}

/// Call `get_data` up to `retry` times while it times out.
///
/// Sleeps `wait` before the first attempt. After each timeout the wait becomes twice the
/// previous one plus five seconds. Errors other than timeouts are returned immediately.
pub async fn rt_request<F, Fut, T>(mut get_data: F, retry: u32, wait: Duration) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let mut remaining = retry;
    let mut wait = wait;
    loop {
        if !wait.is_zero() {
            log::error!("Timeout in get_data(), retrying in {:?}", wait);
            tokio::time::sleep(wait).await;
        }

        match get_data().await {
            Err(e) if e.is_timeout() && remaining > 1 => {
                log::warn!("{} ({} attempts left)", e, remaining - 1);
                remaining -= 1;
                wait = wait.saturating_mul(2).saturating_add(RETRY_BACKOFF);
            }
            Err(e) if e.is_timeout() => {
                log::error!("Too many timeouts");
                return Err(e);
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{mock_address, read_resource};
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    fn timeout() -> Error {
        Error::inverter("X1Boost", Cause::Timeout("operation timed out".to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn retries_timeouts_with_growing_backoff() {
        let calls = &AtomicU32::new(0);
        let start = Instant::now();

        let result: Result<(), Error> = rt_request(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(timeout())
            },
            3,
            Duration::ZERO,
        )
        .await;

        assert_eq!(Err(timeout()), result);
        assert_eq!(3, calls.load(Ordering::SeqCst));
        /* waits of 0 s, 5 s and 15 s */
        assert_eq!(20, start.elapsed().as_secs());
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_a_timeout() {
        let calls = &AtomicU32::new(0);
        let start = Instant::now();

        let result = rt_request(
            move || async move {
                match calls.fetch_add(1, Ordering::SeqCst) {
                    0 => Err(timeout()),
                    _ => Ok(42),
                }
            },
            3,
            Duration::ZERO,
        )
        .await;

        assert_eq!(Ok(42), result);
        assert_eq!(2, calls.load(Ordering::SeqCst));
        assert_eq!(5, start.elapsed().as_secs());
    }

    #[tokio::test(start_paused = true)]
    async fn waits_when_asked() {
        let start = Instant::now();
        let result = rt_request(|| async { Ok::<_, Error>("done") }, 3, Duration::from_secs(2)).await;

        assert_eq!(Ok("done"), result);
        assert_eq!(2, start.elapsed().as_secs());
    }

    #[tokio::test(start_paused = true)]
    async fn other_errors_stop_immediately() {
        let calls = &AtomicU32::new(0);

        let result: Result<(), Error> = rt_request(
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::inverter("X1Boost", Cause::Status(500)))
            },
            3,
            Duration::ZERO,
        )
        .await;

        assert_eq!(Err(Error::inverter("X1Boost", Cause::Status(500))), result);
        assert_eq!(1, calls.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn polls_a_discovered_inverter() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_query(mockito::Matcher::Any)
            .match_header("X-Forwarded-For", "5.8.8.8")
            .with_body(read_resource("X1Boost.json"))
            .create_async()
            .await;
        let (host, port) = mock_address(&server);

        let api = real_time_api(&host, port, "").await.unwrap();
        assert_eq!(Model::X1Boost, api.inverter().model());

        let response = api.get_data().await.unwrap();
        assert_eq!(Some("SXXXXXXXXX"), response.dongle_serial_number());
        assert!(response.data.contains_key("AC Voltage"));
    }
}
