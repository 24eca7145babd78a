//! Find out which model answers at an address.
//!
//! Every model is tried with every transport it accepts. Attempts run as independent tasks,
//! started `stagger` apart so a slow dongle is not flooded with requests.

use crate::api::{self, Error};
use crate::inverter::Inverter;
use crate::inverters::Model;
use std::time::Duration;
use tokio::task::JoinSet;

/// Delay between the start of two consecutive attempts.
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnWhen {
    /// Stop at the first model that answers, aborting the remaining attempts.
    FirstCompleted,
    /// Wait for every attempt and return all models that answered.
    AllCompleted,
}

#[derive(Debug, Clone)]
pub struct Discovery {
    host: String,
    port: u16,
    pwd: String,
    models: Vec<Model>,
    stagger: Duration,
}

impl Discovery {
    pub fn new(host: &str, port: u16, pwd: &str) -> Self {
        Discovery {
            host: host.to_owned(),
            port,
            pwd: pwd.to_owned(),
            models: Model::ALL.to_vec(),
            stagger: DEFAULT_STAGGER,
        }
    }

    pub fn with_models(mut self, models: &[Model]) -> Self {
        self.models = models.to_vec();
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub async fn first(&self) -> Result<Inverter, Error> {
        let mut found = self.run(ReturnWhen::FirstCompleted).await?;
        if found.is_empty() {
            return Err(self.discovery_error(Vec::new()));
        }
        Ok(found.swap_remove(0))
    }

    pub async fn all(&self) -> Result<Vec<Inverter>, Error> {
        self.run(ReturnWhen::AllCompleted).await
    }

    fn discovery_error(&self, failures: Vec<Error>) -> Error {
        Error::DiscoveryError {
            host: self.host.clone(),
            port: self.port,
            failures,
        }
    }

    fn candidates(&self, client: &reqwest::Client) -> Vec<Inverter> {
        self.models
            .iter()
            .flat_map(|model| {
                Inverter::build_all_variants(*model, client, &self.host, self.port, &self.pwd)
            })
            .collect()
    }

    /// Try every candidate. Succeeds with at least one inverter, in candidate order.
    pub async fn run(&self, return_when: ReturnWhen) -> Result<Vec<Inverter>, Error> {
        let client = api::build_client()?;
        let candidates = self.candidates(&client);
        log::debug!(
            "probing {} candidates at {}:{}",
            candidates.len(),
            self.host,
            self.port
        );

        /* dropping the set aborts every attempt still running */
        let mut attempts = JoinSet::new();
        for (position, inverter) in candidates.into_iter().enumerate() {
            let delay = self
                .stagger
                .saturating_mul(u32::try_from(position).unwrap_or(u32::MAX));
            attempts.spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let result = inverter.get_data().await;
                (position, inverter, result)
            });
        }

        let mut found = Vec::new();
        let mut failures = Vec::new();
        while let Some(joined) = attempts.join_next().await {
            match joined {
                Ok((position, inverter, Ok(_))) => {
                    log::info!("found {} ({})", inverter, inverter.manufacturer());
                    found.push((position, inverter));
                    if return_when == ReturnWhen::FirstCompleted {
                        attempts.abort_all();
                        break;
                    }
                }
                Ok((_, inverter, Err(e))) => {
                    log::debug!("{} did not answer: {}", inverter, e);
                    failures.push(e);
                }
                Err(e) => {
                    log::error!("discovery task failed: {}", e);
                    failures.push(Error::InternalError);
                }
            }
        }

        if found.is_empty() {
            return Err(self.discovery_error(failures));
        }
        found.sort_by_key(|(position, _)| *position);
        Ok(found.into_iter().map(|(_, inverter)| inverter).collect())
    }
}

/// Return the first inverter answering at `host:port`.
pub async fn discover(host: &str, port: u16, pwd: &str) -> Result<Inverter, Error> {
    Discovery::new(host, port, pwd).first().await
}

/// Return every inverter model answering at `host:port`.
pub async fn discover_all(host: &str, port: u16, pwd: &str) -> Result<Vec<Inverter>, Error> {
    Discovery::new(host, port, pwd).all().await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{mock_address, read_resource};
    use mockito::Matcher;

    const FAST: Duration = Duration::from_millis(1);

    async fn x1_boost_server() -> mockito::ServerGuard {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_query(Matcher::UrlEncoded(
                "optType".into(),
                "ReadRealTimeData".into(),
            ))
            .match_header("X-Forwarded-For", "5.8.8.8")
            .with_body(read_resource("X1Boost.json"))
            .expect_at_least(1)
            .create_async()
            .await;
        server
    }

    #[tokio::test]
    async fn finds_first_matching_model() {
        let server = x1_boost_server().await;
        let (host, port) = mock_address(&server);

        let inverter = Discovery::new(&host, port, "")
            .with_stagger(FAST)
            .first()
            .await
            .unwrap();
        assert_eq!(Model::X1Boost, inverter.model());
        assert_eq!("Solax", inverter.manufacturer());
        assert!(inverter.to_string().starts_with("X1Boost::http://"));
        assert!(inverter.to_string().ends_with("using query in url"));
    }

    #[tokio::test]
    async fn finds_all_matching_models() {
        let server = x1_boost_server().await;
        let (host, port) = mock_address(&server);

        let found = Discovery::new(&host, port, "")
            .with_stagger(FAST)
            .all()
            .await
            .unwrap();
        assert_eq!(1, found.len());
        assert_eq!(Model::X1Boost, found[0].model());
    }

    #[tokio::test]
    async fn restricted_models_skip_the_rest() {
        let server = x1_boost_server().await;
        let (host, port) = mock_address(&server);

        let result = Discovery::new(&host, port, "")
            .with_models(&[Model::X1BoostG4, Model::X1Smart])
            .with_stagger(FAST)
            .first()
            .await;
        match result {
            Err(Error::DiscoveryError { failures, .. }) => assert_eq!(4, failures.len()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_host() {
        let result = Discovery::new("localhost", 2, "")
            .with_stagger(FAST)
            .first()
            .await;
        match result {
            Err(Error::DiscoveryError {
                host,
                port,
                failures,
            }) => {
                assert_eq!("localhost", host);
                assert_eq!(2, port);
                assert!(!failures.is_empty());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_http_server() {
        /* no mocks: every request gets 501 */
        let server = mockito::Server::new_async().await;
        let (host, port) = mock_address(&server);
        let candidates: usize = Model::ALL
            .iter()
            .map(|model| model.definition().transports.len())
            .sum();

        match Discovery::new(&host, port, "")
            .with_stagger(FAST)
            .all()
            .await
        {
            Err(Error::DiscoveryError { failures, .. }) => {
                assert_eq!(candidates, failures.len());
                assert!(failures
                    .iter()
                    .all(|failure| matches!(failure, Error::InverterError { .. })));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn no_models_to_try() {
        let result = Discovery::new("localhost", 2, "")
            .with_models(&[])
            .first()
            .await;
        assert_eq!(
            Err(Error::DiscoveryError {
                host: "localhost".to_string(),
                port: 2,
                failures: Vec::new(),
            }),
            result.map(|inverter| inverter.model())
        );
    }

    /// Mock answering only the body variant, the second X1Boost candidate.
    async fn body_variant_mock(server: &mut mockito::ServerGuard, hits: usize) -> mockito::Mock {
        server
            .mock("POST", "/")
            .match_body("optType=ReadRealTimeData")
            .match_header("X-Forwarded-For", "5.8.8.8")
            .with_status(500)
            .expect(hits)
            .create_async()
            .await
    }

    fn x1_boost_only(host: &str, port: u16, stagger: Duration) -> Discovery {
        Discovery::new(host, port, "")
            .with_models(&[Model::X1Boost])
            .with_stagger(stagger)
    }

    #[tokio::test]
    async fn staggered_requests_all_run() {
        let mut server = mockito::Server::new_async().await;
        let late = body_variant_mock(&mut server, 1).await;
        let (host, port) = mock_address(&server);

        let result = x1_boost_only(&host, port, Duration::from_millis(20)).all().await;
        assert!(matches!(result, Err(Error::DiscoveryError { .. })));
        late.assert_async().await;
    }

    #[tokio::test]
    async fn timing_out_discovery_aborts_pending_requests() {
        let mut server = mockito::Server::new_async().await;
        let late = body_variant_mock(&mut server, 0).await;
        let (host, port) = mock_address(&server);

        let discovery = x1_boost_only(&host, port, Duration::from_millis(300));
        let result = tokio::time::timeout(Duration::from_millis(50), discovery.all()).await;
        assert!(result.is_err());

        tokio::time::sleep(Duration::from_millis(600)).await;
        late.assert_async().await;
    }

    #[tokio::test]
    async fn aborting_discovery_task_aborts_pending_requests() {
        let mut server = mockito::Server::new_async().await;
        let late = body_variant_mock(&mut server, 0).await;
        let (host, port) = mock_address(&server);

        let discovery = x1_boost_only(&host, port, Duration::from_millis(300));
        let task = tokio::spawn(async move { discovery.all().await });
        tokio::time::sleep(Duration::from_millis(50)).await;
        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());

        tokio::time::sleep(Duration::from_millis(600)).await;
        late.assert_async().await;
    }
}
