pub mod endpoint;
pub mod error;
pub mod response;

pub use error::{Cause, Error};

use std::fmt;
use std::time::Duration;

/// Timeout applied to every single HTTP request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// Where the `optType`/`pwd` parameters travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Params {
    None,
    Query,
    Body,
    /// Body that carries the `pwd` field even when it is empty.
    BodyWithPassword,
}

/// One way of asking a dongle for its real-time data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transport {
    pub method: Method,
    pub endpoint: &'static endpoint::Endpoint,
    pub params: Params,
    pub forwarded: bool,
}

impl Transport {
    pub const GET: Transport = Transport {
        method: Method::Get,
        endpoint: endpoint::REAL_TIME_DATA,
        params: Params::None,
        forwarded: false,
    };
    pub const POST_QUERY: Transport = Transport {
        method: Method::Post,
        endpoint: endpoint::ROOT,
        params: Params::Query,
        forwarded: false,
    };
    pub const POST_BODY: Transport = Transport {
        method: Method::Post,
        endpoint: endpoint::ROOT,
        params: Params::Body,
        forwarded: false,
    };
    pub const POST_QUERY_FORWARDED: Transport = Transport {
        forwarded: true,
        ..Transport::POST_QUERY
    };
    pub const POST_BODY_FORWARDED: Transport = Transport {
        forwarded: true,
        ..Transport::POST_BODY
    };
    pub const POST_BODY_WITH_PASSWORD: Transport = Transport {
        params: Params::BodyWithPassword,
        ..Transport::POST_BODY
    };

    /// Build the HTTP client for this variant against `host:port`.
    pub fn client(
        &self,
        client: reqwest::Client,
        host: &str,
        port: u16,
        pwd: &str,
    ) -> InverterHttpClient {
        let url = format!("http://{}:{}{}", host, port, self.endpoint);
        let http = InverterHttpClient::new(client, url, self.method, pwd);
        let http = match self.params {
            Params::None => http,
            Params::Query => http.with_default_query(),
            Params::Body => http.with_default_data(),
            Params::BodyWithPassword => http.with_data(format!(
                "{}&pwd={}",
                endpoint::READ_REAL_TIME_DATA,
                pwd
            )),
        };
        if self.forwarded {
            let (name, value) = endpoint::X_FORWARDED_FOR;
            http.with_header(name, value)
        } else {
            http
        }
    }
}

/// Shared HTTP client used by every discovery request.
pub fn build_client() -> Result<reqwest::Client, Error> {
    build_client_with_timeout(REQUEST_TIMEOUT)
}

pub fn build_client_with_timeout(timeout: Duration) -> Result<reqwest::Client, Error> {
    reqwest::ClientBuilder::new()
        .no_proxy()
        .timeout(timeout)
        .build()
        .or(Err(Error::InternalError))
}

/// Map a failed request to the reason it failed.
fn map_api_err(error: reqwest::Error) -> Cause {
    if error.is_timeout() {
        return Cause::Timeout(error.to_string());
    }
    match error.status() {
        Some(http::StatusCode::UNAUTHORIZED) | Some(http::StatusCode::FORBIDDEN) => {
            Cause::Unauthorized(error.to_string())
        }
        Some(status) => Cause::Status(status.as_u16()),
        None => Cause::Connection(error.to_string()),
    }
}

#[derive(Debug, Clone)]
pub struct InverterHttpClient {
    url: String,
    method: Method,
    pwd: String,
    headers: Vec<(&'static str, String)>,
    data: Option<String>,
    query: Option<String>,
    client: reqwest::Client,
}

impl InverterHttpClient {
    pub fn new(client: reqwest::Client, url: String, method: Method, pwd: &str) -> Self {
        InverterHttpClient {
            url,
            method,
            pwd: pwd.to_owned(),
            headers: Vec::new(),
            data: None,
            query: None,
            client,
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_owned()));
        self
    }

    pub fn with_data(mut self, data: String) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_default_data(self) -> Self {
        let data = if self.pwd.is_empty() {
            endpoint::READ_REAL_TIME_DATA.to_string()
        } else {
            format!("{}&pwd={}", endpoint::READ_REAL_TIME_DATA, self.pwd)
        };
        self.with_data(data)
    }

    pub fn with_query(mut self, query: String) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_default_query(self) -> Self {
        let query = if self.pwd.is_empty() {
            endpoint::READ_REAL_TIME_DATA.to_string()
        } else {
            format!("{}&pwd={}&", endpoint::READ_REAL_TIME_DATA, self.pwd)
        };
        self.with_query(query)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn full_url(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.url, query),
            None => self.url.clone(),
        }
    }

    /// Perform the request and return the raw response body.
    pub async fn request(&self) -> Result<String, Cause> {
        let url = self.full_url();
        let mut request = match self.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        for (name, value) in &self.headers {
            request = request.header(*name, value.as_str());
        }
        if let Some(data) = &self.data {
            request = request.body(data.clone());
        }

        let body = request
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(map_api_err)?
            .text()
            .await
            .map_err(map_api_err)?;

        log::trace!("{} responded: {}", self, body);
        Ok(body)
    }
}

impl fmt::Display for InverterHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let using = match (&self.query, &self.data) {
            (Some(_), _) => "query in url",
            (None, Some(_)) => "data in the body",
            (None, None) => "no parameters",
        };
        write!(f, "{} using {}", self.url, using)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::mock_address;
    use mockito::Matcher;

    #[tokio::test]
    async fn post_query_with_password() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("optType".into(), "ReadRealTimeData".into()),
                Matcher::UrlEncoded("pwd".into(), "secret".into()),
            ]))
            .with_body("{}")
            .create_async()
            .await;

        let (host, port) = mock_address(&server);
        let client = Transport::POST_QUERY.client(build_client().unwrap(), &host, port, "secret");
        assert_eq!("{}", client.request().await.unwrap());
        assert!(client.to_string().ends_with("/ using query in url"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn post_body_forwarded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("X-Forwarded-For", "5.8.8.8")
            .match_body("optType=ReadRealTimeData")
            .with_body("ok")
            .create_async()
            .await;

        let (host, port) = mock_address(&server);
        let client =
            Transport::POST_BODY_FORWARDED.client(build_client().unwrap(), &host, port, "");
        assert_eq!("ok", client.request().await.unwrap());
        assert!(client.to_string().ends_with("using data in the body"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn body_with_password_always_sends_pwd() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body("optType=ReadRealTimeData&pwd=")
            .with_body("ok")
            .create_async()
            .await;

        let (host, port) = mock_address(&server);
        let client =
            Transport::POST_BODY_WITH_PASSWORD.client(build_client().unwrap(), &host, port, "");
        assert_eq!("ok", client.request().await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_real_time_data() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/realTimeData.htm")
            .with_body("ok")
            .create_async()
            .await;

        let (host, port) = mock_address(&server);
        let client = Transport::GET.client(build_client().unwrap(), &host, port, "ignored");
        assert_eq!("ok", client.request().await.unwrap());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_status_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;
        server
            .mock("GET", "/api/realTimeData.htm")
            .with_status(401)
            .create_async()
            .await;

        let (host, port) = mock_address(&server);
        let client = Transport::POST_BODY.client(build_client().unwrap(), &host, port, "");
        assert_eq!(Err(Cause::Status(500)), client.request().await);

        let client = Transport::GET.client(build_client().unwrap(), &host, port, "");
        assert!(matches!(
            client.request().await,
            Err(Cause::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn silent_endpoint_times_out() {
        /* accepts connections but never answers */
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let silent = tokio::spawn(async move {
            let mut connections = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                connections.push(socket);
            }
        });

        let client = build_client_with_timeout(Duration::from_millis(200)).unwrap();
        let http = Transport::POST_BODY.client(client, "127.0.0.1", port, "");
        let cause = http.request().await.unwrap_err();
        assert!(matches!(cause, Cause::Timeout(_)), "{:?}", cause);
        assert!(Error::inverter("X1Boost", cause).is_timeout());

        silent.abort();
    }

    #[tokio::test]
    async fn unreachable_host_is_a_connection_error() {
        let client = Transport::POST_BODY.client(build_client().unwrap(), "localhost", 2, "");
        assert!(matches!(
            client.request().await,
            Err(Cause::Connection(_))
        ));
    }
}
