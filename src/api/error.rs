use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::fmt;
use std::io::Cursor;

/// Reason a single inverter candidate could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum Cause {
    Connection(String),
    Timeout(String),
    Status(u16),
    Unauthorized(String),
    InvalidJson { error: String, body: String },
    Schema(String),
    TypeMismatch { expected: String, received: String },
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Communication with one inverter failed.
    InverterError { inverter: String, cause: Cause },
    /// No known inverter answered at the given address.
    DiscoveryError {
        host: String,
        port: u16,
        failures: Vec<Error>,
    },
    ConfigError(String),
    FormatError,
    InternalError,
}

impl Error {
    pub fn inverter(inverter: impl ToString, cause: Cause) -> Self {
        Error::InverterError {
            inverter: inverter.to_string(),
            cause,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::InverterError {
                cause: Cause::Timeout(_),
                ..
            }
        )
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Connection(e) => write!(f, "could not connect to inverter endpoint: {}", e),
            Cause::Timeout(e) => write!(f, "timeout: {}", e),
            Cause::Status(code) => write!(f, "inverter responded with HTTP {}", code),
            Cause::Unauthorized(e) => write!(f, "password rejected: {}", e),
            Cause::InvalidJson { error, body } => {
                write!(f, "received malformed JSON ({}): {}", error, body)
            }
            Cause::Schema(e) => write!(f, "response does not match schema: {}", e),
            Cause::TypeMismatch { expected, received } => {
                write!(f, "expected type {}, received {}", expected, received)
            }
            Cause::Decode(e) => write!(f, "could not decode response: {}", e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InverterError { inverter, cause } => write!(f, "{}: {}", inverter, cause),
            Error::DiscoveryError {
                host,
                port,
                failures,
            } => {
                write!(
                    f,
                    "Unable to connect to the inverter at host={} port={}, \
                     or your inverter is not supported yet. Failures=[",
                    host, port
                )?;
                for (i, failure) in failures.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", failure)?;
                }
                f.write_str("]")
            }
            Error::ConfigError(e) => write!(f, "configuration error: {}", e),
            Error::FormatError => f.write_str("could not format output"),
            Error::InternalError => f.write_str("internal error"),
        }
    }
}

impl std::error::Error for Error {}

/// Escape text for use inside an HTML element.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn page(title: &str, detail: &str) -> String {
    format!(
        "<html><body><h3>{}</h3><code>{}</code></body></html>",
        title,
        escape(detail)
    )
}

fn html(status: Status, title: &str, detail: String) -> response::Result<'static> {
    let body = page(title, &detail);
    Response::build()
        .status(status)
        .sized_body(body.len(), Cursor::new(body))
        .header(ContentType::new("text", "html"))
        .ok()
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        match self {
            Error::DiscoveryError { .. } => html(
                Status::ServiceUnavailable,
                "503 Service Unavailable",
                self.to_string(),
            ),
            Error::InverterError { .. } => {
                html(Status::BadGateway, "502 Bad Gateway", self.to_string())
            }
            _ => html(
                Status::InternalServerError,
                "Unknown exception",
                format!("{:?}", self),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn discovery_error_lists_failures() {
        let error = Error::DiscoveryError {
            host: "localhost".to_string(),
            port: 2,
            failures: vec![
                Error::inverter("X1Boost", Cause::Status(501)),
                Error::inverter("X3", Cause::Schema("missing key".to_string())),
            ],
        };
        let text = error.to_string();
        assert!(text.contains("host=localhost port=2"));
        assert!(text.contains("X1Boost: inverter responded with HTTP 501"));
        assert!(text.contains("X3: response does not match schema: missing key"));
    }

    #[test]
    fn only_timeouts_are_timeouts() {
        assert!(Error::inverter("X3", Cause::Timeout("5s".to_string())).is_timeout());
        assert!(!Error::inverter("X3", Cause::Status(500)).is_timeout());
        assert!(!Error::InternalError.is_timeout());
    }

    #[test]
    fn error_pages_escape_inverter_output() {
        let error = Error::inverter(
            "X1Boost",
            Cause::InvalidJson {
                error: "expected value".to_string(),
                body: "<script>a && b</script>".to_string(),
            },
        );
        let body = page("502 Bad Gateway", &error.to_string());
        assert!(body.contains("&lt;script&gt;a &amp;&amp; b&lt;/script&gt;"));
        assert!(!body.contains("<script>"));
        assert!(body.starts_with("<html><body><h3>502 Bad Gateway</h3><code>"));
    }
}
