use thiserror::Error;

/// Errors raised synchronously while configuring the router or building a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("A route request needs at least 2 locations, got {0}")]
    InvalidRequest(usize),

    #[error("Heading must be in the range [0, 360), got {0}")]
    InvalidHeading(u16),

    #[error("No transport configured")]
    MissingTransport,

    #[error("Fetching a route requires a running tokio runtime")]
    MissingRuntime,
}

/// Failures of the transport itself, when no HTTP response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid endpoint {endpoint}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Invalid timeout {0}, expected a number of seconds")]
    InvalidTimeout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Asynchronous outcome delivered to [`crate::RouteCallback::failure`].
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Routing service responded with status {0}")]
    Status(u16),

    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("Failed to decode route: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RouteError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RouteError::Status(status) => Some(*status),
            _ => None,
        }
    }
}
