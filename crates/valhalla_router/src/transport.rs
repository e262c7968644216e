use futures::future::BoxFuture;

use crate::{error::TransportError, route_request::RouteRequest};

/// What the routing service answered, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl TransportResponse {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body when the response is successful and carries one.
    pub fn usable_body(&self) -> Option<&str> {
        self.body
            .as_deref()
            .filter(|body| self.is_success() && !body.trim().is_empty())
    }
}

/// Sends route requests to the routing service.
///
/// Resolves to `Err` only when no HTTP response was received at all.
pub trait Transport: Send + Sync {
    fn request_route(
        &self,
        request: RouteRequest,
    ) -> BoxFuture<'static, Result<TransportResponse, TransportError>>;
}
