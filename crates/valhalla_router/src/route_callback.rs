use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

use crate::{error::RouteError, route::Route};

/// Receives the outcome of a fetch.
///
/// Called from the task running the request, not from the caller's context.
pub trait RouteCallback: Send + Sync {
    fn success(&self, route: Route);

    fn failure(&self, error: RouteError);
}

/// Forwards outcomes into a channel, to be awaited elsewhere.
impl RouteCallback for UnboundedSender<Result<Route, RouteError>> {
    fn success(&self, route: Route) {
        if self.send(Ok(route)).is_err() {
            warn!("Route receiver dropped before success was delivered");
        }
    }

    fn failure(&self, error: RouteError) {
        if let Err(err) = self.send(Err(error)) {
            warn!("Route receiver dropped before failure was delivered: {:?}", err.0);
        }
    }
}
