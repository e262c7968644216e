pub mod distance_units;
pub mod error;
pub mod fetch_handle;
pub mod http_transport;
pub mod language;
pub mod locale;
pub mod request_builder;
pub mod route;
pub mod route_callback;
pub mod route_dispatcher;
pub mod route_request;
pub mod transport;
pub mod travel_mode;
pub mod waypoint;

#[cfg(test)]
mod test_utils;

pub use distance_units::DistanceUnits;
pub use error::{RouteError, RouterError, TransportError};
pub use fetch_handle::FetchHandle;
pub use language::Language;
pub use locale::Locale;
pub use request_builder::RequestBuilder;
pub use route::Route;
pub use route_callback::RouteCallback;
pub use route_dispatcher::ValhallaRouter;
pub use route_request::RouteRequest;
pub use transport::{Transport, TransportResponse};
pub use travel_mode::TravelMode;
pub use waypoint::{Address, Waypoint};
