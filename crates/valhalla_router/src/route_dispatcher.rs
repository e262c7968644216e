use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    distance_units::DistanceUnits,
    error::{RouteError, RouterError, TransportError},
    fetch_handle::FetchHandle,
    language::Language,
    locale::Locale,
    request_builder::RequestBuilder,
    route::Route,
    route_callback::RouteCallback,
    route_request::RouteRequest,
    transport::{Transport, TransportResponse},
    travel_mode::TravelMode,
    waypoint::{Address, LatLngPoint, Waypoint},
};

/// Builds Valhalla route requests and dispatches them through a [`Transport`].
#[derive(Default, Clone)]
pub struct ValhallaRouter {
    builder: RequestBuilder,
    transport: Option<Arc<dyn Transport>>,
    callback: Option<Arc<dyn RouteCallback>>,
}

impl ValhallaRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) -> &mut Self {
        self.transport = Some(transport);
        self
    }

    pub fn set_language(&mut self, language: Language) -> &mut Self {
        self.builder.set_language(language);
        self
    }

    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        self.builder.set_locale(locale);
        self
    }

    pub fn set_travel_mode(&mut self, travel_mode: TravelMode) -> &mut Self {
        self.builder.set_travel_mode(travel_mode);
        self
    }

    pub fn set_walking(&mut self) -> &mut Self {
        self.builder.set_walking();
        self
    }

    pub fn set_driving(&mut self) -> &mut Self {
        self.builder.set_driving();
        self
    }

    pub fn set_biking(&mut self) -> &mut Self {
        self.builder.set_biking();
        self
    }

    pub fn set_multimodal(&mut self) -> &mut Self {
        self.builder.set_multimodal();
        self
    }

    pub fn set_location(&mut self, point: LatLngPoint) -> &mut Self {
        self.builder.set_location(point);
        self
    }

    pub fn set_location_with_heading(
        &mut self,
        point: LatLngPoint,
        heading: u16,
    ) -> Result<&mut Self, RouterError> {
        self.builder.set_location_with_heading(point, heading)?;
        Ok(self)
    }

    pub fn set_location_with_address(&mut self, point: LatLngPoint, address: Address) -> &mut Self {
        self.builder.set_location_with_address(point, address);
        self
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> &mut Self {
        self.builder.add_waypoint(waypoint);
        self
    }

    pub fn set_distance_units(&mut self, units: DistanceUnits) -> &mut Self {
        self.builder.set_distance_units(units);
        self
    }

    pub fn set_max_hiking_difficulty(&mut self, difficulty: i32) -> &mut Self {
        self.builder.set_max_hiking_difficulty(difficulty);
        self
    }

    pub fn clear_locations(&mut self) -> &mut Self {
        self.builder.clear_locations();
        self
    }

    /// Replaces the callback used by subsequent calls to [`ValhallaRouter::fetch`].
    pub fn set_callback(&mut self, callback: Arc<dyn RouteCallback>) -> &mut Self {
        self.callback = Some(callback);
        self
    }

    pub fn builder(&self) -> &RequestBuilder {
        &self.builder
    }

    pub fn build_request(&self) -> Result<RouteRequest, RouterError> {
        self.builder.build_request()
    }

    /// Requests a route with the currently registered callback.
    ///
    /// The callback is captured now: registering another one afterwards does not
    /// affect this fetch. Without a callback the outcome is only logged.
    pub fn fetch(&self) -> Result<FetchHandle, RouterError> {
        self.dispatch(self.callback.clone())
    }

    /// Requests a route, reporting its outcome to `callback` only.
    pub fn fetch_with(&self, callback: Arc<dyn RouteCallback>) -> Result<FetchHandle, RouterError> {
        self.dispatch(Some(callback))
    }

    fn dispatch(
        &self,
        callback: Option<Arc<dyn RouteCallback>>,
    ) -> Result<FetchHandle, RouterError> {
        let request = self.builder.build_request()?;
        let transport = self
            .transport
            .as_ref()
            .ok_or(RouterError::MissingTransport)?;
        let runtime =
            tokio::runtime::Handle::try_current().map_err(|_| RouterError::MissingRuntime)?;

        debug!(
            "Fetching {} route through {} locations",
            request.costing,
            request.locations.len()
        );

        let response = transport.request_route(request);
        let task = runtime.spawn(async move {
            let outcome = route_outcome(response.await);

            match (callback, outcome) {
                (Some(callback), Ok(route)) => callback.success(route),
                (Some(callback), Err(error)) => callback.failure(error),
                (None, Ok(_)) => debug!("Route fetched but no callback was registered"),
                (None, Err(error)) => {
                    debug!("Route fetch failed with no callback registered: {}", error)
                }
            }
        });

        Ok(FetchHandle::new(task))
    }
}

fn route_outcome(result: Result<TransportResponse, TransportError>) -> Result<Route, RouteError> {
    let response = result.inspect_err(|err| warn!("Route request failed: {}", err))?;

    match response.usable_body() {
        Some(body) => Ok(Route::from_json(body)?),
        None => {
            debug!("Routing service responded with status {}", response.status);
            Err(RouteError::Status(response.status))
        }
    }
}
