use tracing::debug;

use crate::{
    distance_units::DistanceUnits,
    error::RouterError,
    language::{Language, resolve_language},
    locale::Locale,
    route_request::{CostingOptions, DirectionsOptions, RouteRequest},
    travel_mode::TravelMode,
    waypoint::{Address, LatLngPoint, Waypoint},
};

pub const MIN_LOCATIONS: usize = 2;
pub const DEFAULT_MAX_HIKING_DIFFICULTY: i32 = 1;

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    travel_mode: TravelMode,
    language: Option<Language>,
    locale: Option<Locale>,
    units: DistanceUnits,
    locations: Vec<Waypoint>,
    max_hiking_difficulty: i32,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self {
            travel_mode: TravelMode::default(),
            language: None,
            locale: None,
            units: DistanceUnits::default(),
            locations: Vec::new(),
            max_hiking_difficulty: DEFAULT_MAX_HIKING_DIFFICULTY,
        }
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_language(&mut self, language: Language) -> &mut Self {
        self.language = Some(language);
        self
    }

    /// Overrides the process locale used when no language is set.
    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        self.locale = Some(locale);
        self
    }

    pub fn set_travel_mode(&mut self, travel_mode: TravelMode) -> &mut Self {
        self.travel_mode = travel_mode;
        self
    }

    pub fn set_walking(&mut self) -> &mut Self {
        self.set_travel_mode(TravelMode::Walking)
    }

    pub fn set_driving(&mut self) -> &mut Self {
        self.set_travel_mode(TravelMode::Driving)
    }

    pub fn set_biking(&mut self) -> &mut Self {
        self.set_travel_mode(TravelMode::Biking)
    }

    pub fn set_multimodal(&mut self) -> &mut Self {
        self.set_travel_mode(TravelMode::Multimodal)
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) -> &mut Self {
        self.locations.push(waypoint);
        self
    }

    pub fn set_location(&mut self, point: LatLngPoint) -> &mut Self {
        self.add_waypoint(Waypoint::new(point))
    }

    pub fn set_location_with_heading(
        &mut self,
        point: LatLngPoint,
        heading: u16,
    ) -> Result<&mut Self, RouterError> {
        let waypoint = Waypoint::with_heading(point, heading)?;
        Ok(self.add_waypoint(waypoint))
    }

    pub fn set_location_with_address(&mut self, point: LatLngPoint, address: Address) -> &mut Self {
        self.add_waypoint(Waypoint::with_address(point, address))
    }

    pub fn set_distance_units(&mut self, units: DistanceUnits) -> &mut Self {
        self.units = units;
        self
    }

    /// Any value is accepted and forwarded as is; it only affects walking routes.
    pub fn set_max_hiking_difficulty(&mut self, difficulty: i32) -> &mut Self {
        self.max_hiking_difficulty = difficulty;
        self
    }

    pub fn clear_locations(&mut self) -> &mut Self {
        self.locations.clear();
        self
    }

    pub fn travel_mode(&self) -> TravelMode {
        self.travel_mode
    }

    pub fn locations(&self) -> &[Waypoint] {
        &self.locations
    }

    pub fn build_request(&self) -> Result<RouteRequest, RouterError> {
        if self.locations.len() < MIN_LOCATIONS {
            return Err(RouterError::InvalidRequest(self.locations.len()));
        }

        let language = match self.language {
            Some(language) => language.to_string(),
            None => {
                let locale = self.locale.clone().unwrap_or_else(Locale::system);
                let language = resolve_language(&locale, Language::supported_tags());
                debug!("Resolved language {} from locale {:?}", language, locale);
                language
            }
        };

        Ok(RouteRequest {
            locations: self.locations.clone(),
            costing: self.travel_mode.to_string(),
            directions_options: DirectionsOptions {
                units: self.units.to_string(),
                language,
            },
            costing_options: CostingOptions {
                max_hiking_difficulty: self.max_hiking_difficulty.to_string(),
            },
        })
    }
}
