use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// `[lat, lng]`
pub type LatLngPoint = [f64; 2];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Address {
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Address {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// A location the route has to pass through, serialized as a Valhalla location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    #[serde(rename = "lon")]
    pub lng: f64,

    /// Compass degrees in `[0, 360)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Waypoint {
    pub fn new(point: LatLngPoint) -> Self {
        Self {
            lat: point[0],
            lng: point[1],
            heading: None,
            name: None,
            street: None,
            city: None,
            state: None,
        }
    }

    pub fn with_heading(point: LatLngPoint, heading: u16) -> Result<Self, RouterError> {
        if heading >= 360 {
            return Err(RouterError::InvalidHeading(heading));
        }

        Ok(Self {
            heading: Some(heading),
            ..Self::new(point)
        })
    }

    pub fn with_address(point: LatLngPoint, address: Address) -> Self {
        Self {
            name: address.name,
            street: address.street,
            city: address.city,
            state: address.state,
            ..Self::new(point)
        }
    }
}

impl From<LatLngPoint> for Waypoint {
    fn from(point: LatLngPoint) -> Self {
        Waypoint::new(point)
    }
}

impl From<geo_types::Point> for Waypoint {
    fn from(point: geo_types::Point) -> Self {
        Waypoint::new([point.y(), point.x()])
    }
}
