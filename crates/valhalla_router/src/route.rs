use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Maneuver {
    #[serde(rename = "type", default)]
    pub maneuver_type: u32,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub street_names: Vec<String>,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub time: f64,
    #[serde(default)]
    pub begin_shape_index: usize,
    #[serde(default)]
    pub end_shape_index: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Leg {
    /// Encoded polyline, precision 6
    #[serde(default)]
    pub shape: String,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub maneuvers: Vec<Maneuver>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Trip {
    pub status: i32,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// A decoded `/route` response.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    raw: serde_json::Value,
    trip: Trip,
}

impl Route {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: serde_json::Value = serde_json::from_str(body)?;
        let trip = Trip::deserialize(&raw["trip"])?;

        Ok(Self { raw, trip })
    }

    pub fn found_route(&self) -> bool {
        self.trip.status == 0
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    pub fn legs(&self) -> &[Leg] {
        &self.trip.legs
    }

    pub fn maneuvers(&self) -> impl Iterator<Item = &Maneuver> {
        self.trip.legs.iter().flat_map(|leg| leg.maneuvers.iter())
    }

    /// Total length in the units of the request.
    pub fn total_distance(&self) -> f64 {
        self.trip.summary.length
    }

    /// Total time in seconds.
    pub fn total_time(&self) -> f64 {
        self.trip.summary.time
    }

    pub fn raw_route(&self) -> &serde_json::Value {
        &self.raw
    }
}
