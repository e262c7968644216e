use serde::{Deserialize, Serialize};

use crate::waypoint::Waypoint;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsOptions {
    pub units: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostingOptions {
    pub max_hiking_difficulty: String,
}

/// Request document posted to the `/route` endpoint.
///
/// Built by [`crate::RequestBuilder::build_request`]; owns its own copy of the
/// waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub locations: Vec<Waypoint>,
    pub costing: String,
    pub directions_options: DirectionsOptions,
    pub costing_options: CostingOptions,
}
