use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnits {
    #[default]
    Kilometers,
    Miles,
}

impl Display for DistanceUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DistanceUnits::Kilometers => "kilometers",
                DistanceUnits::Miles => "miles",
            }
        )
    }
}

impl FromStr for DistanceUnits {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kilometers" | "km" => Ok(DistanceUnits::Kilometers),
            "miles" | "mi" => Ok(DistanceUnits::Miles),
            other => Err(format!("Unknown distance units {other}")),
        }
    }
}
