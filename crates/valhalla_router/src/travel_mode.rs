use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Biking,
    Multimodal,
}

impl TravelMode {
    /// The costing model name understood by Valhalla.
    pub fn costing(&self) -> &'static str {
        match self {
            TravelMode::Driving => "auto",
            TravelMode::Walking => "pedestrian",
            TravelMode::Biking => "bicycle",
            TravelMode::Multimodal => "multimodal",
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.costing())
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "driving" | "auto" => Ok(TravelMode::Driving),
            "walking" | "pedestrian" => Ok(TravelMode::Walking),
            "biking" | "bicycle" => Ok(TravelMode::Biking),
            "multimodal" => Ok(TravelMode::Multimodal),
            other => Err(format!("Unknown travel mode {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelMode;

    #[test]
    fn test_costing_names() {
        assert_eq!(TravelMode::Driving.to_string(), "auto");
        assert_eq!(TravelMode::Walking.to_string(), "pedestrian");
        assert_eq!(TravelMode::Biking.to_string(), "bicycle");
        assert_eq!(TravelMode::Multimodal.to_string(), "multimodal");
    }

    #[test]
    fn test_parse_accepts_mode_and_costing_names() {
        assert_eq!("walking".parse::<TravelMode>(), Ok(TravelMode::Walking));
        assert_eq!("bicycle".parse::<TravelMode>(), Ok(TravelMode::Biking));
        assert!("hovercraft".parse::<TravelMode>().is_err());
    }
}
