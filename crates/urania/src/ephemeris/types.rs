use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    /// East-positive
    pub longitude: f64,
}

/// Requested house system. Only `Equal` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    Placidus,
    Koch,
    #[default]
    Equal,
}

impl HouseSystem {
    pub fn name(&self) -> &'static str {
        match self {
            HouseSystem::Placidus => "Placidus",
            HouseSystem::Koch => "Koch",
            HouseSystem::Equal => "Equal",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "placidus" => Some(HouseSystem::Placidus),
            "koch" => Some(HouseSystem::Koch),
            "equal" => Some(HouseSystem::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Birth data for a natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalInput {
    /// Display only
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` local clock time
    pub time: String,
    /// Signed UTC offset, `+HH:MM` or `-HH:MM`
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub house_system: HouseSystem,
}

impl NatalInput {
    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Sample chart used to seed an empty profile list
pub fn default_natal_input() -> NatalInput {
    NatalInput {
        name: "Sample Chart".to_string(),
        date: "1990-06-15".to_string(),
        time: "08:15".to_string(),
        timezone: "-03:00".to_string(),
        latitude: -34.6037,
        longitude: -58.3816,
        house_system: HouseSystem::Equal,
    }
}
