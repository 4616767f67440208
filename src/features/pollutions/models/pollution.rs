use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Kind of pollution observed, matching the `pollution_type` database enum.
///
/// Serialized as the English label. Deserialization goes through `FromStr`,
/// so request bodies accept the same spellings as the `type` query filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Type, ToSchema)]
#[sqlx(type_name = "pollution_type", rename_all = "snake_case")]
pub enum PollutionType {
    #[serde(rename = "Plastic")]
    Plastic,
    #[serde(rename = "Chemical")]
    Chemical,
    #[serde(rename = "Illegal dumping")]
    IllegalDumping,
    #[serde(rename = "Water")]
    Water,
    #[serde(rename = "Air")]
    Air,
    #[serde(rename = "Other")]
    Other,
}

impl PollutionType {
    pub const ALL: [PollutionType; 6] = [
        PollutionType::Plastic,
        PollutionType::Chemical,
        PollutionType::IllegalDumping,
        PollutionType::Water,
        PollutionType::Air,
        PollutionType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PollutionType::Plastic => "Plastic",
            PollutionType::Chemical => "Chemical",
            PollutionType::IllegalDumping => "Illegal dumping",
            PollutionType::Water => "Water",
            PollutionType::Air => "Air",
            PollutionType::Other => "Other",
        }
    }

    fn legacy_label(&self) -> &'static str {
        match self {
            PollutionType::Plastic => "Plastique",
            PollutionType::Chemical => "Chimique",
            PollutionType::IllegalDumping => "Dépôt sauvage",
            PollutionType::Water => "Eau",
            PollutionType::Air => "Air",
            PollutionType::Other => "Autre",
        }
    }
}

impl fmt::Display for PollutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PollutionType {
    type Err = String;

    /// Case-insensitive match on the English label, the French label or the snake_case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PollutionType::ALL
            .into_iter()
            .find(|t| {
                t.label().to_lowercase() == wanted
                    || t.legacy_label().to_lowercase() == wanted
                    || t.label().to_lowercase().replace(' ', "_") == wanted
            })
            .ok_or_else(|| format!("Unknown pollution type '{}'", s.trim()))
    }
}

impl<'de> Deserialize<'de> for PollutionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Database model for a pollution declaration
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Pollution {
    pub id: i32,
    pub title: String,
    pub pollution_type: PollutionType,
    pub description: String,
    pub observed_at: DateTime<Utc>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated data for creating or replacing a declaration
#[derive(Debug, Clone, PartialEq)]
pub struct NewPollution {
    pub title: String,
    pub pollution_type: PollutionType,
    pub description: String,
    pub observed_at: DateTime<Utc>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_url: Option<String>,
}
