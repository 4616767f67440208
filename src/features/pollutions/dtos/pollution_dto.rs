use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::pollutions::filters::PollutionFilters;
use crate::features::pollutions::models::{NewPollution, Pollution, PollutionType};
use crate::features::pollutions::validators::{
    check_observation_date, parse_coordinate, parse_date_input, validate_latitude,
    validate_longitude, validate_observation_date, validate_photo_url, CoordinateKind, DayBound,
};

/// Accept coordinates sent either as JSON numbers or as strings from a form field
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

/// Request body for creating or replacing a pollution declaration.
///
/// French field names from the original front-end are accepted as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PollutionRequestDto {
    #[serde(alias = "titre")]
    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: String,

    #[serde(alias = "type", alias = "type_pollution")]
    pub pollution_type: PollutionType,

    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must be 10-500 characters"
    ))]
    pub description: String,

    /// `YYYY-MM-DD` or an ISO 8601 date-time; not in the future, not before 1900
    #[serde(alias = "date_observation", alias = "dateObservation")]
    #[validate(custom(function = "validate_observation_date"))]
    pub observed_at: String,

    #[serde(alias = "lieu")]
    #[validate(length(min = 3, max = 100, message = "Location must be 3-100 characters"))]
    pub location: String,

    #[serde(deserialize_with = "number_or_string")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: String,

    #[serde(deserialize_with = "number_or_string")]
    #[schema(value_type = f64)]
    #[validate(custom(function = "validate_longitude"))]
    pub longitude: String,

    #[serde(default, alias = "photoUrl")]
    #[validate(custom(function = "validate_photo_url"))]
    pub photo_url: Option<String>,
}

impl PollutionRequestDto {
    /// Trim text fields; a blank photo URL becomes `None`
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            pollution_type: self.pollution_type,
            description: self.description.trim().to_string(),
            observed_at: self.observed_at.trim().to_string(),
            location: self.location.trim().to_string(),
            latitude: self.latitude.trim().to_string(),
            longitude: self.longitude.trim().to_string(),
            photo_url: self
                .photo_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        }
    }

    /// Trim, run every field rule and convert to the storage shape.
    ///
    /// All failing fields are reported together in one validation error.
    pub fn into_new_pollution(self, now: DateTime<Utc>) -> Result<NewPollution> {
        let dto = self.trimmed();
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let invalid = |e: validator::ValidationError| AppError::Validation(e.to_string());

        Ok(NewPollution {
            observed_at: check_observation_date(&dto.observed_at, now).map_err(invalid)?,
            latitude: parse_coordinate(&dto.latitude, CoordinateKind::Latitude)
                .map_err(invalid)?,
            longitude: parse_coordinate(&dto.longitude, CoordinateKind::Longitude)
                .map_err(invalid)?,
            title: dto.title,
            pollution_type: dto.pollution_type,
            description: dto.description,
            location: dto.location,
            photo_url: dto.photo_url,
        })
    }
}

/// Response DTO for a pollution declaration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PollutionResponseDto {
    pub id: i32,
    pub title: String,
    pub pollution_type: PollutionType,
    pub description: String,
    pub observed_at: DateTime<Utc>,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pollution> for PollutionResponseDto {
    fn from(p: Pollution) -> Self {
        Self {
            id: p.id,
            title: p.title,
            pollution_type: p.pollution_type,
            description: p.description,
            observed_at: p.observed_at,
            location: p.location,
            latitude: p.latitude,
            longitude: p.longitude,
            photo_url: p.photo_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Query params for filtering the declaration list. Blank values are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PollutionQueryParams {
    /// Pollution type label, e.g. `Water` (French labels accepted)
    #[serde(rename = "type")]
    pub pollution_type: Option<String>,

    /// Case-insensitive substring of the location
    #[serde(alias = "lieu")]
    pub location: Option<String>,

    /// Earliest observation date (inclusive)
    #[serde(alias = "dateFrom")]
    pub date_from: Option<String>,

    /// Latest observation date (inclusive; a bare date covers the whole day)
    #[serde(alias = "dateTo")]
    pub date_to: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl PollutionQueryParams {
    pub fn into_filters(self) -> Result<PollutionFilters> {
        let pollution_type = non_blank(self.pollution_type)
            .map(|t| t.parse::<PollutionType>().map_err(AppError::BadRequest))
            .transpose()?;

        let parse_bound = |name: &str, raw: Option<String>, bound: DayBound| {
            non_blank(raw)
                .map(|raw| {
                    parse_date_input(&raw, bound).ok_or_else(|| {
                        AppError::BadRequest(format!("Invalid {} date '{}'", name, raw))
                    })
                })
                .transpose()
        };

        let date_from = parse_bound("date_from", self.date_from, DayBound::Start)?;
        let date_to = parse_bound("date_to", self.date_to, DayBound::End)?;

        Ok(PollutionFilters {
            pollution_type,
            location: non_blank(self.location),
            date_from,
            date_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn valid_json() -> serde_json::Value {
        serde_json::json!({
            "title": "  Oil on the river  ",
            "pollution_type": "Water",
            "description": "Rainbow sheen spreading downstream of the bridge.",
            "observed_at": "2024-05-20",
            "location": "Lyon, Rhône",
            "latitude": 45.764,
            "longitude": "4.8357",
            "photo_url": "   "
        })
    }

    #[test]
    fn test_into_new_pollution_trims_and_parses() {
        let dto: PollutionRequestDto = serde_json::from_value(valid_json()).unwrap();
        let data = dto.into_new_pollution(now()).unwrap();

        assert_eq!(data.title, "Oil on the river");
        assert_eq!(data.pollution_type, PollutionType::Water);
        assert_eq!(
            data.observed_at,
            Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap()
        );
        assert_eq!(data.latitude, 45.764);
        assert_eq!(data.longitude, 4.8357);
        assert_eq!(data.photo_url, None);
    }

    #[test]
    fn test_accepts_french_field_names() {
        let dto: PollutionRequestDto = serde_json::from_value(serde_json::json!({
            "titre": "Déchets plastiques",
            "type": "Plastique",
            "description": "Sacs et bouteilles sur la plage.",
            "dateObservation": "2024-01-25T16:45:00",
            "lieu": "Deauville",
            "latitude": 49.3598,
            "longitude": 0.0748,
            "photoUrl": "https://example.org/beach.png"
        }))
        .unwrap();

        let data = dto.into_new_pollution(now()).unwrap();
        assert_eq!(data.pollution_type, PollutionType::Plastic);
        assert_eq!(data.location, "Deauville");
        assert_eq!(
            data.photo_url.as_deref(),
            Some("https://example.org/beach.png")
        );
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let mut json = valid_json();
        json["title"] = "ab".into();
        json["latitude"] = 91.into();
        json["photo_url"] = "https://example.org/file.txt".into();

        let dto: PollutionRequestDto = serde_json::from_value(json).unwrap();
        let err = dto.into_new_pollution(now()).unwrap_err();
        let AppError::Validation(message) = err else {
            panic!("expected validation error, got {:?}", err);
        };
        assert!(message.contains("title"), "{}", message);
        assert!(message.contains("latitude"), "{}", message);
        assert!(message.contains("photo_url"), "{}", message);
    }

    #[test]
    fn test_title_length_counts_after_trim() {
        let mut json = valid_json();
        json["title"] = "  ab  ".into();
        let dto: PollutionRequestDto = serde_json::from_value(json).unwrap();
        assert!(matches!(
            dto.into_new_pollution(now()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_future_date_is_rejected_against_given_clock() {
        let mut json = valid_json();
        json["observed_at"] = "2024-06-02".into();
        let dto: PollutionRequestDto = serde_json::from_value(json).unwrap();
        assert!(dto.into_new_pollution(now()).is_err());
    }

    #[test]
    fn test_unknown_type_fails_deserialization() {
        let mut json = valid_json();
        json["pollution_type"] = "Noise".into();
        assert!(serde_json::from_value::<PollutionRequestDto>(json).is_err());
    }

    #[test]
    fn test_query_params_into_filters() {
        let params = PollutionQueryParams {
            pollution_type: Some("eau".to_string()),
            location: Some("  lille ".to_string()),
            date_from: Some("2024-01-01".to_string()),
            date_to: Some("2024-01-31".to_string()),
        };
        let filters = params.into_filters().unwrap();

        assert_eq!(filters.pollution_type, Some(PollutionType::Water));
        assert_eq!(filters.location.as_deref(), Some("lille"));
        assert_eq!(
            filters.date_from,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(filters.date_to.unwrap() > Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 0).unwrap());
    }

    #[test]
    fn test_blank_query_params_are_no_constraint() {
        let params = PollutionQueryParams {
            pollution_type: Some("".to_string()),
            location: Some("   ".to_string()),
            date_from: None,
            date_to: Some("".to_string()),
        };
        assert!(params.into_filters().unwrap().is_empty());
    }

    #[test]
    fn test_bad_query_params_are_rejected() {
        let bad_type = PollutionQueryParams {
            pollution_type: Some("Noise".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad_type.into_filters(),
            Err(AppError::BadRequest(_))
        ));

        let bad_date = PollutionQueryParams {
            date_from: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            bad_date.into_filters(),
            Err(AppError::BadRequest(_))
        ));
    }
}
