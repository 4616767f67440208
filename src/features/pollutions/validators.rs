//! Field rules for pollution declarations.
//!
//! Each `validate_*` function has the signature expected by
//! `#[validate(custom(function = ...))]`; the `check_*` and `parse_*`
//! variants return the parsed value and take `now` explicitly so the date
//! rules can be tested deterministically.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use validator::ValidationError;

use crate::shared::constants::{
    MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE, MIN_OBSERVATION_DATE,
};
use crate::shared::validation::PHOTO_URL_REGEX;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Which end of a day a date-only input should resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBound {
    Start,
    End,
}

/// Parse `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` (taken as UTC) or RFC 3339.
pub fn parse_date_input(raw: &str, bound: DayBound) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let time = match bound {
        DayBound::Start => NaiveTime::from_hms_opt(0, 0, 0)?,
        DayBound::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?,
    };
    Some(Utc.from_utc_datetime(&date.and_time(time)))
}

fn min_observation_date() -> Option<DateTime<Utc>> {
    parse_date_input(MIN_OBSERVATION_DATE, DayBound::Start)
}

/// Observation date must parse, must not be after `now` and must not predate 1900-01-01.
pub fn check_observation_date(
    raw: &str,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let observed_at = parse_date_input(raw, DayBound::Start)
        .ok_or_else(|| error("invalid_date", "Observation date is not a valid date"))?;

    if observed_at > now {
        return Err(error(
            "future_date",
            "Observation date cannot be in the future",
        ));
    }

    if min_observation_date().is_some_and(|min| observed_at < min) {
        return Err(error(
            "too_old_date",
            "Observation date cannot be earlier than 1900",
        ));
    }

    Ok(observed_at)
}

pub fn validate_observation_date(raw: &str) -> Result<(), ValidationError> {
    check_observation_date(raw, Utc::now()).map(|_| ())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateKind {
    Latitude,
    Longitude,
}

/// Parse a coordinate and check it lies in the closed range for its kind.
pub fn parse_coordinate(raw: &str, kind: CoordinateKind) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(error("required", "Coordinate is required"));
    }

    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| error("invalid_number", "Coordinate must be a valid number"))?;

    let in_range = match kind {
        CoordinateKind::Latitude => (MIN_LATITUDE..=MAX_LATITUDE).contains(&value),
        CoordinateKind::Longitude => (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&value),
    };

    if !in_range {
        return Err(match kind {
            CoordinateKind::Latitude => error(
                "latitude_out_of_range",
                "Latitude must be between -90 and 90 degrees",
            ),
            CoordinateKind::Longitude => error(
                "longitude_out_of_range",
                "Longitude must be between -180 and 180 degrees",
            ),
        });
    }

    Ok(value)
}

pub fn validate_latitude(raw: &str) -> Result<(), ValidationError> {
    parse_coordinate(raw, CoordinateKind::Latitude).map(|_| ())
}

pub fn validate_longitude(raw: &str) -> Result<(), ValidationError> {
    parse_coordinate(raw, CoordinateKind::Longitude).map(|_| ())
}

/// Blank means "no photo"; anything else must be an http(s) link to an image file.
pub fn validate_photo_url(raw: &str) -> Result<(), ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() || PHOTO_URL_REGEX.is_match(raw) {
        Ok(())
    } else {
        Err(error(
            "invalid_image_url",
            "Photo URL must point to an image (jpg, jpeg, png, gif, webp, bmp, svg)",
        ))
    }
}
