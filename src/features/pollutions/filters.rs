use chrono::{DateTime, Utc};

use crate::features::pollutions::models::{Pollution, PollutionType};

/// Criteria for narrowing the declaration list. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollutionFilters {
    pub pollution_type: Option<PollutionType>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Inclusive lower bound on the observation date
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the observation date
    pub date_to: Option<DateTime<Utc>>,
}

impl PollutionFilters {
    pub fn is_empty(&self) -> bool {
        self.pollution_type.is_none()
            && self.location.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    pub fn matches(&self, pollution: &Pollution) -> bool {
        if self
            .pollution_type
            .is_some_and(|t| t != pollution.pollution_type)
        {
            return false;
        }

        if let Some(location) = &self.location {
            if !pollution
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if self.date_from.is_some_and(|from| pollution.observed_at < from) {
            return false;
        }

        if self.date_to.is_some_and(|to| pollution.observed_at > to) {
            return false;
        }

        true
    }

    pub fn apply<'a, I>(&self, pollutions: I) -> Vec<Pollution>
    where
        I: IntoIterator<Item = &'a Pollution>,
    {
        pollutions
            .into_iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pollutions::seed::demo_pollutions;
    use chrono::TimeZone;

    fn ids(pollutions: &[Pollution]) -> Vec<i32> {
        pollutions.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let data = demo_pollutions();
        let filters = PollutionFilters::default();
        assert!(filters.is_empty());
        assert_eq!(filters.apply(&data).len(), data.len());
    }

    #[test]
    fn test_filter_by_type_water() {
        let data = demo_pollutions();
        let filters = PollutionFilters {
            pollution_type: Some(PollutionType::Water),
            ..Default::default()
        };
        let result = filters.apply(&data);
        assert_eq!(result.len(), 1);
        assert!(result[0].title.contains("Seine"));
    }

    #[test]
    fn test_filter_by_location_is_case_insensitive() {
        let data = demo_pollutions();
        let filters = PollutionFilters {
            location: Some("lille".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filters.apply(&data)), vec![4, 5]);

        let upper = PollutionFilters {
            location: Some("LILLE".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&upper.apply(&data)), vec![4, 5]);
    }

    #[test]
    fn test_filter_by_date_range_is_inclusive() {
        let data = demo_pollutions();
        let filters = PollutionFilters {
            date_from: Some(Utc.with_ymd_and_hms(2024, 1, 20, 9, 15, 0).unwrap()),
            date_to: Some(Utc.with_ymd_and_hms(2024, 2, 1, 7, 20, 0).unwrap()),
            ..Default::default()
        };
        assert_eq!(ids(&filters.apply(&data)), vec![2, 3, 4]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let data = demo_pollutions();
        let filters = PollutionFilters {
            pollution_type: Some(PollutionType::Chemical),
            location: Some("lille".to_string()),
            date_from: Some(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
            date_to: None,
        };
        assert_eq!(ids(&filters.apply(&data)), vec![5]);

        let none = PollutionFilters {
            pollution_type: Some(PollutionType::Air),
            location: Some("paris".to_string()),
            ..Default::default()
        };
        assert!(none.apply(&data).is_empty());
    }

    #[test]
    fn test_result_is_exact_subset() {
        let data = demo_pollutions();
        let filters = PollutionFilters {
            date_to: Some(Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap()),
            ..Default::default()
        };
        let result = filters.apply(&data);
        for p in &data {
            assert_eq!(result.contains(p), filters.matches(p));
        }
    }
}
