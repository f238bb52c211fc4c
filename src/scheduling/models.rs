//! Value types for tour schedules and departures.
//!
//! These arrive pre-built from the persistence layer and are validated at
//! that boundary via the `validate` methods. The resolvers only read them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// An ordered pair of instants, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Build a range, rejecting `to < from`. Zero-length ranges are valid.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Self> {
        if to < from {
            return Err(ValidationError::InvertedDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Whether `at` falls inside the range, inclusive on both ends.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && at <= self.to
    }

    pub fn duration(&self) -> Duration {
        self.to - self.from
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.to < self.from {
            return Err(ValidationError::InvertedDateRange {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }
}

/// Recurrence cadence of a single departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
}

/// Cadence vocabulary of the schedule-level recurrence metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleCadence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Schedule-level recurrence descriptor.
///
/// Informational metadata only: occurrence computation is driven solely by
/// each departure's own [`RecurrencePattern`]. This field is carried for the
/// presentation layer and is never consulted by availability code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecurrence {
    pub pattern: ScheduleCadence,
    pub interval: u32,
}

impl ScheduleRecurrence {
    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            return Err(ValidationError::ZeroRecurrenceInterval);
        }
        Ok(())
    }
}

/// A bookable departure of a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    pub id: String,
    pub label: String,
    pub date_range: DateRange,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_pattern: Option<RecurrencePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub selected_pricing_options: Vec<String>,
}

impl Departure {
    pub fn validate(&self) -> Result<()> {
        self.date_range.validate()?;
        if self.is_recurring {
            if self.recurrence_pattern.is_none() {
                return Err(ValidationError::MissingRecurrencePattern(self.id.clone()));
            }
            match self.recurrence_end_date {
                None => return Err(ValidationError::MissingRecurrenceEndDate(self.id.clone())),
                Some(end) if end <= self.date_range.from => {
                    return Err(ValidationError::RecurrenceEndNotAfterStart(self.id.clone()))
                }
                Some(_) => {}
            }
        } else if self.recurrence_pattern.is_some() || self.recurrence_end_date.is_some() {
            return Err(ValidationError::UnexpectedRecurrenceFields(self.id.clone()));
        }
        Ok(())
    }
}

/// How a tour's bookable dates are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Flexible,
    Fixed,
    Multiple,
    Recurring,
}

/// The departure schedule stored on a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSchedule {
    pub schedule_type: ScheduleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<ScheduleRecurrence>,
    #[serde(default)]
    pub departures: Vec<Departure>,
}

impl TourSchedule {
    pub fn validate(&self) -> Result<()> {
        match (self.schedule_type, &self.default_date_range) {
            (ScheduleType::Flexible, None) => {
                return Err(ValidationError::MissingDefaultDateRange)
            }
            (ScheduleType::Flexible, Some(range)) => range.validate()?,
            (_, Some(_)) => return Err(ValidationError::UnexpectedDefaultDateRange),
            (_, None) => {}
        }
        if let Some(recurrence) = &self.recurrence {
            recurrence.validate()?;
        }
        let mut seen = std::collections::HashSet::new();
        for departure in &self.departures {
            departure.validate()?;
            if !seen.insert(departure.id.as_str()) {
                return Err(ValidationError::DuplicateDepartureId(departure.id.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn fixed_departure(id: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Departure {
        Departure {
            id: id.to_string(),
            label: id.to_string(),
            date_range: DateRange::new(from, to).unwrap(),
            is_recurring: false,
            recurrence_pattern: None,
            recurrence_end_date: None,
            selected_pricing_options: vec![],
        }
    }

    // ==================== DateRange tests ====================

    #[test]
    fn test_date_range_rejects_inverted() {
        let err = DateRange::new(utc(2024, 5, 2), utc(2024, 5, 1)).unwrap_err();
        assert!(matches!(err, ValidationError::InvertedDateRange { .. }));
    }

    #[test]
    fn test_date_range_zero_length_is_valid() {
        let at = utc(2024, 5, 1);
        let range = DateRange::new(at, at).unwrap();
        assert_eq!(range.duration(), Duration::zero());
        assert!(range.contains(at));
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::new(utc(2024, 5, 1), utc(2024, 5, 3)).unwrap();
        assert!(range.contains(utc(2024, 5, 1)));
        assert!(range.contains(utc(2024, 5, 3)));
        assert!(!range.contains(utc(2024, 5, 4)));
    }

    // ==================== Departure validation tests ====================

    #[test]
    fn test_recurring_departure_requires_pattern_and_end() {
        let mut departure = fixed_departure("d1", utc(2024, 1, 1), utc(2024, 1, 3));
        departure.is_recurring = true;
        assert_eq!(
            departure.validate(),
            Err(ValidationError::MissingRecurrencePattern("d1".to_string()))
        );

        departure.recurrence_pattern = Some(RecurrencePattern::Weekly);
        assert_eq!(
            departure.validate(),
            Err(ValidationError::MissingRecurrenceEndDate("d1".to_string()))
        );

        departure.recurrence_end_date = Some(utc(2024, 6, 1));
        assert!(departure.validate().is_ok());
    }

    #[test]
    fn test_recurrence_end_must_follow_start() {
        let mut departure = fixed_departure("d1", utc(2024, 3, 1), utc(2024, 3, 3));
        departure.is_recurring = true;
        departure.recurrence_pattern = Some(RecurrencePattern::Daily);
        departure.recurrence_end_date = Some(utc(2024, 3, 1));
        assert_eq!(
            departure.validate(),
            Err(ValidationError::RecurrenceEndNotAfterStart("d1".to_string()))
        );
    }

    #[test]
    fn test_non_recurring_departure_rejects_recurrence_fields() {
        let mut departure = fixed_departure("d1", utc(2024, 1, 1), utc(2024, 1, 3));
        departure.recurrence_pattern = Some(RecurrencePattern::Daily);
        assert_eq!(
            departure.validate(),
            Err(ValidationError::UnexpectedRecurrenceFields("d1".to_string()))
        );
    }

    // ==================== TourSchedule validation tests ====================

    #[test]
    fn test_flexible_schedule_requires_default_range() {
        let schedule = TourSchedule {
            schedule_type: ScheduleType::Flexible,
            default_date_range: None,
            recurrence: None,
            departures: vec![],
        };
        assert_eq!(
            schedule.validate(),
            Err(ValidationError::MissingDefaultDateRange)
        );
    }

    #[test]
    fn test_fixed_schedule_rejects_default_range() {
        let schedule = TourSchedule {
            schedule_type: ScheduleType::Fixed,
            default_date_range: Some(DateRange::new(utc(2024, 1, 1), utc(2024, 2, 1)).unwrap()),
            recurrence: None,
            departures: vec![],
        };
        assert_eq!(
            schedule.validate(),
            Err(ValidationError::UnexpectedDefaultDateRange)
        );
    }

    #[test]
    fn test_duplicate_departure_ids_rejected() {
        let schedule = TourSchedule {
            schedule_type: ScheduleType::Multiple,
            default_date_range: None,
            recurrence: None,
            departures: vec![
                fixed_departure("d1", utc(2024, 1, 1), utc(2024, 1, 3)),
                fixed_departure("d1", utc(2024, 2, 1), utc(2024, 2, 3)),
            ],
        };
        assert_eq!(
            schedule.validate(),
            Err(ValidationError::DuplicateDepartureId("d1".to_string()))
        );
    }

    #[test]
    fn test_zero_schedule_recurrence_interval_rejected() {
        let schedule = TourSchedule {
            schedule_type: ScheduleType::Recurring,
            default_date_range: None,
            recurrence: Some(ScheduleRecurrence {
                pattern: ScheduleCadence::Weekly,
                interval: 0,
            }),
            departures: vec![],
        };
        assert_eq!(
            schedule.validate(),
            Err(ValidationError::ZeroRecurrenceInterval)
        );
    }
}
