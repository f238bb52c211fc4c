//! Bookability evaluation over a tour's schedule.
//!
//! Selects active departures, the single next departure across all schedule
//! types, and the overall availability flag. Every answer is recomputed
//! from the reference instant; nothing is cached or stored.

use chrono::{DateTime, Utc};

use super::models::{Departure, ScheduleType, TourSchedule};
use super::recurrence::next_occurrence;

/// Departures running at the reference instant.
///
/// Non-recurring departures are active while their stored range brackets
/// `now`. Recurring departures are dropped once their end date has passed,
/// otherwise judged by their resolved occurrence.
pub fn active_departures<'a>(schedule: &'a TourSchedule, now: DateTime<Utc>) -> Vec<&'a Departure> {
    schedule
        .departures
        .iter()
        .filter(|departure| is_active(departure, now))
        .collect()
}

fn is_active(departure: &Departure, now: DateTime<Utc>) -> bool {
    if !departure.is_recurring {
        return departure.date_range.contains(now);
    }
    if matches!(departure.recurrence_end_date, Some(end) if end < now) {
        return false;
    }
    let Some(pattern) = departure.recurrence_pattern else {
        return false;
    };
    next_occurrence(
        &departure.date_range,
        pattern,
        departure.recurrence_end_date,
        now,
    )
    .map(|occurrence| occurrence.contains(now))
    .unwrap_or(false)
}

/// The departure whose relevant start is the earliest instant strictly
/// after `now`.
///
/// Non-recurring departures are judged by their stored start, recurring
/// ones by their resolved next-occurrence start; exhausted series are
/// skipped. Ties break on departure order, first seen wins.
pub fn next_departure<'a>(
    schedule: &'a TourSchedule,
    now: DateTime<Utc>,
) -> Option<&'a Departure> {
    let mut best: Option<(&Departure, DateTime<Utc>)> = None;

    for departure in &schedule.departures {
        let candidate = if departure.is_recurring {
            let Some(pattern) = departure.recurrence_pattern else {
                continue;
            };
            match next_occurrence(
                &departure.date_range,
                pattern,
                departure.recurrence_end_date,
                now,
            ) {
                Some(occurrence) => occurrence.from,
                None => continue,
            }
        } else {
            departure.date_range.from
        };

        if candidate <= now {
            continue;
        }
        if best.map(|(_, start)| candidate < start).unwrap_or(true) {
            best = Some((departure, candidate));
        }
    }

    if let Some((departure, start)) = best {
        tracing::debug!(id = %departure.id, %start, "selected next departure");
    }
    best.map(|(departure, _)| departure)
}

/// Whether the tour can be booked at all at the reference instant.
///
/// Flexible schedules are available while the default date range has not
/// ended. All other schedule types need at least one departure that has not
/// ended: a non-recurring one still running or upcoming, or a recurring one
/// whose end date is absent or not yet past.
pub fn has_available_departures(schedule: &TourSchedule, now: DateTime<Utc>) -> bool {
    if schedule.schedule_type == ScheduleType::Flexible {
        return schedule
            .default_date_range
            .map(|range| range.to >= now)
            .unwrap_or(false);
    }

    schedule.departures.iter().any(|departure| {
        if departure.is_recurring {
            departure
                .recurrence_end_date
                .map(|end| end >= now)
                .unwrap_or(true)
        } else {
            departure.date_range.to >= now
        }
    })
}
