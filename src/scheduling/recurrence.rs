//! Next-occurrence computation for recurring departures.
//!
//! Pure calendar math - no database access, no system clock. The reference
//! instant is always an explicit parameter so every result is reproducible.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};

use super::models::{DateRange, RecurrencePattern};

/// Compute the next occurrence of a recurring range.
///
/// Returns the stored range itself while it is still current
/// (`base.to >= now`, inclusive). Otherwise the start advances from
/// `base.from` in whole recurrence steps to the earliest start `>= now`,
/// carrying the original duration. Returns `None` once the series is
/// exhausted, i.e. the computed start falls after `recurrence_end_date`.
pub fn next_occurrence(
    base: &DateRange,
    pattern: RecurrencePattern,
    recurrence_end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateRange> {
    if base.to >= now {
        return Some(*base);
    }

    let duration = base.duration();
    let start = first_start_at_or_after(base.from, pattern, now);

    if let Some(end_date) = recurrence_end_date {
        if start > end_date {
            tracing::debug!(%start, %end_date, "recurrence series exhausted");
            return None;
        }
    }

    Some(DateRange {
        from: start,
        to: start + duration,
    })
}

/// Earliest `from + k * step >= now` for a whole number of steps `k >= 0`.
fn first_start_at_or_after(
    from: DateTime<Utc>,
    pattern: RecurrencePattern,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    if now <= from {
        return from;
    }
    match pattern {
        RecurrencePattern::Daily => step_by_duration(from, Duration::days(1), now),
        RecurrencePattern::Weekly => step_by_duration(from, Duration::weeks(1), now),
        RecurrencePattern::Biweekly => step_by_duration(from, Duration::weeks(2), now),
        RecurrencePattern::Monthly => step_by_months(from, 1, now),
        RecurrencePattern::Quarterly => step_by_months(from, 3, now),
        RecurrencePattern::Yearly => step_by_months(from, 12, now),
    }
}

/// Fixed-duration stepping, closed form: a ceiling division lands on the
/// candidate directly, with a bounded correction loop for the sub-millisecond
/// remainder the division truncates.
fn step_by_duration(from: DateTime<Utc>, step: Duration, now: DateTime<Utc>) -> DateTime<Utc> {
    let step_ms = step.num_milliseconds();
    let elapsed_ms = (now - from).num_milliseconds();
    let k = elapsed_ms / step_ms;
    let mut candidate = from + step * k as i32;
    while candidate < now {
        candidate += step;
    }
    candidate
}

/// Month-based stepping. Every candidate is measured from `from` (never
/// cumulatively), so end-of-month clamping cannot drift across steps:
/// Jan 31 + 2 monthly steps is Mar 31 even though Jan 31 + 1 is Feb 28/29.
fn step_by_months(from: DateTime<Utc>, step_months: i32, now: DateTime<Utc>) -> DateTime<Utc> {
    let months_elapsed =
        (now.year() - from.year()) * 12 + now.month() as i32 - from.month() as i32;
    let mut k = (months_elapsed / step_months).max(0);
    let mut candidate = add_months(from, k * step_months);
    while candidate < now {
        k += 1;
        candidate = add_months(from, k * step_months);
    }
    candidate
}

/// Add calendar months, clamping the day of month to the target month's last
/// day and preserving the time of day.
fn add_months(at: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let linear = at.year() * 12 + at.month0() as i32 + months;
    let year = linear.div_euclid(12);
    let month = linear.rem_euclid(12) as u32 + 1;
    let day = at.day().min(days_in_month(year, month));
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .expect("clamped day is valid for the target month");
    let time = date
        .and_hms_nano_opt(at.hour(), at.minute(), at.second(), at.nanosecond())
        .expect("time of day carried over unchanged");
    DateTime::from_naive_utc_and_offset(time, Utc)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
    }
}
