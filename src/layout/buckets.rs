//! Time bucketing.
//!
//! Slices the tasks' planned date range into the columns of the
//! timeline grid. The range is rounded outward to the granularity's
//! natural boundary (start of week or month), so a bar never starts
//! before the first column.
//!
//! # Bucket Labels
//!
//! | Granularity | Label | Sublabel |
//! |-------------|-------|----------|
//! | Day | day of month ("5") | weekday abbreviation ("Mon") |
//! | Week | "Week {ISO week}" | "Jan 1 - Jan 7" |
//! | Month | month name ("January") | year ("2024") |
//!
//! Weeks are ISO weeks (Monday start), matching the ISO week number in
//! the label.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Task;

/// Bucket size for the timeline grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Granularity {
    /// One column per calendar day.
    Day,
    /// One column per ISO week.
    #[default]
    Week,
    /// One column per calendar month.
    Month,
}

impl Granularity {
    /// Day-width divisor: how many calendar days one bucket represents
    /// for pixel scaling. Months use a fixed 30 regardless of their
    /// actual length.
    pub fn days_per_bucket(&self) -> i64 {
        match self {
            Granularity::Day => 1,
            Granularity::Week => 7,
            Granularity::Month => 30,
        }
    }

    /// Pixel width of one bucket column.
    pub fn block_width_px(&self) -> f64 {
        match self {
            Granularity::Day => 50.0,
            Granularity::Week => 100.0,
            Granularity::Month => 120.0,
        }
    }

    /// Height of the column header band.
    pub fn header_height_px(&self) -> f64 {
        match self {
            Granularity::Month => 60.0,
            _ => 40.0,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "Day",
            Granularity::Week => "Week",
            Granularity::Month => "Month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown granularity string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown granularity: {0}")]
pub struct ParseGranularityError(pub String);

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" | "day" => Ok(Granularity::Day),
            "Week" | "week" => Ok(Granularity::Week),
            "Month" | "month" => Ok(Granularity::Month),
            other => Err(ParseGranularityError(other.to_string())),
        }
    }
}

/// One column of the timeline grid: a contiguous calendar interval
/// with its display labels.
///
/// Both `start` and `end` are inclusive. For `Day` granularity they
/// coincide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// First day covered by this bucket (inclusive).
    pub start: NaiveDate,
    /// Last day covered by this bucket (inclusive).
    pub end: NaiveDate,
    /// Primary header label.
    pub label: String,
    /// Secondary header label.
    pub sublabel: String,
}

impl TimeBucket {
    /// Whether a date falls within this bucket's span.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Scans all planned start and end dates and returns the global
/// minimum and maximum.
///
/// Returns `None` for an empty task list; the caller decides whether
/// to short-circuit (the engine produces an empty layout).
pub fn compute_date_range(tasks: &[Task]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = tasks
        .iter()
        .flat_map(|t| [t.planned_start, t.planned_end]);

    let first = dates.next()?;
    let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    Some((min, max))
}

/// Generates the ordered bucket sequence covering `[min, max]`,
/// rounded outward to the granularity's natural boundary.
///
/// The result is contiguous: each bucket's start is the day after the
/// previous bucket's end.
pub fn generate_buckets(min: NaiveDate, max: NaiveDate, granularity: Granularity) -> Vec<TimeBucket> {
    if max < min {
        return Vec::new();
    }

    match granularity {
        Granularity::Day => min
            .iter_days()
            .take_while(|d| *d <= max)
            .map(|d| TimeBucket {
                start: d,
                end: d,
                label: d.day().to_string(),
                sublabel: d.format("%a").to_string(),
            })
            .collect(),
        Granularity::Week => {
            let start = min.week(Weekday::Mon).first_day();
            let end = max.week(Weekday::Mon).last_day();
            let mut buckets = Vec::new();
            let mut week_start = start;
            while week_start <= end {
                let week_end = week_start + Duration::days(6);
                buckets.push(TimeBucket {
                    start: week_start,
                    end: week_end,
                    label: format!("Week {}", week_start.iso_week().week()),
                    sublabel: format!(
                        "{} - {}",
                        week_start.format("%b %-d"),
                        week_end.format("%b %-d")
                    ),
                });
                week_start += Duration::days(7);
            }
            buckets
        }
        Granularity::Month => {
            let end = end_of_month(max);
            let mut buckets = Vec::new();
            let mut month_start = start_of_month(min);
            while month_start <= end {
                buckets.push(TimeBucket {
                    start: month_start,
                    end: end_of_month(month_start),
                    label: month_start.format("%B").to_string(),
                    sublabel: month_start.format("%Y").to_string(),
                });
                month_start = next_month(month_start);
            }
            buckets
        }
    }
}

/// Index of the bucket whose span contains `today`.
///
/// Containment, not boundary equality: a today strictly inside a week
/// or month bucket still matches. `None` when today falls outside the
/// generated range.
pub fn find_today_bucket(buckets: &[TimeBucket], today: NaiveDate) -> Option<usize> {
    buckets.iter().position(|b| b.contains(today))
}

fn start_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

fn end_of_month(d: NaiveDate) -> NaiveDate {
    next_month(d) - Duration::days(1)
}

fn next_month(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(d)
}
