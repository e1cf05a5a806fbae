//! Bar geometry.
//!
//! Places a task's bar inside the bucketed grid. Horizontal placement
//! is proportional to whole-day offsets from the first bucket's start,
//! scaled by (bucket pixel width ÷ days-per-bucket). Offsets and widths
//! clamp to non-negative and to the drawable area, so malformed input
//! (inverted ranges, empty bucket sequences) yields zero-width bars
//! instead of errors.

use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskStatus};

use super::buckets::{Granularity, TimeBucket};

/// Pixel rectangle of one task bar, plus the status that drives its
/// fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
    /// ID of the task this bar represents.
    pub task_id: String,
    /// Left edge, in pixels from the chart origin.
    pub x: f64,
    /// Top edge, in pixels from the chart origin.
    pub y: f64,
    /// Bar width in pixels. Zero for degenerate input.
    pub width: f64,
    /// Bar height in pixels.
    pub height: f64,
    /// Task status, for color mapping at render time.
    pub status: TaskStatus,
}

/// Computes a task bar's horizontal placement: `(x, width)`.
///
/// `x` is measured from the chart origin and never falls left of the
/// label column; `x + width` never exceeds the total chart width.
/// Returns a zero-width bar at the column edge when `buckets` is empty.
pub fn compute_bar_geometry(
    task: &Task,
    buckets: &[TimeBucket],
    granularity: Granularity,
    left_column_width: f64,
) -> (f64, f64) {
    let Some(first) = buckets.first() else {
        return (left_column_width, 0.0);
    };

    let px_per_day = granularity.block_width_px() / granularity.days_per_bucket() as f64;
    let start_offset = (task.planned_start - first.start).num_days() as f64 * px_per_day;
    let x = left_column_width + start_offset.max(0.0);

    let raw_width = task.planned_span_days() as f64 * px_per_day;
    let total_width = left_column_width + buckets.len() as f64 * granularity.block_width_px();
    let width = raw_width.min(total_width - x).max(0.0);

    (x, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::buckets::generate_buckets;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const LEFT: f64 = 200.0;

    #[test]
    fn test_day_bar_width() {
        // 3-day task at Day granularity: width = 3 × 50 px.
        let task = Task::new("t1", date(2024, 1, 1), date(2024, 1, 3));
        let buckets = generate_buckets(date(2024, 1, 1), date(2024, 1, 3), Granularity::Day);

        let (x, width) = compute_bar_geometry(&task, &buckets, Granularity::Day, LEFT);
        assert!((x - 200.0).abs() < 1e-10);
        assert!((width - 150.0).abs() < 1e-10);
    }

    #[test]
    fn test_offset_from_first_bucket() {
        let task = Task::new("t1", date(2024, 1, 3), date(2024, 1, 4));
        let buckets = generate_buckets(date(2024, 1, 1), date(2024, 1, 10), Granularity::Day);

        let (x, width) = compute_bar_geometry(&task, &buckets, Granularity::Day, LEFT);
        assert!((x - (200.0 + 2.0 * 50.0)).abs() < 1e-10);
        assert!((width - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_week_bar_fractional_scaling() {
        // Week buckets are 100 px wide for 7 days: 14.285… px per day.
        let task = Task::new("t1", date(2024, 1, 1), date(2024, 1, 7));
        let buckets = generate_buckets(date(2024, 1, 1), date(2024, 1, 7), Granularity::Week);

        let (x, width) = compute_bar_geometry(&task, &buckets, Granularity::Week, LEFT);
        assert!((x - 200.0).abs() < 1e-10);
        assert!((width - 100.0).abs() < 1e-6); // 7 days × 100/7
    }

    #[test]
    fn test_inverted_range_clamps_to_zero_width() {
        let task = Task::new("t1", date(2024, 1, 10), date(2024, 1, 5));
        let buckets = generate_buckets(date(2024, 1, 1), date(2024, 1, 31), Granularity::Day);

        let (_, width) = compute_bar_geometry(&task, &buckets, Granularity::Day, LEFT);
        assert!((width - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_bar_never_overflows_chart() {
        // Task extends past the generated range; width clamps to the
        // remaining drawable area.
        let task = Task::new("t1", date(2024, 1, 4), date(2024, 1, 20));
        let buckets = generate_buckets(date(2024, 1, 1), date(2024, 1, 5), Granularity::Day);
        let total_width = LEFT + buckets.len() as f64 * Granularity::Day.block_width_px();

        let (x, width) = compute_bar_geometry(&task, &buckets, Granularity::Day, LEFT);
        assert!(x >= LEFT);
        assert!(x + width <= total_width + 1e-10);
    }

    #[test]
    fn test_bar_starting_before_first_bucket_clamps_left() {
        let task = Task::new("t1", date(2023, 12, 20), date(2024, 1, 3));
        let buckets = generate_buckets(date(2024, 1, 1), date(2024, 1, 10), Granularity::Day);

        let (x, width) = compute_bar_geometry(&task, &buckets, Granularity::Day, LEFT);
        assert!((x - LEFT).abs() < 1e-10);
        assert!(width >= 0.0);
    }

    #[test]
    fn test_empty_buckets_zero_geometry() {
        let task = Task::new("t1", date(2024, 1, 1), date(2024, 1, 3));
        let (x, width) = compute_bar_geometry(&task, &[], Granularity::Day, LEFT);
        assert!((x - LEFT).abs() < 1e-10);
        assert!((width - 0.0).abs() < 1e-10);
    }
}
