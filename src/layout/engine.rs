//! Layout engine façade.
//!
//! Composes date-range scanning, bucket generation, row assignment, and
//! bar geometry into one request/response surface. A renderer calls
//! [`TimelineEngine::layout`] whenever the task list or granularity
//! changes and replaces its previous result wholesale; the engine holds
//! no state between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Task;

use super::buckets::{compute_date_range, find_today_bucket, generate_buckets, Granularity, TimeBucket};
use super::geometry::{compute_bar_geometry, BarGeometry};
use super::rows::{assign_rows, Row, RowLayout};

/// Fixed pixel dimensions of the chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Width of the label column to the left of the grid.
    pub left_column_width: f64,
    /// Height of each row.
    pub row_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            left_column_width: 200.0,
            row_height: 40.0,
        }
    }
}

/// Input container for a layout computation.
#[derive(Debug, Clone)]
pub struct LayoutRequest {
    /// Tasks to lay out.
    pub tasks: Vec<Task>,
    /// Bucket size for the grid columns.
    pub granularity: Granularity,
    /// Current date for the "today" marker. `None` = no marker.
    pub today: Option<NaiveDate>,
}

impl LayoutRequest {
    /// Creates a request with the default (weekly) granularity.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            granularity: Granularity::Week,
            today: None,
        }
    }

    /// Sets the granularity.
    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Sets the current date, enabling the "today" marker lookup.
    ///
    /// Callers typically pass `Local::now().date_naive()`; taking the
    /// date as input keeps the layout a pure function.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

/// Complete timeline geometry, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    /// Grid columns in chronological order.
    pub buckets: Vec<TimeBucket>,
    /// Vertical row assignment (phase headers and task rows).
    pub rows: RowLayout,
    /// One bar per task, ordered top to bottom.
    pub bars: Vec<BarGeometry>,
    /// Bucket containing the request's `today`, if inside the range.
    pub today_index: Option<usize>,
    /// Full chart width, label column included.
    pub total_width: f64,
    /// Full chart height, header band included.
    pub total_height: f64,
}

/// Timeline layout engine.
///
/// Stateless apart from its frame configuration; every call recomputes
/// the layout from scratch.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gantt_layout::layout::{Granularity, LayoutRequest, TimelineEngine};
/// use gantt_layout::models::Task;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let tasks = vec![Task::new("t1", start, end).with_phase("planning")];
///
/// let engine = TimelineEngine::new();
/// let layout = engine.layout(&LayoutRequest::new(tasks).with_granularity(Granularity::Day));
/// assert_eq!(layout.buckets.len(), 3);
/// assert_eq!(layout.rows.total_rows(), 2); // phase header + task
/// ```
#[derive(Debug, Clone)]
pub struct TimelineEngine {
    config: LayoutConfig,
}

impl TimelineEngine {
    /// Creates an engine with the default frame configuration.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }

    /// Sets the frame configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Computes the full timeline layout for a request.
    ///
    /// An empty task list yields an empty layout (no buckets, no rows,
    /// zero drawable columns) rather than an error; the surrounding UI
    /// is expected to guard against rendering it.
    pub fn layout(&self, request: &LayoutRequest) -> TimelineLayout {
        let granularity = request.granularity;
        let header_height = granularity.header_height_px();

        let Some((min, max)) = compute_date_range(&request.tasks) else {
            return TimelineLayout {
                buckets: Vec::new(),
                rows: RowLayout::default(),
                bars: Vec::new(),
                today_index: None,
                total_width: self.config.left_column_width,
                total_height: header_height,
            };
        };

        let buckets = generate_buckets(min, max, granularity);
        let rows = assign_rows(&request.tasks);
        let bars = self.place_bars(&request.tasks, &rows, &buckets, granularity, header_height);
        let today_index = request
            .today
            .and_then(|today| find_today_bucket(&buckets, today));

        let total_width =
            self.config.left_column_width + buckets.len() as f64 * granularity.block_width_px();
        let total_height = header_height + rows.total_rows() as f64 * self.config.row_height;

        debug!(
            granularity = %granularity,
            buckets = buckets.len(),
            rows = rows.total_rows(),
            bars = bars.len(),
            "timeline layout computed"
        );

        TimelineLayout {
            buckets,
            rows,
            bars,
            today_index,
            total_width,
            total_height,
        }
    }

    fn place_bars(
        &self,
        tasks: &[Task],
        rows: &RowLayout,
        buckets: &[TimeBucket],
        granularity: Granularity,
        header_height: f64,
    ) -> Vec<BarGeometry> {
        let row_height = self.config.row_height;
        let mut bars = Vec::with_capacity(tasks.len());

        for (index, row) in rows.rows.iter().enumerate() {
            let Row::Task { task_id, .. } = row else {
                continue;
            };
            let Some(task) = tasks.iter().find(|t| &t.id == task_id) else {
                continue;
            };

            let (x, width) =
                compute_bar_geometry(task, buckets, granularity, self.config.left_column_width);
            bars.push(BarGeometry {
                task_id: task.id.clone(),
                x,
                y: header_height + index as f64 * row_height + 0.2 * row_height,
                width,
                height: 0.6 * row_height,
                status: task.status,
            });
        }

        bars
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new()
    }
}
