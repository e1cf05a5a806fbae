//! Timeline layout engine.
//!
//! Transforms a task list into renderable timeline geometry in three
//! steps, each a pure function:
//!
//! 1. **Buckets** (`buckets`): scan the tasks' planned date range and
//!    slice it into day/week/month columns with display labels.
//! 2. **Rows** (`rows`): group tasks by phase and assign each phase a
//!    header row followed by one row per task.
//! 3. **Geometry** (`geometry`): place each task's bar inside the
//!    bucketed grid, proportional to calendar-day offsets.
//!
//! `engine` ties the steps together behind a single request/response
//! surface mirroring how a renderer consumes the result.

mod buckets;
mod engine;
mod geometry;
mod rows;

pub use buckets::{
    compute_date_range, find_today_bucket, generate_buckets, Granularity, ParseGranularityError,
    TimeBucket,
};
pub use engine::{LayoutConfig, LayoutRequest, TimelineEngine, TimelineLayout};
pub use geometry::{compute_bar_geometry, BarGeometry};
pub use rows::{assign_rows, Row, RowLayout, UNASSIGNED_PHASE};
