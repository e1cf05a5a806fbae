//! Gantt-style timeline layout for project plans.
//!
//! Given a task list and a granularity (day, week, month), computes the
//! time buckets spanning the tasks' date range, the vertical row
//! assignment for each task grouped by phase, and the pixel geometry of
//! each task bar. Rendering is left to the consumer — this crate
//! produces geometry and labels, not pixels.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `TaskStatus`, `TeamMember`
//! - **`layout`**: The layout engine — `Granularity`, `TimeBucket`,
//!   `RowLayout`, `BarGeometry`, `TimelineEngine`
//! - **`metrics`**: Aggregate cost/progress indicators for a plan
//! - **`validation`**: Input integrity checks (duplicate IDs, unknown
//!   assignees, inverted date ranges)
//!
//! # Design
//!
//! Every operation is a pure, synchronous transform of its inputs.
//! Malformed input (empty task lists, inverted date ranges) degrades by
//! clamping rather than raising, so a renderer always receives usable
//! geometry. Recompute the layout wholesale whenever the task list or
//! granularity changes; nothing is cached between calls.

pub mod layout;
pub mod metrics;
pub mod models;
pub mod validation;
