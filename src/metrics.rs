//! Aggregate plan metrics.
//!
//! Computes the dashboard indicators for a project plan: completion
//! progress, total planned cost, and per-member availability.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion Rate | completed ÷ total tasks |
//! | Total Cost | Σ duration_days × 8 h × assignee hourly rate |
//! | Availability | each member's availability percentage |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskStatus, TeamMember};

/// Working hours per planned day for cost conversion.
const HOURS_PER_DAY: f64 = 8.0;

/// Aggregate indicators for a project plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetrics {
    /// Number of tasks in the plan.
    pub total_tasks: usize,
    /// Number of tasks with completed status.
    pub completed_tasks: usize,
    /// Fraction of tasks completed (0.0..1.0). Zero for an empty plan.
    pub completion_rate: f64,
    /// Total planned cost across assigned tasks.
    pub total_cost: f64,
    /// Availability percentage per team member.
    pub availability_by_member: HashMap<String, f64>,
}

impl ProjectMetrics {
    /// Computes metrics from the task list and team roster.
    ///
    /// Tasks without an assignee (or with an assignee missing from the
    /// roster) contribute zero cost.
    pub fn calculate(tasks: &[Task], team: &[TeamMember]) -> Self {
        let total_tasks = tasks.len();
        let completed_tasks = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();

        let total_cost: f64 = tasks
            .iter()
            .map(|task| {
                let rate = task
                    .assigned_to
                    .as_deref()
                    .and_then(|id| team.iter().find(|m| m.id == id))
                    .map(|m| m.hourly_rate)
                    .unwrap_or(0.0);
                task.duration_days as f64 * HOURS_PER_DAY * rate
            })
            .sum();

        let completion_rate = if total_tasks == 0 {
            0.0
        } else {
            completed_tasks as f64 / total_tasks as f64
        };

        let availability_by_member = team
            .iter()
            .map(|m| (m.id.clone(), m.availability))
            .collect();

        Self {
            total_tasks,
            completed_tasks,
            completion_rate,
            total_cost,
            availability_by_member,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, days: i64, assignee: Option<&str>, status: TaskStatus) -> Task {
        let mut t = Task::new(id, date(2024, 1, 1), date(2024, 1, 1))
            .with_duration_days(days)
            .with_status(status);
        t.assigned_to = assignee.map(String::from);
        t
    }

    fn sample_team() -> Vec<TeamMember> {
        vec![
            TeamMember::new("m1").with_hourly_rate(100.0).with_availability(80.0),
            TeamMember::new("m2").with_hourly_rate(50.0),
        ]
    }

    #[test]
    fn test_metrics_cost() {
        let tasks = vec![
            task("t1", 2, Some("m1"), TaskStatus::Pending), // 2 × 8 × 100
            task("t2", 3, Some("m2"), TaskStatus::Pending), // 3 × 8 × 50
        ];
        let metrics = ProjectMetrics::calculate(&tasks, &sample_team());
        assert!((metrics.total_cost - (1600.0 + 1200.0)).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_unassigned_costs_nothing() {
        let tasks = vec![
            task("t1", 5, None, TaskStatus::Pending),
            task("t2", 5, Some("ghost"), TaskStatus::Pending),
        ];
        let metrics = ProjectMetrics::calculate(&tasks, &sample_team());
        assert!((metrics.total_cost - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_completion() {
        let tasks = vec![
            task("t1", 1, None, TaskStatus::Completed),
            task("t2", 1, None, TaskStatus::InProgress),
            task("t3", 1, None, TaskStatus::Completed),
            task("t4", 1, None, TaskStatus::Blocked),
        ];
        let metrics = ProjectMetrics::calculate(&tasks, &[]);
        assert_eq!(metrics.total_tasks, 4);
        assert_eq!(metrics.completed_tasks, 2);
        assert!((metrics.completion_rate - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty_plan() {
        let metrics = ProjectMetrics::calculate(&[], &sample_team());
        assert_eq!(metrics.total_tasks, 0);
        assert!((metrics.completion_rate - 0.0).abs() < 1e-10);
        assert!((metrics.total_cost - 0.0).abs() < 1e-10);
        assert_eq!(metrics.availability_by_member.len(), 2);
    }

    #[test]
    fn test_metrics_availability() {
        let metrics = ProjectMetrics::calculate(&[], &sample_team());
        assert!((metrics.availability_by_member["m1"] - 80.0).abs() < 1e-10);
        assert!((metrics.availability_by_member["m2"] - 100.0).abs() < 1e-10);
    }
}
