//! Row assignment.
//!
//! Tasks are grouped by phase, phases in first-seen order, tasks within
//! a phase in input order. Each phase contributes one header row
//! followed by one row per task, so a task's row index is the number of
//! rows consumed by all preceding phases, plus one for its own phase
//! header, plus its position within the phase.

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Phase bucket for tasks without a phase.
pub const UNASSIGNED_PHASE: &str = "Unassigned";

/// One horizontal row of the timeline grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Row {
    /// A phase header band spanning the full chart width.
    PhaseHeader {
        /// Phase name.
        phase: String,
    },
    /// A row holding one task's bar.
    #[serde(rename_all = "camelCase")]
    Task {
        /// ID of the task on this row.
        task_id: String,
        /// Phase the task belongs to.
        phase: String,
    },
}

/// The complete vertical layout: rows in top-to-bottom order.
///
/// Row indices are positions in `rows`. Header rows and task rows never
/// share an index, and every task appears exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLayout {
    /// Rows in display order.
    pub rows: Vec<Row>,
}

impl RowLayout {
    /// Total number of rows (headers included).
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// Row index of a task, if present.
    pub fn task_row(&self, task_id: &str) -> Option<usize> {
        self.rows.iter().position(|row| match row {
            Row::Task { task_id: id, .. } => id == task_id,
            Row::PhaseHeader { .. } => false,
        })
    }

    /// Indices of all phase header rows, in display order.
    pub fn header_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| match row {
                Row::PhaseHeader { .. } => Some(i),
                Row::Task { .. } => None,
            })
            .collect()
    }

    /// Phase names in display order.
    pub fn phases(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                Row::PhaseHeader { phase } => Some(phase.as_str()),
                Row::Task { .. } => None,
            })
            .collect()
    }
}

/// Groups tasks by phase and assigns every task a row.
///
/// Tasks with an empty phase group under [`UNASSIGNED_PHASE`].
pub fn assign_rows(tasks: &[Task]) -> RowLayout {
    // Preserve first-occurrence order of phases.
    let mut groups: Vec<(&str, Vec<&Task>)> = Vec::new();
    for task in tasks {
        let phase = if task.phase.is_empty() {
            UNASSIGNED_PHASE
        } else {
            task.phase.as_str()
        };
        match groups.iter_mut().find(|(p, _)| *p == phase) {
            Some((_, members)) => members.push(task),
            None => groups.push((phase, vec![task])),
        }
    }

    let mut rows = Vec::with_capacity(tasks.len() + groups.len());
    for (phase, members) in groups {
        rows.push(Row::PhaseHeader {
            phase: phase.to_string(),
        });
        for task in members {
            rows.push(Row::Task {
                task_id: task.id.clone(),
                phase: phase.to_string(),
            });
        }
    }

    RowLayout { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(id: &str, phase: &str) -> Task {
        Task::new(id, date(2024, 1, 1), date(2024, 1, 2)).with_phase(phase)
    }

    #[test]
    fn test_single_phase_header_then_task() {
        let layout = assign_rows(&[task("t1", "planning")]);
        assert_eq!(layout.total_rows(), 2);
        assert_eq!(
            layout.rows[0],
            Row::PhaseHeader {
                phase: "planning".into()
            }
        );
        assert_eq!(layout.task_row("t1"), Some(1));
    }

    #[test]
    fn test_two_phases_four_rows() {
        let layout = assign_rows(&[task("t1", "planning"), task("t2", "development")]);
        assert_eq!(layout.total_rows(), 4);
        assert_eq!(layout.header_rows(), vec![0, 2]);
        assert_eq!(layout.task_row("t1"), Some(1));
        assert_eq!(layout.task_row("t2"), Some(3));
    }

    #[test]
    fn test_phases_in_first_seen_order() {
        let layout = assign_rows(&[
            task("t1", "development"),
            task("t2", "planning"),
            task("t3", "development"),
        ]);
        assert_eq!(layout.phases(), vec!["development", "planning"]);
        // development: header 0, t1 at 1, t3 at 2; planning: header 3, t2 at 4.
        assert_eq!(layout.task_row("t1"), Some(1));
        assert_eq!(layout.task_row("t3"), Some(2));
        assert_eq!(layout.task_row("t2"), Some(4));
    }

    #[test]
    fn test_empty_phase_groups_under_unassigned() {
        let layout = assign_rows(&[task("t1", "")]);
        assert_eq!(layout.phases(), vec![UNASSIGNED_PHASE]);
        assert_eq!(layout.task_row("t1"), Some(1));
    }

    #[test]
    fn test_rows_are_a_bijection() {
        let tasks = vec![
            task("a", "p1"),
            task("b", "p2"),
            task("c", "p1"),
            task("d", ""),
        ];
        let layout = assign_rows(&tasks);

        let mut task_rows: Vec<usize> = tasks
            .iter()
            .map(|t| layout.task_row(&t.id).unwrap())
            .collect();
        task_rows.sort_unstable();
        task_rows.dedup();
        assert_eq!(task_rows.len(), tasks.len());

        for index in &task_rows {
            assert!(*index < layout.total_rows());
            assert!(!layout.header_rows().contains(index));
        }
    }

    #[test]
    fn test_empty_input() {
        let layout = assign_rows(&[]);
        assert_eq!(layout.total_rows(), 0);
        assert!(layout.header_rows().is_empty());
        assert_eq!(layout.task_row("t1"), None);
    }
}
