//! Input validation for project plans.
//!
//! Checks structural integrity of tasks and the team roster before
//! layout. Detects:
//! - Duplicate IDs
//! - Assignee references to unknown team members
//! - Inverted planned date ranges (end before start)
//!
//! Validation is advisory: the layout engine clamps malformed input
//! rather than rejecting it, so callers can surface these errors in an
//! editor UI while still rendering a chart.

use std::collections::HashSet;

use crate::models::{Task, TeamMember};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A task is assigned to a member not in the roster.
    UnknownAssignee,
    /// A task's planned end precedes its planned start.
    InvertedDateRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a plan's tasks and team roster.
///
/// Checks:
/// 1. No duplicate task IDs
/// 2. No duplicate member IDs
/// 3. All assignees exist in the roster
/// 4. No planned range has end before start
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], team: &[TeamMember]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut member_ids = HashSet::new();
    for member in team {
        if !member_ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate member ID: {}", member.id),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if task.has_inverted_range() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedDateRange,
                format!(
                    "Task '{}' ends {} before it starts {}",
                    task.id, task.planned_end, task.planned_start
                ),
            ));
        }

        if let Some(assignee) = task.assigned_to.as_deref() {
            if !assignee.is_empty() && !member_ids.contains(assignee) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAssignee,
                    format!("Task '{}' assigned to unknown member '{assignee}'", task.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
