//! Schedulable task records produced by the import engine.
//!
//! `TaskRecord` serializes to the shape the dashboard's persistence layer
//! accepts on bulk create: `{title, date, endDate, duration, location,
//! description, priority, completed}`.

use serde::{Deserialize, Serialize};

/// A normalized, schedulable task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub title: String,
    /// Start, local wall-clock, `YYYY-MM-DDTHH:mm:ss`
    pub date: String,
    /// End, same shape, always present (synthesized when the source has none)
    pub end_date: String,
    /// Whole minutes, always >= 1
    pub duration: i64,
    pub location: String,
    /// Carries the all-day provenance prefix for date-only imports
    pub description: String,
    pub priority: Priority,
    /// Always `false` at creation; completion happens in the dashboard
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Title keywords that mark a task as low priority.
const CALM_KEYWORDS: &[&str] = &["relax", "pausa", "camminata"];

impl Priority {
    /// Classify a task by its title.
    ///
    /// `urgente` (any case) or a literal `!` means high; the high check runs
    /// first so it wins when keywords from both sets match.
    pub fn classify(title: &str) -> Priority {
        let lowered = title.to_lowercase();

        if lowered.contains("urgente") || title.contains('!') {
            return Priority::High;
        }

        if CALM_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return Priority::Low;
        }

        Priority::Medium
    }
}
