//! Terminal rendering for agendo types.
//!
//! Extension traits that add colored terminal rendering to agendo-core types
//! using owo_colors.

use agendo_core::task::{Priority, TaskRecord};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Priority {
    fn render(&self) -> String {
        match self {
            Priority::High => "high".red().to_string(),
            Priority::Medium => "medium".yellow().to_string(),
            Priority::Low => "low".green().to_string(),
        }
    }
}

impl Render for TaskRecord {
    fn render(&self) -> String {
        let done = if self.completed { "✓" } else { " " };
        let mut line = format!(
            "{} {} {} ({} min) [{}]",
            done,
            self.date.dimmed(),
            self.title,
            self.duration,
            self.priority.render()
        );

        if !self.location.is_empty() {
            line.push_str(&format!(" @ {}", self.location.blue()));
        }

        line
    }
}
