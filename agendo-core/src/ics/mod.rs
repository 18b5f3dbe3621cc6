//! ICS calendar import.
//!
//! This module converts the text of an iCalendar (.ics) export into task
//! records. Reading the file and persisting the results are the caller's
//! concerns; the engine itself is a pure function of its input.

mod parse;

pub use parse::{ALL_DAY_MARKER, ImportOutcome, import, parse_tasks};
