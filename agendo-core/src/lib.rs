//! Core types for the agendo ecosystem.
//!
//! This crate provides the pieces shared by the agendo CLI and the dashboard:
//! - `TaskRecord` and related types for schedulable tasks
//! - the `ics` module, which converts iCalendar (.ics) exports into task records
//! - collaborator contracts (`TaskStore`, `ImportNotifier`) implemented by callers

pub mod error;
pub mod ics;
pub mod store;
pub mod task;

// Re-export the task types at crate root for convenience
pub use task::*;
