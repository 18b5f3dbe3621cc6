//! Collaborator contracts for callers of the import engine.
//!
//! The engine only produces `TaskRecord`s; persistence and view refresh live
//! on the caller's side of the boundary. These traits describe that boundary
//! without pulling any backend into this crate.

use crate::error::AgendoResult;
use crate::task::TaskRecord;

/// Counts returned by a bulk create.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub created: usize,
    pub duplicates: usize,
}

/// Bulk persistence for imported tasks.
///
/// Implementations perform their own duplicate detection; the engine never
/// deduplicates.
pub trait TaskStore {
    fn create_many(&mut self, tasks: &[TaskRecord]) -> AgendoResult<StoreStats>;
}

/// Fired by the caller after a successful bulk persistence so that views can
/// refresh. The engine has no awareness of it.
pub trait ImportNotifier {
    fn notify_imported(&self, created: usize);
}
