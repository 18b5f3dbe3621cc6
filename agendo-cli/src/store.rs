//! Local JSON-file task store.
//!
//! Stands in for the dashboard's persistence backend: a flat JSON array of
//! task records. Duplicate detection is by (title, start) pair, the same
//! check the backend applies on bulk create.

use std::path::PathBuf;

use agendo_core::error::{AgendoError, AgendoResult};
use agendo_core::store::{StoreStats, TaskStore};
use agendo_core::task::TaskRecord;

pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonTaskStore { path: path.into() }
    }

    /// Read the stored tasks. A missing file is an empty list.
    pub fn load(&self) -> AgendoResult<Vec<TaskRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| AgendoError::Serialization(e.to_string()))
    }

    fn save(&self, tasks: &[TaskRecord]) -> AgendoResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(tasks)
            .map_err(|e| AgendoError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

impl TaskStore for JsonTaskStore {
    fn create_many(&mut self, tasks: &[TaskRecord]) -> AgendoResult<StoreStats> {
        let mut stored = self.load()?;
        let mut stats = StoreStats::default();

        for task in tasks {
            let duplicate = stored
                .iter()
                .any(|t| t.title == task.title && t.date == task.date);

            if duplicate {
                log::debug!("Skipping duplicate task '{}' ({})", task.title, task.date);
                stats.duplicates += 1;
            } else {
                stored.push(task.clone());
                stats.created += 1;
            }
        }

        if stats.created > 0 {
            self.save(&stored)?;
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agendo_core::task::Priority;

    fn sample_task(title: &str, date: &str) -> TaskRecord {
        TaskRecord {
            title: title.to_string(),
            date: date.to_string(),
            end_date: "2024-03-05T15:00:00".to_string(),
            duration: 60,
            location: String::new(),
            description: String::new(),
            priority: Priority::Medium,
            completed: false,
        }
    }

    #[test]
    fn test_create_many_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut store = JsonTaskStore::new(&path);

        let tasks = vec![
            sample_task("Demo", "2024-03-05T14:00:00"),
            sample_task("Ferie", "2024-03-06T09:00:00"),
        ];

        let stats = store.create_many(&tasks).unwrap();
        assert_eq!(stats.created, 2);
        assert_eq!(stats.duplicates, 0);

        let stored = store.load().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].title, "Demo");
    }

    #[test]
    fn test_duplicates_are_not_recreated() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonTaskStore::new(dir.path().join("tasks.json"));

        let first = vec![sample_task("Demo", "2024-03-05T14:00:00")];
        store.create_many(&first).unwrap();

        // Same title+date is a duplicate; same title at another time is not.
        let second = vec![
            sample_task("Demo", "2024-03-05T14:00:00"),
            sample_task("Demo", "2024-03-07T14:00:00"),
        ];
        let stats = store.create_many(&second).unwrap();
        assert_eq!(stats.created, 1);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonTaskStore::new(dir.path().join("nope.json"));
        assert!(store.load().unwrap().is_empty());
    }
}
