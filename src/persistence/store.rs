use super::files::{atomic_write, file_exists, global_file, project_file, read_file};
use super::parser::parse_tasks;
use super::serializer::serialize_tasks;
use crate::domain::{StorageLocation, Task};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access {}: {reason:#}", .path.display())]
    Io { path: PathBuf, reason: anyhow::Error },
    #[error("invalid task file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read tasks from `path`, reporting what went wrong
pub fn try_load(path: &Path, now_ms: i64) -> Result<Vec<Task>, StoreError> {
    let content = read_file(path).map_err(|reason| StoreError::Io {
        path: path.to_path_buf(),
        reason,
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    parse_tasks(&content, now_ms).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write tasks to `path`, reporting what went wrong
pub fn try_save(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let json = serialize_tasks(tasks).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, &json).map_err(|reason| StoreError::Io {
        path: path.to_path_buf(),
        reason,
    })
}

/// Load tasks; a missing, unreadable or malformed file yields an empty list
pub fn load(path: &Path, now_ms: i64) -> Vec<Task> {
    match try_load(path, now_ms) {
        Ok(tasks) => {
            log::debug!("Loaded {} tasks from {}", tasks.len(), path.display());
            tasks
        }
        Err(e) => {
            log::warn!("{}", e);
            Vec::new()
        }
    }
}

/// Save tasks; returns false on any failure
pub fn save(path: &Path, tasks: &[Task]) -> bool {
    match try_save(path, tasks) {
        Ok(()) => {
            log::debug!("Saved {} tasks to {}", tasks.len(), path.display());
            true
        }
        Err(e) => {
            log::error!("{}", e);
            false
        }
    }
}

/// The two task files the app knows about
#[derive(Debug, Clone)]
pub struct TaskStore {
    pub project: PathBuf,
    pub global: PathBuf,
}

impl TaskStore {
    pub fn new(project: PathBuf, global: PathBuf) -> Self {
        Self { project, global }
    }

    /// Store rooted at the working directory and the home directory
    pub fn discover() -> anyhow::Result<Self> {
        Ok(Self::new(project_file()?, global_file()?))
    }

    pub fn path(&self, location: StorageLocation) -> &Path {
        match location {
            StorageLocation::Project => &self.project,
            StorageLocation::Global => &self.global,
        }
    }

    pub fn exists(&self, location: StorageLocation) -> bool {
        file_exists(self.path(location))
    }

    /// Project file if present, else global if present, else project
    pub fn initial_location(&self) -> StorageLocation {
        if self.exists(StorageLocation::Project) {
            StorageLocation::Project
        } else if self.exists(StorageLocation::Global) {
            StorageLocation::Global
        } else {
            StorageLocation::Project
        }
    }

    pub fn load(&self, location: StorageLocation, now_ms: i64) -> Vec<Task> {
        load(self.path(location), now_ms)
    }

    pub fn save(&self, location: StorageLocation, tasks: &[Task]) -> bool {
        save(self.path(location), tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn temp_store(dir: &Path) -> TaskStore {
        TaskStore::new(dir.join("project.json"), dir.join("home").join("global.json"))
    }

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new(TaskId::Text("b-2".to_string()), "Water plants".to_string(), 1_000);
        done.toggle(2_000);
        vec![Task::new(TaskId::Number(1), "Buy milk".to_string(), 500), done]
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempdir().unwrap();
        assert!(load(&dir.path().join("nope.json"), 0).is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"tasks\": [").unwrap();

        assert!(load(&path, 0).is_empty());
        assert!(matches!(try_load(&path, 0), Err(StoreError::Json { .. })));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let tasks = sample_tasks();

        assert!(save(&path, &tasks));
        assert_eq!(load(&path, 99), tasks);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        assert!(save(&path, &sample_tasks()));
        assert!(save(&path, &[]));
        assert!(load(&path, 0).is_empty());
    }

    #[test]
    fn test_save_failure_returns_false() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "").unwrap();

        // Parent "directory" is a regular file
        assert!(!save(&blocker.join("tasks.json"), &sample_tasks()));
    }

    #[test]
    fn test_initial_location_policy() {
        let dir = tempdir().unwrap();
        let store = temp_store(dir.path());
        assert_eq!(store.initial_location(), StorageLocation::Project);

        assert!(store.save(StorageLocation::Global, &sample_tasks()));
        assert_eq!(store.initial_location(), StorageLocation::Global);

        assert!(store.save(StorageLocation::Project, &[]));
        assert_eq!(store.initial_location(), StorageLocation::Project);
    }

    #[test]
    fn test_store_paths() {
        let dir = tempdir().unwrap();
        let store = temp_store(dir.path());
        assert_eq!(store.path(StorageLocation::Project), dir.path().join("project.json"));
        assert!(!store.exists(StorageLocation::Global));
    }
}
