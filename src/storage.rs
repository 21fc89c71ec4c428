//! JSON snapshot of the contact and task lists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::ListKind;
use crate::models::{Person, Task};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("data file {} is not valid: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("data file {} lists the same {kind} twice", .path.display())]
    Duplicate { path: PathBuf, kind: ListKind },
}

/// Everything that is persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub fn new(persons: Vec<Person>, tasks: Vec<Task>) -> Self {
        Self { persons, tasks }
    }

    /// First list holding two entities that count as the same.
    fn duplicate_kind(&self) -> Option<ListKind> {
        let persons_clash = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| self.persons[i + 1..].iter().any(|q| p.is_same_person(q)));
        if persons_clash {
            return Some(ListKind::Contact);
        }
        let tasks_clash = self
            .tasks
            .iter()
            .enumerate()
            .any(|(i, t)| self.tasks[i + 1..].iter().any(|u| t.is_same_task(u)));
        tasks_clash.then_some(ListKind::Task)
    }
}

#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` if the file does not exist yet.
    pub fn load(&self) -> Result<Option<Snapshot>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet");
                return Ok(None);
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let snapshot: Snapshot = serde_json::from_str(&content).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        if let Some(kind) = snapshot.duplicate_kind() {
            return Err(StorageError::Duplicate {
                path: self.path.clone(),
                kind,
            });
        }

        info!(
            path = %self.path.display(),
            persons = snapshot.persons.len(),
            tasks = snapshot.tasks.len(),
            "loaded data file"
        );
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let io_err = |source: io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(snapshot).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)?;

        debug!(path = %self.path.display(), "saved data file");
        Ok(())
    }
}
