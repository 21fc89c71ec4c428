//! Glue between user input, the model and the data file.

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, warn};

use crate::commands::CommandResult;
use crate::config::Config;
use crate::error::CommandError;
use crate::model::{Model, ModelManager};
use crate::models::{Person, Task};
use crate::parser::{CommandParser, TableError};
use crate::storage::{JsonStorage, Snapshot, StorageError};

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("could not save data: {0}")]
    Storage(#[from] StorageError),
}

pub struct Logic {
    parser: CommandParser,
    model: ModelManager,
    storage: Option<JsonStorage>,
}

impl Logic {
    /// Without storage nothing is persisted.
    pub fn new(model: ModelManager, storage: Option<JsonStorage>) -> Result<Self, TableError> {
        Ok(Self {
            parser: CommandParser::new()?,
            model,
            storage,
        })
    }

    /// Builds the session from the configured data file, starting empty if
    /// the file does not exist.
    pub fn open(config: &Config) -> Result<Self> {
        let storage = JsonStorage::new(&config.data_file);
        let snapshot = storage
            .load()
            .with_context(|| format!("Failed to load {}", config.data_file.display()))?
            .unwrap_or_default();

        let model = ModelManager::with_data(snapshot.persons, snapshot.tasks).with_due_soon_days(config.due_soon_days);
        let logic = Self::new(model, Some(storage)).context("Invalid command table")?;
        Ok(logic)
    }

    pub fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        debug!(line, "received command line");
        let command = self.parser.parse_command(line).map_err(|e| {
            warn!(error = %e, "parse failed");
            e
        })?;
        let result = command.execute(&mut self.model).map_err(|e| {
            warn!(command = command.word(), error = %e, "command failed");
            e
        })?;

        if command.mutates_data() {
            self.save()?;
        }
        Ok(result)
    }

    fn save(&self) -> Result<(), StorageError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        let snapshot = Snapshot::new(self.model.persons().to_vec(), self.model.tasks().to_vec());
        storage.save(&snapshot)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn filtered_person_list(&self) -> Vec<Person> {
        self.model.filtered_person_list()
    }

    pub fn filtered_task_list(&self) -> Vec<Task> {
        self.model.filtered_task_list()
    }

    pub fn due_soon_task_list(&self) -> Vec<Task> {
        self.model.due_soon_task_list()
    }

    pub fn storage(&self) -> Option<&JsonStorage> {
        self.storage.as_ref()
    }
}
