//! Error taxonomy shared by the parser, the commands and the model.
//!
//! Every variant is recoverable: a command that fails leaves the model
//! exactly as it was and the error is reported back to the caller.

use std::fmt;

use thiserror::Error;

/// A value object rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintError {
    pub message: &'static str,
}

impl ConstraintError {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Which displayed list an index or duplicate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Contact,
    Task,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Task => "task",
        }
    }

    /// Where entities of this kind are stored, as shown to the user.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Contact => "address book",
            Self::Task => "task list",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of parsing or executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Malformed or incomplete command text. Carries a usage or constraint message.
    #[error("{0}")]
    Parse(String),

    #[error("The {0} index provided is invalid")]
    InvalidDisplayedIndex(ListKind),

    #[error("This {0} already exists in the {collection}", collection = .0.collection())]
    DuplicateEntity(ListKind),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Well-formed request that does not apply to the selected entity.
    #[error("{0}")]
    InvalidEdit(String),
}

impl From<ConstraintError> for CommandError {
    fn from(err: ConstraintError) -> Self {
        CommandError::Parse(err.message.to_string())
    }
}
