pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod logic;
pub mod model;
pub mod models;
pub mod parser;
pub mod storage;

#[cfg(test)]
mod fixtures;

pub use error::{CommandError, ConstraintError, ListKind};
pub use logic::{Logic, LogicError};
pub use model::{Model, ModelManager};
pub use parser::CommandParser;
