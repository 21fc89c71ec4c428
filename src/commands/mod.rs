//! Executable commands produced by the parser.
//!
//! A `Command` is plain data bound to already-validated values. Running it
//! against a [`Model`] either returns a [`CommandResult`] or a
//! [`CommandError`]; failed commands never leave partial changes behind.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::error::{CommandError, ListKind};
use crate::index::Index;
use crate::model::Model;
use crate::models::{CollaborativeLink, Link, Person, Tag, Task};

pub mod add;
pub mod delete;
pub mod edit;
pub mod general;
pub mod link;
pub mod query;
pub mod tag;
pub mod task;

pub use edit::{EditPersonDescriptor, EditTaskDescriptor};
pub use query::ListTarget;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddContact(Person),
    AddTodo(Task),
    AddEvent(Task),
    EditContact { index: Index, descriptor: EditPersonDescriptor },
    EditTask { index: Index, descriptor: EditTaskDescriptor },
    DeleteContact(Index),
    DeleteTask(Index),
    Clear,
    FindContact(Vec<String>),
    FindTask(Vec<String>),
    List(ListTarget),
    LinkMeeting { index: Index, link: Link },
    LinkCollaborative { index: Index, link: CollaborativeLink },
    Exit,
    Help,
    DueBefore(NaiveDateTime),
    /// Without a time, matches the whole day
    DueAt { date: NaiveDate, time: Option<NaiveTime> },
    ShowTag(Vec<Tag>),
    Done(Index),
    Snooze { index: Index, deadline: NaiveDateTime },
    Sort(ListKind),
    ContactTaskTag { contact: Index, task: Index, tags: BTreeSet<Tag> },
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        debug!(command = self.word(), "executing");
        match self {
            Self::AddContact(person) => add::add_contact(model, person),
            Self::AddTodo(todo) => add::add_todo(model, todo),
            Self::AddEvent(event) => add::add_event(model, event),
            Self::EditContact { index, descriptor } => edit::edit_contact(model, *index, descriptor),
            Self::EditTask { index, descriptor } => edit::edit_task(model, *index, descriptor),
            Self::DeleteContact(index) => delete::delete_contact(model, *index),
            Self::DeleteTask(index) => delete::delete_task(model, *index),
            Self::Clear => general::clear(model),
            Self::FindContact(keywords) => query::find_contact(model, keywords),
            Self::FindTask(keywords) => query::find_task(model, keywords),
            Self::List(target) => query::list(model, *target),
            Self::LinkMeeting { index, link } => link::link_meeting(model, *index, link),
            Self::LinkCollaborative { index, link } => link::link_collaborative(model, *index, link),
            Self::Exit => Ok(general::exit()),
            Self::Help => Ok(general::help()),
            Self::DueBefore(moment) => query::due_before(model, *moment),
            Self::DueAt { date, time } => query::due_at(model, *date, *time),
            Self::ShowTag(tags) => query::show_tag(model, tags),
            Self::Done(index) => task::done(model, *index),
            Self::Snooze { index, deadline } => task::snooze(model, *index, *deadline),
            Self::Sort(kind) => query::sort(model, *kind),
            Self::ContactTaskTag { contact, task, tags } => tag::contact_task_tag(model, *contact, *task, tags),
        }
    }

    /// True if a successful run changes stored entities.
    pub fn mutates_data(&self) -> bool {
        matches!(
            self,
            Self::AddContact(_)
                | Self::AddTodo(_)
                | Self::AddEvent(_)
                | Self::EditContact { .. }
                | Self::EditTask { .. }
                | Self::DeleteContact(_)
                | Self::DeleteTask(_)
                | Self::Clear
                | Self::LinkMeeting { .. }
                | Self::LinkCollaborative { .. }
                | Self::Done(_)
                | Self::Snooze { .. }
                | Self::ContactTaskTag { .. }
        )
    }

    /// The command word as typed, for logging.
    pub fn word(&self) -> &'static str {
        match self {
            Self::AddContact(_) | Self::AddTodo(_) | Self::AddEvent(_) => "add",
            Self::EditContact { .. } | Self::EditTask { .. } => "edit",
            Self::DeleteContact(_) | Self::DeleteTask(_) => "delete",
            Self::Clear => "clear",
            Self::FindContact(_) | Self::FindTask(_) => "find",
            Self::List(_) => "list",
            Self::LinkMeeting { .. } | Self::LinkCollaborative { .. } => "link",
            Self::Exit => "exit",
            Self::Help => "help",
            Self::DueBefore(_) => "duebefore",
            Self::DueAt { .. } => "dueat",
            Self::ShowTag(_) => "showtag",
            Self::Done(_) => "done",
            Self::Snooze { .. } => "snooze",
            Self::Sort(_) => "sort",
            Self::ContactTaskTag { .. } => "tag",
        }
    }
}

/// Looks up `index` in a displayed list.
pub(crate) fn resolve<T: Clone>(shown: &[T], index: Index, kind: ListKind) -> Result<T, CommandError> {
    shown
        .get(index.zero_based())
        .cloned()
        .ok_or(CommandError::InvalidDisplayedIndex(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        let shown = vec!["a", "b", "c"];
        assert_eq!(resolve(&shown, Index::from_zero_based(2), ListKind::Task), Ok("c"));
        assert_eq!(
            resolve(&shown, Index::from_zero_based(3), ListKind::Task),
            Err(CommandError::InvalidDisplayedIndex(ListKind::Task))
        );
    }

    #[test]
    fn test_queries_do_not_mutate() {
        assert!(!Command::List(ListTarget::All).mutates_data());
        assert!(!Command::Sort(ListKind::Task).mutates_data());
        assert!(!Command::Help.mutates_data());
        assert!(Command::Clear.mutates_data());
        assert!(Command::Done(Index::from_zero_based(0)).mutates_data());
    }
}
