//! Turns one line of user input into a [`Command`].
//!
//! The first word selects an entry in [`COMMAND_TABLE`]. Direct entries hand the
//! rest of the line to their parser; sub-routed entries read one more word
//! (`add contact ...`, `sort task`) before doing so.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tracing::debug;

use crate::commands::general::HELP_USAGE;
use crate::commands::{add as add_cmd, delete as delete_cmd, edit as edit_cmd, link as link_cmd, query as query_cmd};
use crate::commands::Command;
use crate::error::CommandError;

mod add;
mod delete;
mod edit;
mod link;
mod query;
pub mod syntax;
mod tag;
mod task;
pub mod tokenizer;
pub mod util;

use util::{invalid_format, split_first_token};

/// Parses the argument text that follows a command word.
pub type ParseFn = fn(&str) -> Result<Command, CommandError>;

#[derive(Debug, Clone, Copy)]
pub struct SubEntry {
    pub token: &'static str,
    pub usage: &'static str,
    pub parse: ParseFn,
}

#[derive(Debug, Clone, Copy)]
pub enum Route {
    Direct(ParseFn),
    Sub(&'static [SubEntry]),
}

#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    pub word: &'static str,
    pub route: Route,
}

/// The dispatch table is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("command table contains an empty command word")]
    EmptyWord,

    #[error("command word '{0}' is registered twice")]
    DuplicateWord(&'static str),

    #[error("command '{0}' has no sub-commands")]
    EmptySubRoute(&'static str),

    #[error("command '{0}' has an empty sub-command token")]
    EmptySubToken(&'static str),

    #[error("command '{word}' registers sub-command '{token}' twice")]
    DuplicateSubToken { word: &'static str, token: &'static str },
}

const ADD_ROUTES: &[SubEntry] = &[
    SubEntry {
        token: "contact",
        usage: add_cmd::ADD_CONTACT_USAGE,
        parse: add::parse_add_contact,
    },
    SubEntry {
        token: "todo",
        usage: add_cmd::ADD_TODO_USAGE,
        parse: add::parse_add_todo,
    },
    SubEntry {
        token: "event",
        usage: add_cmd::ADD_EVENT_USAGE,
        parse: add::parse_add_event,
    },
];

const EDIT_ROUTES: &[SubEntry] = &[
    SubEntry {
        token: "contact",
        usage: edit_cmd::EDIT_CONTACT_USAGE,
        parse: edit::parse_edit_contact,
    },
    SubEntry {
        token: "task",
        usage: edit_cmd::EDIT_TASK_USAGE,
        parse: edit::parse_edit_task,
    },
];

const DELETE_ROUTES: &[SubEntry] = &[
    SubEntry {
        token: "contact",
        usage: delete_cmd::DELETE_CONTACT_USAGE,
        parse: delete::parse_delete_contact,
    },
    SubEntry {
        token: "task",
        usage: delete_cmd::DELETE_TASK_USAGE,
        parse: delete::parse_delete_task,
    },
];

const FIND_ROUTES: &[SubEntry] = &[
    SubEntry {
        token: "contact",
        usage: query_cmd::FIND_CONTACT_USAGE,
        parse: query::parse_find_contact,
    },
    SubEntry {
        token: "task",
        usage: query_cmd::FIND_TASK_USAGE,
        parse: query::parse_find_task,
    },
];

const SORT_ROUTES: &[SubEntry] = &[
    SubEntry {
        token: "contact",
        usage: query_cmd::SORT_CONTACT_USAGE,
        parse: query::parse_sort_contact,
    },
    SubEntry {
        token: "task",
        usage: query_cmd::SORT_TASK_USAGE,
        parse: query::parse_sort_task,
    },
];

const LINK_ROUTES: &[SubEntry] = &[
    SubEntry {
        token: "meeting",
        usage: link_cmd::LINK_MEETING_USAGE,
        parse: link::parse_link_meeting,
    },
    SubEntry {
        token: "collab",
        usage: link_cmd::LINK_COLLAB_USAGE,
        parse: link::parse_link_collab,
    },
];

fn parse_clear(_args: &str) -> Result<Command, CommandError> {
    Ok(Command::Clear)
}

fn parse_exit(_args: &str) -> Result<Command, CommandError> {
    Ok(Command::Exit)
}

fn parse_help(_args: &str) -> Result<Command, CommandError> {
    Ok(Command::Help)
}

pub const COMMAND_TABLE: &[CommandEntry] = &[
    CommandEntry {
        word: "add",
        route: Route::Sub(ADD_ROUTES),
    },
    CommandEntry {
        word: "edit",
        route: Route::Sub(EDIT_ROUTES),
    },
    CommandEntry {
        word: "delete",
        route: Route::Sub(DELETE_ROUTES),
    },
    CommandEntry {
        word: "clear",
        route: Route::Direct(parse_clear),
    },
    CommandEntry {
        word: "find",
        route: Route::Sub(FIND_ROUTES),
    },
    CommandEntry {
        word: "list",
        route: Route::Direct(query::parse_list),
    },
    CommandEntry {
        word: "link",
        route: Route::Sub(LINK_ROUTES),
    },
    CommandEntry {
        word: "exit",
        route: Route::Direct(parse_exit),
    },
    CommandEntry {
        word: "help",
        route: Route::Direct(parse_help),
    },
    CommandEntry {
        word: "duebefore",
        route: Route::Direct(query::parse_due_before),
    },
    CommandEntry {
        word: "dueat",
        route: Route::Direct(query::parse_due_at),
    },
    CommandEntry {
        word: "showtag",
        route: Route::Direct(query::parse_show_tag),
    },
    CommandEntry {
        word: "done",
        route: Route::Direct(task::parse_done),
    },
    CommandEntry {
        word: "snooze",
        route: Route::Direct(task::parse_snooze),
    },
    CommandEntry {
        word: "sort",
        route: Route::Sub(SORT_ROUTES),
    },
    CommandEntry {
        word: "tag",
        route: Route::Direct(tag::parse_tag),
    },
];

/// Usage shown when the arguments do not select a form of the command.
fn sub_usage(subs: &[SubEntry]) -> String {
    subs.iter().map(|s| s.usage).collect::<Vec<_>>().join("\n")
}

/// Checks that every command word and sub-command token is non-empty and unique.
pub fn validate_table(table: &[CommandEntry]) -> Result<(), TableError> {
    let mut words = HashSet::new();
    for entry in table {
        if entry.word.trim().is_empty() {
            return Err(TableError::EmptyWord);
        }
        if !words.insert(entry.word) {
            return Err(TableError::DuplicateWord(entry.word));
        }
        if let Route::Sub(subs) = entry.route {
            if subs.is_empty() {
                return Err(TableError::EmptySubRoute(entry.word));
            }
            let mut tokens = HashSet::new();
            for sub in subs {
                if sub.token.trim().is_empty() {
                    return Err(TableError::EmptySubToken(entry.word));
                }
                if !tokens.insert(sub.token) {
                    return Err(TableError::DuplicateSubToken {
                        word: entry.word,
                        token: sub.token,
                    });
                }
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CommandParser {
    routes: HashMap<&'static str, CommandEntry>,
}

impl CommandParser {
    pub fn new() -> Result<Self, TableError> {
        Self::with_table(COMMAND_TABLE)
    }

    pub fn with_table(table: &'static [CommandEntry]) -> Result<Self, TableError> {
        validate_table(table)?;
        let routes = table.iter().map(|entry| (entry.word, *entry)).collect();
        Ok(Self { routes })
    }

    /// Command words in no particular order.
    pub fn command_words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    pub fn parse_command(&self, input: &str) -> Result<Command, CommandError> {
        let line = input.trim();
        if line.is_empty() {
            return Err(invalid_format(HELP_USAGE));
        }

        let (word, rest) = split_first_token(line);
        let Some(entry) = self.routes.get(word) else {
            debug!(word, "unknown command word");
            return Err(CommandError::UnknownCommand(line.to_string()));
        };
        debug!(word, "dispatching");

        match entry.route {
            Route::Direct(parse) => parse(rest),
            Route::Sub(subs) => {
                let (token, args) = split_first_token(rest);
                subs.iter()
                    .find(|sub| sub.token == token)
                    .ok_or_else(|| invalid_format(&sub_usage(subs)))
                    .and_then(|sub| (sub.parse)(args))
            }
        }
    }
}
