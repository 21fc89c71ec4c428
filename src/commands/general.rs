use crate::commands::{add, delete, edit, link, query, tag, task, CommandResult};
use crate::error::CommandError;
use crate::model::Model;

pub const CLEAR_USAGE: &str = "clear: Removes every contact from the address book.\nExample: clear";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";
pub const HELP_USAGE: &str = "help: Shows every command and its format.\nExample: help";

pub fn clear(model: &mut dyn Model) -> Result<CommandResult, CommandError> {
    model.clear_persons();
    Ok(CommandResult::new("Address book has been cleared!"))
}

pub fn exit() -> CommandResult {
    CommandResult {
        feedback: "Exiting lifebook as requested ...".to_string(),
        show_help: false,
        exit: true,
    }
}

pub fn help() -> CommandResult {
    CommandResult {
        feedback: help_text(),
        show_help: true,
        exit: false,
    }
}

/// Usage of every command, blank-line separated.
pub fn help_text() -> String {
    [
        add::ADD_CONTACT_USAGE,
        add::ADD_TODO_USAGE,
        add::ADD_EVENT_USAGE,
        edit::EDIT_CONTACT_USAGE,
        edit::EDIT_TASK_USAGE,
        delete::DELETE_CONTACT_USAGE,
        delete::DELETE_TASK_USAGE,
        CLEAR_USAGE,
        query::FIND_CONTACT_USAGE,
        query::FIND_TASK_USAGE,
        query::LIST_USAGE,
        link::LINK_MEETING_USAGE,
        link::LINK_COLLAB_USAGE,
        query::DUEBEFORE_USAGE,
        query::DUEAT_USAGE,
        query::SHOWTAG_USAGE,
        task::DONE_USAGE,
        task::SNOOZE_USAGE,
        query::SORT_CONTACT_USAGE,
        query::SORT_TASK_USAGE,
        tag::TAG_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n\n")
}
