use crate::commands::delete::{DELETE_CONTACT_USAGE, DELETE_TASK_USAGE};
use crate::commands::Command;
use crate::error::CommandError;
use crate::index::Index;
use crate::parser::util::{invalid_format, parse_index};

fn parse_lone_index(args: &str, usage: &str) -> Result<Index, CommandError> {
    if args.trim().is_empty() {
        return Err(invalid_format(usage));
    }
    parse_index(args)
}

pub fn parse_delete_contact(args: &str) -> Result<Command, CommandError> {
    parse_lone_index(args, DELETE_CONTACT_USAGE).map(Command::DeleteContact)
}

pub fn parse_delete_task(args: &str) -> Result<Command, CommandError> {
    parse_lone_index(args, DELETE_TASK_USAGE).map(Command::DeleteTask)
}
