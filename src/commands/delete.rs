use crate::commands::{resolve, CommandResult};
use crate::error::{CommandError, ListKind};
use crate::index::Index;
use crate::model::Model;

pub const DELETE_CONTACT_USAGE: &str = "delete contact: Deletes the contact identified by the index number \
used in the displayed contact list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete contact 1";

pub const DELETE_TASK_USAGE: &str = "delete task: Deletes the task identified by the index number \
used in the displayed task list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete task 1";

pub fn delete_contact(model: &mut dyn Model, index: Index) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_person_list(), index, ListKind::Contact)?;
    model.delete_person(&target);
    Ok(CommandResult::new(format!("Deleted contact: {}", target)))
}

pub fn delete_task(model: &mut dyn Model, index: Index) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_task_list(), index, ListKind::Task)?;
    model.delete_task(&target);
    Ok(CommandResult::new(format!("Deleted task: {}", target)))
}
