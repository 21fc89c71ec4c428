use crate::commands::CommandResult;
use crate::error::{CommandError, ListKind};
use crate::model::Model;
use crate::models::{Person, Task};

pub const ADD_CONTACT_USAGE: &str = "add contact: Adds a contact to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: add contact n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends";

pub const ADD_TODO_USAGE: &str = "add todo: Adds a todo to the task list. \
Parameters: desc/DESCRIPTION date/DD-MM-YYYY time/HHMM [link/URL] [t/TAG]...\n\
Example: add todo desc/Submit report date/01-01-2025 time/1800";

pub const ADD_EVENT_USAGE: &str = "add event: Adds an event to the task list. \
Parameters: desc/DESCRIPTION startdate/DD-MM-YYYY starttime/HHMM enddate/DD-MM-YYYY endtime/HHMM [link/URL] [t/TAG]...\n\
Example: add event desc/Team meeting startdate/03-01-2025 starttime/0900 enddate/03-01-2025 endtime/1000";

pub fn add_contact(model: &mut dyn Model, person: &Person) -> Result<CommandResult, CommandError> {
    if model.has_person(person) {
        return Err(CommandError::DuplicateEntity(ListKind::Contact));
    }
    model.add_person(person.clone());
    Ok(CommandResult::new(format!("New contact added: {}", person)))
}

pub fn add_todo(model: &mut dyn Model, todo: &Task) -> Result<CommandResult, CommandError> {
    if model.has_task(todo) {
        return Err(CommandError::DuplicateEntity(ListKind::Task));
    }
    model.add_todo(todo.clone());
    Ok(CommandResult::new(format!("New todo added: {}", todo)))
}

pub fn add_event(model: &mut dyn Model, event: &Task) -> Result<CommandResult, CommandError> {
    if model.has_task(event) {
        return Err(CommandError::DuplicateEntity(ListKind::Task));
    }
    model.add_event(event.clone());
    Ok(CommandResult::new(format!("New event added: {}", event)))
}
