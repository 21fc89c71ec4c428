use std::collections::BTreeSet;

use crate::commands::{resolve, CommandResult};
use crate::error::{CommandError, ListKind};
use crate::index::Index;
use crate::model::Model;
use crate::models::Tag;

pub const TAG_USAGE: &str = "tag: Gives the contact and the task identified by their index numbers \
the same set of tags, replacing their current tags.\n\
Parameters: c/CONTACT_INDEX task/TASK_INDEX t/TAG [t/TAG]...\n\
Example: tag c/1 task/2 t/projectX";

/// Both indices are resolved before either entity is touched, so an invalid
/// index leaves both lists as they were.
pub fn contact_task_tag(
    model: &mut dyn Model,
    contact: Index,
    task: Index,
    tags: &BTreeSet<Tag>,
) -> Result<CommandResult, CommandError> {
    let person = resolve(&model.filtered_person_list(), contact, ListKind::Contact)?;
    let target_task = resolve(&model.filtered_task_list(), task, ListKind::Task)?;

    let mut tagged_person = person.clone();
    tagged_person.tags = tags.clone();
    let mut tagged_task = target_task.clone();
    tagged_task.set_tags(tags.clone());

    model.set_person(&person, tagged_person);
    model.set_task(&target_task, tagged_task);

    let names = tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");
    Ok(CommandResult::new(format!(
        "Tagged {} and {} with {}",
        person.name,
        target_task.description(),
        names
    )))
}
