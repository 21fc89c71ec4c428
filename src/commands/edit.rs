use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};

use crate::commands::{resolve, CommandResult};
use crate::error::{CommandError, ListKind};
use crate::index::Index;
use crate::model::Model;
use crate::models::{Address, Email, Link, Name, Person, Phone, Tag, Task, TaskKind};

pub const EDIT_CONTACT_USAGE: &str = "edit contact: Edits the contact identified by the index number \
in the displayed contact list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit contact 1 p/91234567 e/johndoe@example.com";

pub const EDIT_TASK_USAGE: &str = "edit task: Edits the task identified by the index number \
in the displayed task list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [desc/DESCRIPTION] [date/DD-MM-YYYY] [time/HHMM] \
[startdate/DD-MM-YYYY] [starttime/HHMM] [enddate/DD-MM-YYYY] [endtime/HHMM] [link/URL] [t/TAG]...\n\
Example: edit task 2 desc/Submit final report time/2359";

pub const NOTHING_EDITED: &str = "At least one field to edit must be provided.";

/// Fields to overwrite on a contact. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears all tags
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    pub fn apply(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name.clone()),
            self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            self.email.clone().unwrap_or_else(|| person.email.clone()),
            self.address.clone().unwrap_or_else(|| person.address.clone()),
            self.tags.clone().unwrap_or_else(|| person.tags.clone()),
        )
    }
}

/// Fields to overwrite on a task.
///
/// Date and time halves are kept apart so that `time/` alone moves a
/// deadline within the same day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub link: Option<Link>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some()
            || self.edits_deadline()
            || self.edits_span()
            || self.link.is_some()
            || self.tags.is_some()
    }

    fn edits_deadline(&self) -> bool {
        self.date.is_some() || self.time.is_some()
    }

    fn edits_span(&self) -> bool {
        self.start_date.is_some() || self.start_time.is_some() || self.end_date.is_some() || self.end_time.is_some()
    }

    pub fn apply(&self, task: &Task) -> Result<Task, CommandError> {
        let mut edited = task.clone();

        if let Some(ref description) = self.description {
            edited.set_description(description)?;
        }

        let kind = match *task.kind() {
            TaskKind::Todo { deadline } => {
                if self.edits_span() {
                    return Err(CommandError::InvalidEdit(
                        "Start and end fields only apply to events".to_string(),
                    ));
                }
                TaskKind::Todo {
                    deadline: self
                        .date
                        .unwrap_or(deadline.date())
                        .and_time(self.time.unwrap_or(deadline.time())),
                }
            }
            TaskKind::Event { start, end } => {
                if self.edits_deadline() {
                    return Err(CommandError::InvalidEdit(
                        "Date and time fields only apply to todos, use startdate/ and enddate/ for events"
                            .to_string(),
                    ));
                }
                TaskKind::Event {
                    start: self
                        .start_date
                        .unwrap_or(start.date())
                        .and_time(self.start_time.unwrap_or(start.time())),
                    end: self
                        .end_date
                        .unwrap_or(end.date())
                        .and_time(self.end_time.unwrap_or(end.time())),
                }
            }
        };
        edited
            .set_kind(kind)
            .map_err(|e| CommandError::InvalidEdit(e.message.to_string()))?;

        if let Some(ref link) = self.link {
            edited.set_link(Some(link.clone()));
        }
        if let Some(ref tags) = self.tags {
            edited.set_tags(tags.clone());
        }
        Ok(edited)
    }
}

pub fn edit_contact(
    model: &mut dyn Model,
    index: Index,
    descriptor: &EditPersonDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_person_list(), index, ListKind::Contact)?;
    let edited = descriptor.apply(&target);

    if !target.is_same_person(&edited) && model.has_person(&edited) {
        return Err(CommandError::DuplicateEntity(ListKind::Contact));
    }

    model.set_person(&target, edited.clone());
    Ok(CommandResult::new(format!("Edited contact: {}", edited)))
}

pub fn edit_task(
    model: &mut dyn Model,
    index: Index,
    descriptor: &EditTaskDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_task_list(), index, ListKind::Task)?;
    let edited = descriptor.apply(&target)?;

    if !target.is_same_task(&edited) && model.has_task(&edited) {
        return Err(CommandError::DuplicateEntity(ListKind::Task));
    }

    model.set_task(&target, edited.clone());
    Ok(CommandResult::new(format!("Edited task: {}", edited)))
}
