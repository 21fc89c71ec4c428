//! Commands that only reshape the displayed lists.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::commands::CommandResult;
use crate::error::{CommandError, ListKind};
use crate::model::{Model, PersonFilter, PersonOrder, TaskFilter, TaskOrder};
use crate::models::Tag;

pub const FIND_CONTACT_USAGE: &str = "find contact: Finds all contacts whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find contact alice bob charlie";

pub const FIND_TASK_USAGE: &str = "find task: Finds all tasks whose descriptions contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find task report meeting";

pub const LIST_USAGE: &str = "list: Lists all contacts and tasks, or only one of them.\n\
Parameters: [contact|task]\n\
Example: list task";

pub const SORT_CONTACT_USAGE: &str = "sort contact: Sorts the displayed contacts by name.\n\
Example: sort contact";

pub const SORT_TASK_USAGE: &str = "sort task: Sorts the displayed tasks by due date, earliest first.\n\
Example: sort task";

pub const SHOWTAG_USAGE: &str = "showtag: Shows the contacts and tasks carrying any of the given tags.\n\
Parameters: t/TAG [t/TAG]...\n\
Example: showtag t/projectX";

pub const DUEBEFORE_USAGE: &str = "duebefore: Shows the tasks due before the given date and time.\n\
Parameters: date/DD-MM-YYYY [time/HHMM]\n\
Example: duebefore date/07-01-2025 time/1200";

pub const DUEAT_USAGE: &str = "dueat: Shows the tasks due on the given day, or at the given moment if a time is provided.\n\
Parameters: date/DD-MM-YYYY [time/HHMM]\n\
Example: dueat date/03-01-2025 time/0930";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    All,
    Contacts,
    Tasks,
}

fn contacts_listed(model: &dyn Model) -> String {
    format!("{} contacts listed!", model.filtered_person_list().len())
}

fn tasks_listed(model: &dyn Model) -> String {
    format!("{} tasks listed!", model.filtered_task_list().len())
}

pub fn find_contact(model: &mut dyn Model, keywords: &[String]) -> Result<CommandResult, CommandError> {
    model.update_filtered_person_list(PersonFilter::NameKeywords(keywords.to_vec()));
    Ok(CommandResult::new(contacts_listed(model)))
}

pub fn find_task(model: &mut dyn Model, keywords: &[String]) -> Result<CommandResult, CommandError> {
    model.update_filtered_task_list(TaskFilter::DescriptionKeywords(keywords.to_vec()));
    Ok(CommandResult::new(tasks_listed(model)))
}

pub fn list(model: &mut dyn Model, target: ListTarget) -> Result<CommandResult, CommandError> {
    let feedback = match target {
        ListTarget::All => {
            model.update_filtered_person_list(PersonFilter::All);
            model.update_filtered_task_list(TaskFilter::All);
            "Listed all contacts and tasks".to_string()
        }
        ListTarget::Contacts => {
            model.update_filtered_person_list(PersonFilter::All);
            "Listed all contacts".to_string()
        }
        ListTarget::Tasks => {
            model.update_filtered_task_list(TaskFilter::All);
            "Listed all tasks".to_string()
        }
    };
    Ok(CommandResult::new(feedback))
}

pub fn sort(model: &mut dyn Model, kind: ListKind) -> Result<CommandResult, CommandError> {
    let feedback = match kind {
        ListKind::Contact => {
            model.update_sorted_person_list(PersonOrder::Name);
            "Sorted contacts by name"
        }
        ListKind::Task => {
            model.update_sorted_task_list(TaskOrder::Due);
            "Sorted tasks by due date"
        }
    };
    Ok(CommandResult::new(feedback))
}

pub fn show_tag(model: &mut dyn Model, tags: &[Tag]) -> Result<CommandResult, CommandError> {
    model.update_filtered_person_list(PersonFilter::Tags(tags.to_vec()));
    model.update_filtered_task_list(TaskFilter::Tags(tags.to_vec()));
    Ok(CommandResult::new(format!(
        "{} {}",
        contacts_listed(model),
        tasks_listed(model)
    )))
}

pub fn due_before(model: &mut dyn Model, moment: NaiveDateTime) -> Result<CommandResult, CommandError> {
    model.update_filtered_task_list(TaskFilter::DueBefore(moment));
    Ok(CommandResult::new(tasks_listed(model)))
}

pub fn due_at(model: &mut dyn Model, date: NaiveDate, time: Option<NaiveTime>) -> Result<CommandResult, CommandError> {
    let filter = match time {
        Some(time) => TaskFilter::DueAt(date.and_time(time)),
        None => TaskFilter::DueOn(date),
    };
    model.update_filtered_task_list(filter);
    Ok(CommandResult::new(tasks_listed(model)))
}
