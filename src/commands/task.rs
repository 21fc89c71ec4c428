use chrono::NaiveDateTime;

use crate::commands::{resolve, CommandResult};
use crate::error::{CommandError, ListKind};
use crate::index::Index;
use crate::model::Model;
use crate::models::task::format_date_time;

pub const DONE_USAGE: &str = "done: Marks the task identified by the index number used in the displayed task list as done.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: done 1";

pub const SNOOZE_USAGE: &str = "snooze: Moves the deadline of the todo identified by the index number \
used in the displayed task list.\n\
Parameters: INDEX (must be a positive integer) date/DD-MM-YYYY time/HHMM\n\
Example: snooze 1 date/08-01-2025 time/0900";

pub fn done(model: &mut dyn Model, index: Index) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_task_list(), index, ListKind::Task)?;
    let mut edited = target.clone();
    edited.mark_done();
    if !target.is_same_task(&edited) && model.has_task(&edited) {
        return Err(CommandError::DuplicateEntity(ListKind::Task));
    }
    model.set_task(&target, edited.clone());
    Ok(CommandResult::new(format!("Marked task as done: {}", edited)))
}

pub fn snooze(model: &mut dyn Model, index: Index, deadline: NaiveDateTime) -> Result<CommandResult, CommandError> {
    let target = resolve(&model.filtered_task_list(), index, ListKind::Task)?;
    let mut edited = target.clone();
    if !edited.snooze(deadline) {
        return Err(CommandError::InvalidEdit("Only todos can be snoozed".to_string()));
    }
    model.set_task(&target, edited.clone());
    Ok(CommandResult::new(format!(
        "Snoozed {} until {}",
        edited.description(),
        format_date_time(deadline)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::fixtures::{at, todo, typical_model};
    use crate::model::ModelManager;

    #[test]
    fn test_done() {
        let mut model = typical_model();
        done(&mut model, Index::from_zero_based(1)).unwrap();
        assert!(model.tasks()[1].is_done());
        assert!(!model.tasks()[0].is_done());
    }

    #[test]
    fn test_done_outside_displayed_list() {
        let mut model = typical_model();
        let err = Command::Done(Index::from_one_based(5).unwrap())
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidDisplayedIndex(ListKind::Task));
        assert!(model.tasks().iter().all(|t| !t.is_done()));
    }

    #[test]
    fn test_done_would_duplicate_completed_task() {
        let mut model = ModelManager::new();
        model.add_todo(todo("Pay rent", "31-01-2025", "0900"));
        done(&mut model, Index::from_zero_based(0)).unwrap();
        model.add_todo(todo("Pay rent", "28-02-2025", "0900"));

        let err = done(&mut model, Index::from_zero_based(1)).unwrap_err();
        assert_eq!(err, CommandError::DuplicateEntity(ListKind::Task));
        assert!(!model.tasks()[1].is_done());
    }

    #[test]
    fn test_done_twice_is_allowed() {
        let mut model = typical_model();
        done(&mut model, Index::from_zero_based(0)).unwrap();
        done(&mut model, Index::from_zero_based(0)).unwrap();
        assert!(model.tasks()[0].is_done());
    }

    #[test]
    fn test_snooze_todo() {
        let mut model = typical_model();
        let result = snooze(&mut model, Index::from_zero_based(0), at("08-01-2025", "0900")).unwrap();
        assert_eq!(result.feedback, "Snoozed Chores until Jan 8 2025 0900");
        assert_eq!(model.tasks()[0].due(), at("08-01-2025", "0900"));
    }

    #[test]
    fn test_snooze_event_rejected() {
        let mut model = typical_model();
        let before = model.tasks().to_vec();
        let err = snooze(&mut model, Index::from_zero_based(2), at("08-01-2025", "0900")).unwrap_err();
        assert!(matches!(err, CommandError::InvalidEdit(_)));
        assert_eq!(model.tasks(), before.as_slice());
    }
}
