use chrono::NaiveTime;

use crate::commands::query::{
    DUEAT_USAGE, DUEBEFORE_USAGE, FIND_CONTACT_USAGE, FIND_TASK_USAGE, LIST_USAGE, SHOWTAG_USAGE, SORT_CONTACT_USAGE,
    SORT_TASK_USAGE,
};
use crate::commands::{Command, ListTarget};
use crate::error::{CommandError, ListKind};
use crate::parser::syntax::{PREFIX_DATE, PREFIX_TAG, PREFIX_TIME};
use crate::parser::tokenizer::{tokenize, ArgumentMultimap};
use crate::parser::util::{invalid_format, parse_date, parse_tag, parse_time};

fn keywords(args: &str, usage: &str) -> Result<Vec<String>, CommandError> {
    let words: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Err(invalid_format(usage));
    }
    Ok(words)
}

pub fn parse_find_contact(args: &str) -> Result<Command, CommandError> {
    keywords(args, FIND_CONTACT_USAGE).map(Command::FindContact)
}

pub fn parse_find_task(args: &str) -> Result<Command, CommandError> {
    keywords(args, FIND_TASK_USAGE).map(Command::FindTask)
}

pub fn parse_list(args: &str) -> Result<Command, CommandError> {
    let target = match args.trim() {
        "" => ListTarget::All,
        "contact" => ListTarget::Contacts,
        "task" => ListTarget::Tasks,
        _ => return Err(invalid_format(LIST_USAGE)),
    };
    Ok(Command::List(target))
}

pub fn parse_sort_contact(args: &str) -> Result<Command, CommandError> {
    if !args.trim().is_empty() {
        return Err(invalid_format(SORT_CONTACT_USAGE));
    }
    Ok(Command::Sort(ListKind::Contact))
}

pub fn parse_sort_task(args: &str) -> Result<Command, CommandError> {
    if !args.trim().is_empty() {
        return Err(invalid_format(SORT_TASK_USAGE));
    }
    Ok(Command::Sort(ListKind::Task))
}

pub fn parse_show_tag(args: &str) -> Result<Command, CommandError> {
    let map = tokenize(args, &[PREFIX_TAG]);
    if !map.preamble().is_empty() || !map.contains(PREFIX_TAG) {
        return Err(invalid_format(SHOWTAG_USAGE));
    }
    let tags = map
        .all_values(PREFIX_TAG)
        .iter()
        .map(|v| parse_tag(v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Command::ShowTag(tags))
}

fn date_and_optional_time(args: &str, usage: &str) -> Result<ArgumentMultimap, CommandError> {
    let map = tokenize(args, &[PREFIX_DATE, PREFIX_TIME]);
    if !map.preamble().is_empty() || !map.contains(PREFIX_DATE) {
        return Err(invalid_format(usage));
    }
    Ok(map)
}

/// Without `time/` the cutoff is the start of the given day.
pub fn parse_due_before(args: &str) -> Result<Command, CommandError> {
    let map = date_and_optional_time(args, DUEBEFORE_USAGE)?;
    let date = parse_date(map.value(PREFIX_DATE).unwrap_or_default())?;
    let time = map.value(PREFIX_TIME).map(parse_time).transpose()?.unwrap_or(NaiveTime::MIN);
    Ok(Command::DueBefore(date.and_time(time)))
}

pub fn parse_due_at(args: &str) -> Result<Command, CommandError> {
    let map = date_and_optional_time(args, DUEAT_USAGE)?;
    let date = parse_date(map.value(PREFIX_DATE).unwrap_or_default())?;
    let time = map.value(PREFIX_TIME).map(parse_time).transpose()?;
    Ok(Command::DueAt { date, time })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::at;
    use crate::models::task::{parse_input_date, parse_input_time};
    use crate::models::Tag;

    #[test]
    fn test_find() {
        assert_eq!(
            parse_find_contact("  alice   bob "),
            Ok(Command::FindContact(vec!["alice".to_string(), "bob".to_string()]))
        );
        assert_eq!(parse_find_task(""), Err(invalid_format(FIND_TASK_USAGE)));
    }

    #[test]
    fn test_list() {
        assert_eq!(parse_list(""), Ok(Command::List(ListTarget::All)));
        assert_eq!(parse_list(" task "), Ok(Command::List(ListTarget::Tasks)));
        assert_eq!(parse_list("contact"), Ok(Command::List(ListTarget::Contacts)));
        assert_eq!(parse_list("everything"), Err(invalid_format(LIST_USAGE)));
    }

    #[test]
    fn test_sort() {
        assert_eq!(parse_sort_task(""), Ok(Command::Sort(ListKind::Task)));
        assert_eq!(parse_sort_contact("by name"), Err(invalid_format(SORT_CONTACT_USAGE)));
    }

    #[test]
    fn test_show_tag() {
        assert_eq!(
            parse_show_tag("t/friends t/work"),
            Ok(Command::ShowTag(vec![
                Tag::parse("friends").unwrap(),
                Tag::parse("work").unwrap()
            ]))
        );
        assert_eq!(parse_show_tag("friends"), Err(invalid_format(SHOWTAG_USAGE)));
    }

    #[test]
    fn test_due_before_defaults_to_midnight() {
        assert_eq!(
            parse_due_before("date/07-01-2025"),
            Ok(Command::DueBefore(at("07-01-2025", "0000")))
        );
        assert_eq!(
            parse_due_before("date/07-01-2025 time/1200"),
            Ok(Command::DueBefore(at("07-01-2025", "1200")))
        );
        assert_eq!(parse_due_before("time/1200"), Err(invalid_format(DUEBEFORE_USAGE)));
    }

    #[test]
    fn test_due_at() {
        assert_eq!(
            parse_due_at("date/03-01-2025"),
            Ok(Command::DueAt {
                date: parse_input_date("03-01-2025").unwrap(),
                time: None,
            })
        );
        assert_eq!(
            parse_due_at("date/03-01-2025 time/0930"),
            Ok(Command::DueAt {
                date: parse_input_date("03-01-2025").unwrap(),
                time: Some(parse_input_time("0930").unwrap()),
            })
        );
    }
}
