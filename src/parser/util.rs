//! Conversions from raw argument text to validated values.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::CommandError;
use crate::index::Index;
use crate::models::task::{parse_input_date, parse_input_time, DESCRIPTION_CONSTRAINTS};
use crate::models::{Address, CollaborativeLink, Email, Link, Name, Phone, Tag};

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse error carrying a command's usage text.
pub fn invalid_format(usage: &str) -> CommandError {
    CommandError::Parse(format!("Invalid command format! \n{}", usage))
}

/// Splits off the first whitespace-delimited word. The rest is left-trimmed.
pub fn split_first_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

/// One-based digits to an [`Index`]. Signs, spaces and zero are rejected.
pub fn parse_index(s: &str) -> Result<Index, CommandError> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::Parse(MESSAGE_INVALID_INDEX.to_string()));
    }
    s.parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| CommandError::Parse(MESSAGE_INVALID_INDEX.to_string()))
}

pub fn parse_name(s: &str) -> Result<Name, CommandError> {
    Ok(Name::parse(s)?)
}

pub fn parse_phone(s: &str) -> Result<Phone, CommandError> {
    Ok(Phone::parse(s)?)
}

pub fn parse_email(s: &str) -> Result<Email, CommandError> {
    Ok(Email::parse(s)?)
}

pub fn parse_address(s: &str) -> Result<Address, CommandError> {
    Ok(Address::parse(s)?)
}

pub fn parse_tag(s: &str) -> Result<Tag, CommandError> {
    Ok(Tag::parse(s)?)
}

pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, CommandError> {
    values.iter().map(|v| parse_tag(v)).collect()
}

/// Tags for an edit: `None` if `t/` never appeared, an empty set for a lone
/// empty `t/`.
pub fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, CommandError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}

pub fn parse_link(s: &str) -> Result<Link, CommandError> {
    Ok(Link::parse(s)?)
}

pub fn parse_collaborative_link(label: &str, url: &str) -> Result<CollaborativeLink, CommandError> {
    Ok(CollaborativeLink::parse(label, url)?)
}

pub fn parse_description(s: &str) -> Result<String, CommandError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CommandError::Parse(DESCRIPTION_CONSTRAINTS.to_string()));
    }
    Ok(s.to_string())
}

pub fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    Ok(parse_input_date(s)?)
}

pub fn parse_time(s: &str) -> Result<NaiveTime, CommandError> {
    Ok(parse_input_time(s)?)
}

pub fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime, CommandError> {
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::task::{DATE_CONSTRAINTS, TIME_CONSTRAINTS};

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1").unwrap(), Index::from_zero_based(0));
        assert_eq!(parse_index("  12 ").unwrap(), Index::from_zero_based(11));
        for bad in ["0", "-1", "+1", "1 2", "abc", "", "99999999999999999999999"] {
            assert_eq!(
                parse_index(bad),
                Err(CommandError::Parse(MESSAGE_INVALID_INDEX.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_split_first_token() {
        assert_eq!(split_first_token("  add contact n/A "), ("add", "contact n/A "));
        assert_eq!(split_first_token("help"), ("help", ""));
        assert_eq!(split_first_token(""), ("", ""));
    }

    #[test]
    fn test_tags_for_edit() {
        assert_eq!(parse_tags_for_edit(&[]).unwrap(), None);
        assert_eq!(parse_tags_for_edit(&["".to_string()]).unwrap(), Some(BTreeSet::new()));
        let tags = parse_tags_for_edit(&["a".to_string(), "b".to_string()]).unwrap().unwrap();
        assert_eq!(tags.len(), 2);
        assert!(parse_tags_for_edit(&["a".to_string(), "".to_string()]).is_err());
    }

    #[test]
    fn test_constraint_messages_surface() {
        assert_eq!(
            parse_phone("12"),
            Err(CommandError::Parse(Phone::MESSAGE_CONSTRAINTS.to_string()))
        );
        assert_eq!(
            parse_date("2025-01-01"),
            Err(CommandError::Parse(DATE_CONSTRAINTS.to_string()))
        );
        assert_eq!(parse_time("930"), Err(CommandError::Parse(TIME_CONSTRAINTS.to_string())));
        assert_eq!(
            parse_description("   "),
            Err(CommandError::Parse(DESCRIPTION_CONSTRAINTS.to_string()))
        );
    }

    #[test]
    fn test_invalid_format_message() {
        match invalid_format("done: usage") {
            CommandError::Parse(msg) => assert_eq!(msg, "Invalid command format! \ndone: usage"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
