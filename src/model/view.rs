//! Filters and orderings that shape the displayed lists.
//!
//! They are plain data so that commands installing them stay comparable.

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::models::{Person, Tag, Task};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Any whole name word matches a keyword, case-insensitive
    NameKeywords(Vec<String>),
    /// Carries at least one of the tags
    Tags(Vec<Tag>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(keywords) => person.name_matches_any(keywords),
            Self::Tags(tags) => person.has_any_tag(tags),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    DescriptionKeywords(Vec<String>),
    Tags(Vec<Tag>),
    /// Due strictly before the instant
    DueBefore(NaiveDateTime),
    /// Todo deadline equals the instant, or the instant lies within an event
    DueAt(NaiveDateTime),
    /// Todo deadline on the day, or the day lies within an event
    DueOn(NaiveDate),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::DescriptionKeywords(keywords) => task.description_matches_any(keywords),
            Self::Tags(tags) => task.has_any_tag(tags),
            Self::DueBefore(moment) => task.due() < *moment,
            Self::DueAt(moment) => task.is_due_at(*moment),
            Self::DueOn(day) => task.is_due_on(*day),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersonOrder {
    /// Order of insertion
    #[default]
    Insertion,
    /// Case-insensitive by name
    Name,
}

impl PersonOrder {
    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        match self {
            Self::Insertion => Ordering::Equal,
            Self::Name => a
                .name
                .as_str()
                .to_lowercase()
                .cmp(&b.name.as_str().to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskOrder {
    #[default]
    Insertion,
    /// Earliest due first (todo deadline, event start)
    Due,
}

impl TaskOrder {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Insertion => Ordering::Equal,
            Self::Due => a.due().cmp(&b.due()),
        }
    }
}
