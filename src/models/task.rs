use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{CollaborativeLink, Link, Tag};
use crate::error::ConstraintError;

/// Accepted date input, e.g. `01-01-2025`
pub const INPUT_DATE_FORMAT: &str = "%d-%m-%Y";
/// Accepted time input, e.g. `1800`
pub const INPUT_TIME_FORMAT: &str = "%H%M";
/// Displayed date-time, e.g. `Jan 1 2025 1800`
pub const OUTPUT_DATE_TIME_FORMAT: &str = "%b %-d %Y %H%M";
// chrono accepts unpadded days for %d when parsing
const OUTPUT_PARSE_FORMAT: &str = "%b %d %Y %H%M";

pub const DESCRIPTION_CONSTRAINTS: &str = "Description should not be blank";
pub const EVENT_ORDER_CONSTRAINTS: &str = "The end of an event cannot be before its start";
pub const DATE_CONSTRAINTS: &str = "Dates should be in the format DD-MM-YYYY, e.g. 01-01-2025";
pub const TIME_CONSTRAINTS: &str = "Times should be in the 24-hour format HHMM, e.g. 1800";

/// Variant-specific part of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    Todo { deadline: NaiveDateTime },
    Event { start: NaiveDateTime, end: NaiveDateTime },
}

impl TaskKind {
    fn check(&self) -> Result<(), ConstraintError> {
        match self {
            Self::Event { start, end } if end < start => {
                Err(ConstraintError::new(EVENT_ORDER_CONSTRAINTS))
            }
            _ => Ok(()),
        }
    }
}

/// A todo or an event.
///
/// Fields are private so that the description and event ordering
/// invariants hold for every constructed value, including deserialized ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    description: String,
    done: bool,
    /// Meeting or reference URL
    link: Option<Link>,
    /// Shared workspace link
    collaborative_link: Option<CollaborativeLink>,
    tags: BTreeSet<Tag>,
    kind: TaskKind,
}

#[derive(Deserialize)]
struct TaskRecord {
    description: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    link: Option<Link>,
    #[serde(default)]
    collaborative_link: Option<CollaborativeLink>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    kind: TaskKind,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ConstraintError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::new(&record.description, record.kind)?;
        task.done = record.done;
        task.link = record.link;
        task.collaborative_link = record.collaborative_link;
        task.tags = record.tags;
        Ok(task)
    }
}

impl Task {
    pub fn new(description: &str, kind: TaskKind) -> Result<Self, ConstraintError> {
        let description = check_description(description)?;
        kind.check()?;
        Ok(Self {
            description,
            done: false,
            link: None,
            collaborative_link: None,
            tags: BTreeSet::new(),
            kind,
        })
    }

    pub fn todo(description: &str, deadline: NaiveDateTime) -> Result<Self, ConstraintError> {
        Self::new(description, TaskKind::Todo { deadline })
    }

    /// Fails if `end` is before `start`.
    pub fn event(description: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ConstraintError> {
        Self::new(description, TaskKind::Event { start, end })
    }

    pub fn with_link(mut self, link: Option<Link>) -> Self {
        self.link = link;
        self
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    pub fn collaborative_link(&self) -> Option<&CollaborativeLink> {
        self.collaborative_link.as_ref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_todo(&self) -> bool {
        matches!(self.kind, TaskKind::Todo { .. })
    }

    pub fn is_event(&self) -> bool {
        matches!(self.kind, TaskKind::Event { .. })
    }

    /// Deadline of a todo, start of an event.
    pub fn due(&self) -> NaiveDateTime {
        match self.kind {
            TaskKind::Todo { deadline } => deadline,
            TaskKind::Event { start, .. } => start,
        }
    }

    /// Todo: the deadline instant. Event: any instant within its span.
    pub fn is_due_at(&self, moment: NaiveDateTime) -> bool {
        match self.kind {
            TaskKind::Todo { deadline } => deadline == moment,
            TaskKind::Event { start, end } => start <= moment && moment <= end,
        }
    }

    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        match self.kind {
            TaskKind::Todo { deadline } => deadline.date() == day,
            TaskKind::Event { start, end } => start.date() <= day && day <= end.date(),
        }
    }

    /// Identity check used for duplicate detection: description and completion flag.
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.description == other.description && self.done == other.done
    }

    pub fn description_matches_any(&self, keywords: &[String]) -> bool {
        let words: Vec<String> = self
            .description
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        keywords
            .iter()
            .any(|k| words.iter().any(|w| *w == k.to_lowercase()))
    }

    pub fn has_any_tag(&self, tags: &[Tag]) -> bool {
        tags.iter().any(|t| self.tags.contains(t))
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), ConstraintError> {
        self.description = check_description(description)?;
        Ok(())
    }

    /// Replaces the variant data. Event ordering is checked before anything changes.
    pub fn set_kind(&mut self, kind: TaskKind) -> Result<(), ConstraintError> {
        kind.check()?;
        self.kind = kind;
        Ok(())
    }

    pub fn set_link(&mut self, link: Option<Link>) {
        self.link = link;
    }

    pub fn set_collaborative_link(&mut self, link: Option<CollaborativeLink>) {
        self.collaborative_link = link;
    }

    pub fn set_tags(&mut self, tags: BTreeSet<Tag>) {
        self.tags = tags;
    }

    /// Moves a todo's deadline. Returns false for events, which keep their span.
    pub fn snooze(&mut self, new_deadline: NaiveDateTime) -> bool {
        match &mut self.kind {
            TaskKind::Todo { deadline } => {
                *deadline = new_deadline;
                true
            }
            TaskKind::Event { .. } => false,
        }
    }

    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "\u{2713}"
        } else {
            "\u{2718}"
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self.kind {
            TaskKind::Todo { .. } => "Todo",
            TaskKind::Event { .. } => "Event",
        }
    }

    /// `Jan 1 2025 1800` for a todo, `Jan 1 2025 1800 - Jan 1 2025 2000` for an event.
    pub fn deadline_to_string(&self) -> String {
        match self.kind {
            TaskKind::Todo { deadline } => format_date_time(deadline),
            TaskKind::Event { start, end } => {
                format!("{} - {}", format_date_time(start), format_date_time(end))
            }
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status_icon(), self.description)?;
        match self.kind {
            TaskKind::Todo { deadline } => write!(f, " (by: {})", format_date_time(deadline)),
            TaskKind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                format_date_time(start),
                format_date_time(end)
            ),
        }
    }
}

fn check_description(description: &str) -> Result<String, ConstraintError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        Err(ConstraintError::new(DESCRIPTION_CONSTRAINTS))
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(OUTPUT_DATE_TIME_FORMAT).to_string()
}

/// Inverse of [`format_date_time`].
pub fn parse_output_date_time(s: &str) -> Result<NaiveDateTime, ConstraintError> {
    NaiveDateTime::parse_from_str(s.trim(), OUTPUT_PARSE_FORMAT)
        .map_err(|_| ConstraintError::new(DATE_CONSTRAINTS))
}

pub fn parse_input_date(s: &str) -> Result<NaiveDate, ConstraintError> {
    NaiveDate::parse_from_str(s.trim(), INPUT_DATE_FORMAT).map_err(|_| ConstraintError::new(DATE_CONSTRAINTS))
}

pub fn parse_input_time(s: &str) -> Result<NaiveTime, ConstraintError> {
    let s = s.trim();
    if s.len() != 4 || !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConstraintError::new(TIME_CONSTRAINTS));
    }
    NaiveTime::parse_from_str(s, INPUT_TIME_FORMAT).map_err(|_| ConstraintError::new(TIME_CONSTRAINTS))
}
