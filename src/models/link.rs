use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConstraintError;

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?|ftp|file)://[-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[-a-zA-Z0-9+&@#/%=~_|]$")
        .expect("link pattern compiles")
});

/// A URL attached to a task, e.g. a meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Link(String);

impl Link {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Link should only contain url";

    pub fn parse(s: &str) -> Result<Self, ConstraintError> {
        let trimmed = s.trim();
        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ConstraintError::new(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn is_valid(s: &str) -> bool {
        LINK_PATTERN.is_match(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Link {
    type Error = ConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Link> for String {
    fn from(link: Link) -> Self {
        link.0
    }
}

/// A labelled link to a shared workspace (drive folder, doc, board).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CollaborativeLinkRecord")]
pub struct CollaborativeLink {
    label: String,
    link: Link,
}

#[derive(Deserialize)]
struct CollaborativeLinkRecord {
    label: String,
    link: Link,
}

impl CollaborativeLink {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Collaborative link labels should not be blank";

    pub fn new(label: &str, link: Link) -> Result<Self, ConstraintError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ConstraintError::new(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self {
            label: label.to_string(),
            link,
        })
    }

    pub fn parse(label: &str, url: &str) -> Result<Self, ConstraintError> {
        Self::new(label, Link::parse(url)?)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

impl TryFrom<CollaborativeLinkRecord> for CollaborativeLink {
    type Error = ConstraintError;

    fn try_from(record: CollaborativeLinkRecord) -> Result<Self, Self::Error> {
        Self::new(&record.label, record.link)
    }
}

impl fmt::Display for CollaborativeLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_validation() {
        assert!(Link::parse("https://example.com/path").is_ok());
        assert!(Link::parse("http://zoom.us/j/123?pwd=abc").is_ok());
        assert!(Link::parse("ftp://files.example.org/pub").is_ok());
        assert!(Link::parse("file:///home/me/notes.txt").is_ok());
        assert!(Link::parse("not-a-url").is_err());
        assert!(Link::parse("https://").is_err());
        assert!(Link::parse("mailto:a@b.com").is_err());
        assert!(Link::parse("https://example.com/with space").is_err());
    }

    #[test]
    fn test_collaborative_link() {
        let link = CollaborativeLink::parse("Google Meet", "https://www.google.com").unwrap();
        assert_eq!(link.label(), "Google Meet");
        assert_eq!(link.link().as_str(), "https://www.google.com");
        assert_eq!(link.to_string(), "Google Meet: https://www.google.com");

        assert!(CollaborativeLink::parse("  ", "https://www.google.com").is_err());
        assert!(CollaborativeLink::parse("Zoom", "zoom").is_err());
    }

    #[test]
    fn test_collaborative_link_equality() {
        let google = CollaborativeLink::parse("Google Meet", "https://www.google.com").unwrap();
        let zoom = CollaborativeLink::parse("Zoom Meeting", "https://www.zoom.com").unwrap();
        assert_eq!(google, google.clone());
        assert_ne!(google, zoom);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Link, _> = serde_json::from_str("\"https://example.com\"");
        assert!(ok.is_ok());
        let bad: Result<Link, _> = serde_json::from_str("\"example\"");
        assert!(bad.is_err());
    }
}
