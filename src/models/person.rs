use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{Address, Email, Name, Phone, Tag};

/// A contact in the address book.
///
/// Every field is a validated value object, so a `Person` can only hold
/// well-formed data. `PartialEq` compares all fields; use
/// [`Person::is_same_person`] for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Identity check: name, phone and email match. Address and tags are ignored.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }

    /// True if any whole word of the name equals one of `keywords`, ignoring case.
    pub fn name_matches_any(&self, keywords: &[String]) -> bool {
        let words: Vec<String> = self
            .name
            .as_str()
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
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse(email).unwrap(),
            Address::parse(address).unwrap(),
            tags.iter().map(|t| Tag::parse(t).unwrap()).collect(),
        )
    }

    #[test]
    fn test_same_person_ignores_address_and_tags() {
        let alice = person("Alice", "123", "a@b.com", "Street", &["x"]);
        let moved = person("Alice", "123", "a@b.com", "Avenue", &["y", "z"]);
        assert!(alice.is_same_person(&moved));
        assert_ne!(alice, moved);
    }

    #[test]
    fn test_different_identity() {
        let alice = person("Alice", "123", "a@b.com", "Street", &[]);
        assert!(!alice.is_same_person(&person("Alice", "456", "a@b.com", "Street", &[])));
        assert!(!alice.is_same_person(&person("Alicia", "123", "a@b.com", "Street", &[])));
        assert!(!alice.is_same_person(&person("Alice", "123", "c@b.com", "Street", &[])));
    }

    #[test]
    fn test_name_matches_any() {
        let alice = person("Alice Pauline", "123", "a@b.com", "Street", &[]);
        assert!(alice.name_matches_any(&["pauline".to_string()]));
        assert!(alice.name_matches_any(&["bob".to_string(), "ALICE".to_string()]));
        assert!(!alice.name_matches_any(&["Ali".to_string()]));
        assert!(!alice.name_matches_any(&[]));
    }

    #[test]
    fn test_display() {
        let alice = person("Alice", "123", "a@b.com", "Street", &["y", "x"]);
        assert_eq!(
            alice.to_string(),
            "Alice; Phone: 123; Email: a@b.com; Address: Street; Tags: [x][y]"
        );
    }
}
