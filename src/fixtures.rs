//! Builders shared by unit tests.

use chrono::NaiveDateTime;

use crate::model::{Model, ModelManager};
use crate::models::task::{parse_input_date, parse_input_time};
use crate::models::{Address, Email, Name, Person, Phone, Tag, Task};

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    parse_input_date(date).unwrap().and_time(parse_input_time(time).unwrap())
}

pub fn person(name: &str, phone: &str, email: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::parse("123, Jurong West Ave 6").unwrap(),
        tags.iter().map(|t| Tag::parse(t).unwrap()).collect(),
    )
}

pub fn alice() -> Person {
    person("Alice Pauline", "94351253", "alice@example.com", &["friends"])
}

pub fn benson() -> Person {
    person("Benson Meier", "98765432", "johnd@example.com", &["owesMoney", "friends"])
}

pub fn carl() -> Person {
    person("Carl Kurz", "95352563", "heinz@example.com", &[])
}

pub fn todo(description: &str, date: &str, time: &str) -> Task {
    Task::todo(description, at(date, time)).unwrap()
}

pub fn event(description: &str, start: (&str, &str), end: (&str, &str)) -> Task {
    Task::event(description, at(start.0, start.1), at(end.0, end.1)).unwrap()
}

/// Three contacts and three tasks.
pub fn typical_model() -> ModelManager {
    let mut model = ModelManager::new();
    model.add_person(alice());
    model.add_person(benson());
    model.add_person(carl());
    model.add_todo(todo("Chores", "05-01-2025", "1200"));
    model.add_todo(todo("Submit report", "01-01-2025", "1800"));
    model.add_event(event("Team meeting", ("03-01-2025", "0900"), ("03-01-2025", "1000")));
    model
}
