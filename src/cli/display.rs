//! Plain-text rendering of the displayed lists.

use crate::models::{Person, Task};

/// Name line followed by indented detail lines.
pub fn format_person(number: usize, person: &Person) -> String {
    let mut out = format!("{}. {}", number, person.name);
    if !person.tags.is_empty() {
        let tags = person.tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");
        out.push(' ');
        out.push_str(&tags);
    }
    out.push_str(&format!("\n   {}", person.phone));
    out.push_str(&format!("\n   {}", person.email));
    out.push_str(&format!("\n   {}", person.address));
    out
}

pub fn format_task(number: usize, task: &Task) -> String {
    let mut out = format!(
        "{}. [{}] {} ({}) Status: {}",
        number,
        task.type_label(),
        task.description(),
        task.deadline_to_string(),
        task.status_icon()
    );
    if let Some(link) = task.link() {
        out.push_str(&format!("\n   link: {}", link));
    }
    if let Some(collab) = task.collaborative_link() {
        out.push_str(&format!("\n   {}", collab));
    }
    if !task.tags().is_empty() {
        let tags = task.tags().iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");
        out.push_str(&format!("\n   {}", tags));
    }
    out
}

pub fn print_persons(persons: &[Person]) {
    if persons.is_empty() {
        println!("No contacts.");
        return;
    }
    for (i, person) in persons.iter().enumerate() {
        println!("{}", format_person(i + 1, person));
    }
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for (i, task) in tasks.iter().enumerate() {
        println!("{}", format_task(i + 1, task));
    }
}

/// Reminder shown when a session starts. Nothing is printed if no task is due soon.
pub fn print_due_soon(tasks: &[Task], days: i64) {
    if tasks.is_empty() {
        return;
    }
    println!("Due in the next {} days:", days);
    for task in tasks {
        println!("  {}", task);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alice, event, todo};
    use crate::models::{Link, Tag};

    #[test]
    fn test_format_person() {
        let text = format_person(1, &alice());
        assert_eq!(
            text,
            "1. Alice Pauline [friends]\n   94351253\n   alice@example.com\n   123, Jurong West Ave 6"
        );
    }

    #[test]
    fn test_format_person_separates_tags() {
        let mut person = alice();
        person.tags.insert(Tag::parse("colleague").unwrap());
        let text = format_person(1, &person);
        assert!(text.starts_with("1. Alice Pauline [colleague] [friends]\n"));
    }

    #[test]
    fn test_format_todo() {
        let task = todo("Submit report", "01-01-2025", "1800");
        assert_eq!(
            format_task(2, &task),
            "2. [Todo] Submit report (Jan 1 2025 1800) Status: \u{2718}"
        );
    }

    #[test]
    fn test_format_event_with_link() {
        let task = event("Team meeting", ("03-01-2025", "0900"), ("03-01-2025", "1000"))
            .with_link(Some(Link::parse("https://zoom.us/j/1").unwrap()));
        let text = format_task(1, &task);
        assert!(text.starts_with("1. [Event] Team meeting (Jan 3 2025 0900 - Jan 3 2025 1000)"));
        assert!(text.ends_with("link: https://zoom.us/j/1"));
    }
}
