//! Live contact and task lists plus the displayed views over them.
//!
//! Commands only see the [`Model`] trait. [`ModelManager`] is the in-memory
//! implementation used by the application and the tests.

use chrono::{Duration, Local, NaiveDateTime};
use tracing::{info, warn};

use crate::models::{Person, Task};

mod view;

pub use view::{PersonFilter, PersonOrder, TaskFilter, TaskOrder};

pub const DEFAULT_DUE_SOON_DAYS: i64 = 7;
pub const MAX_DUE_SOON_DAYS: i64 = 3650;

/// State the commands read and mutate.
///
/// Displayed lists are snapshots: filter applied first, then the ordering.
/// Indices typed by the user refer to these snapshots.
pub trait Model {
    fn add_person(&mut self, person: Person);
    fn has_person(&self, person: &Person) -> bool;
    fn delete_person(&mut self, target: &Person);
    /// Replaces `target` with `edited` at the same position.
    fn set_person(&mut self, target: &Person, edited: Person);
    fn clear_persons(&mut self);
    fn filtered_person_list(&self) -> Vec<Person>;

    fn add_todo(&mut self, todo: Task);
    fn add_event(&mut self, event: Task);
    fn has_task(&self, task: &Task) -> bool;
    fn delete_task(&mut self, target: &Task);
    fn set_task(&mut self, target: &Task, edited: Task);
    fn filtered_task_list(&self) -> Vec<Task>;
    /// Incomplete tasks due within the due-soon window, earliest first.
    fn due_soon_task_list(&self) -> Vec<Task>;

    fn update_filtered_person_list(&mut self, filter: PersonFilter);
    fn update_filtered_task_list(&mut self, filter: TaskFilter);
    fn update_sorted_person_list(&mut self, order: PersonOrder);
    fn update_sorted_task_list(&mut self, order: TaskOrder);
}

#[derive(Debug, Clone)]
pub struct ModelManager {
    persons: Vec<Person>,
    tasks: Vec<Task>,
    person_filter: PersonFilter,
    task_filter: TaskFilter,
    person_order: PersonOrder,
    task_order: TaskOrder,
    /// `None` when the window does not fit in a date; every future task is then due soon.
    due_soon_window: Option<Duration>,
}

impl ModelManager {
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
            tasks: Vec::new(),
            person_filter: PersonFilter::All,
            task_filter: TaskFilter::All,
            person_order: PersonOrder::Insertion,
            task_order: TaskOrder::Insertion,
            due_soon_window: Duration::try_days(DEFAULT_DUE_SOON_DAYS),
        }
    }

    pub fn with_data(persons: Vec<Person>, tasks: Vec<Task>) -> Self {
        let mut model = Self::new();
        model.reset_data(persons, tasks);
        model
    }

    pub fn with_due_soon_days(mut self, days: i64) -> Self {
        self.due_soon_window = Duration::try_days(days);
        self
    }

    /// Replaces both lists wholesale, e.g. after loading a snapshot.
    pub fn reset_data(&mut self, persons: Vec<Person>, tasks: Vec<Task>) {
        info!(persons = persons.len(), tasks = tasks.len(), "model data replaced");
        self.persons = persons;
        self.tasks = tasks;
    }

    /// Full contact list, ignoring the displayed view.
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Full task list, ignoring the displayed view.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn due_soon_task_list_at(&self, now: NaiveDateTime) -> Vec<Task> {
        let horizon = self.due_soon_window.and_then(|window| now.checked_add_signed(window));
        let mut due: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| !t.is_done() && t.due() >= now)
            .filter(|t| horizon.map_or(true, |h| t.due() <= h))
            .cloned()
            .collect();
        due.sort_by_key(|t| t.due());
        due
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for ModelManager {
    fn add_person(&mut self, person: Person) {
        info!(name = %person.name, "contact added");
        self.persons.push(person);
    }

    fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    fn delete_person(&mut self, target: &Person) {
        match self.persons.iter().position(|p| p == target) {
            Some(pos) => {
                self.persons.remove(pos);
                info!(name = %target.name, "contact deleted");
            }
            None => warn!(name = %target.name, "contact to delete not found"),
        }
    }

    fn set_person(&mut self, target: &Person, edited: Person) {
        match self.persons.iter().position(|p| p == target) {
            Some(pos) => {
                info!(name = %edited.name, "contact updated");
                self.persons[pos] = edited;
            }
            None => warn!(name = %target.name, "contact to update not found"),
        }
    }

    fn clear_persons(&mut self) {
        info!(count = self.persons.len(), "contacts cleared");
        self.persons.clear();
    }

    fn filtered_person_list(&self) -> Vec<Person> {
        let mut shown: Vec<Person> = self
            .persons
            .iter()
            .filter(|p| self.person_filter.matches(p))
            .cloned()
            .collect();
        shown.sort_by(|a, b| self.person_order.compare(a, b));
        shown
    }

    fn add_todo(&mut self, todo: Task) {
        debug_assert!(todo.is_todo());
        info!(description = todo.description(), "todo added");
        self.tasks.push(todo);
    }

    fn add_event(&mut self, event: Task) {
        debug_assert!(event.is_event());
        info!(description = event.description(), "event added");
        self.tasks.push(event);
    }

    fn has_task(&self, task: &Task) -> bool {
        self.tasks.iter().any(|t| t.is_same_task(task))
    }

    fn delete_task(&mut self, target: &Task) {
        match self.tasks.iter().position(|t| t == target) {
            Some(pos) => {
                self.tasks.remove(pos);
                info!(description = target.description(), "task deleted");
            }
            None => warn!(description = target.description(), "task to delete not found"),
        }
    }

    fn set_task(&mut self, target: &Task, edited: Task) {
        match self.tasks.iter().position(|t| t == target) {
            Some(pos) => {
                info!(description = edited.description(), "task updated");
                self.tasks[pos] = edited;
            }
            None => warn!(description = target.description(), "task to update not found"),
        }
    }

    fn filtered_task_list(&self) -> Vec<Task> {
        let mut shown: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| self.task_filter.matches(t))
            .cloned()
            .collect();
        shown.sort_by(|a, b| self.task_order.compare(a, b));
        shown
    }

    fn due_soon_task_list(&self) -> Vec<Task> {
        self.due_soon_task_list_at(Local::now().naive_local())
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        self.person_filter = filter;
    }

    fn update_filtered_task_list(&mut self, filter: TaskFilter) {
        self.task_filter = filter;
    }

    fn update_sorted_person_list(&mut self, order: PersonOrder) {
        self.person_order = order;
    }

    fn update_sorted_task_list(&mut self, order: TaskOrder) {
        self.task_order = order;
    }
}
