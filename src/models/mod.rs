//! Domain types: self-validating value objects plus the two entities.

mod address;
mod email;
mod link;
mod name;
mod person;
mod phone;
mod tag;
pub mod task;

pub use address::Address;
pub use email::Email;
pub use link::{CollaborativeLink, Link};
pub use name::Name;
pub use person::Person;
pub use phone::Phone;
pub use tag::Tag;
pub use task::{Task, TaskKind};
