mod friendship;
pub mod policy;
mod reminder;
mod shared;
mod user;

pub use friendship::Friendship;
pub use reminder::{Reminder, ReminderPatch, ReminderStatus, Severity};
pub use shared::entity::{Entity, ID};
pub use user::User;
