//! Authorization rules for reminders. Pure decision functions with no
//! side effects; the reminder use cases feed them the relevant state
//! and translate a `false` into the proper request failure.

use crate::reminder::Reminder;
use crate::shared::entity::ID;

/// The mutable fields of a `Reminder`, used to select the field-level
/// permission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderField {
    Title,
    Description,
    DueDate,
    Severity,
    Status,
}

/// A reminder may be created when the actor and recipient are friends.
/// The creator may always target themself: the friend graph forbids
/// self-edges, so without this carve-out self-reminders would be
/// unreachable.
pub fn can_create_reminder(actor_id: &ID, recipient_id: &ID, are_friends: bool) -> bool {
    actor_id == recipient_id || are_friends
}

/// `Status` belongs to the recipient, every other field to the creator.
pub fn can_mutate_field(actor_id: &ID, reminder: &Reminder, field: ReminderField) -> bool {
    match field {
        ReminderField::Status => *actor_id == reminder.recipient_id,
        _ => *actor_id == reminder.creator_id,
    }
}

pub fn can_delete(actor_id: &ID, reminder: &Reminder) -> bool {
    *actor_id == reminder.creator_id
}

pub fn can_view(actor_id: &ID, reminder: &Reminder) -> bool {
    *actor_id == reminder.creator_id || *actor_id == reminder.recipient_id
}
