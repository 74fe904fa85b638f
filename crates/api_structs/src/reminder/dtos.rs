use chrono::{DateTime, Utc};
use remind_anyone_domain::{Reminder, ReminderStatus, Severity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReminderDTO {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DateTime<Utc>,
    pub severity: Severity,
    pub status: ReminderStatus,
    pub creator_id: ID,
    pub recipient_id: ID,
    pub created_at: DateTime<Utc>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            title: reminder.title,
            description: reminder.description,
            due_date: reminder.due_date,
            severity: reminder.severity,
            status: reminder.status,
            creator_id: reminder.creator_id,
            recipient_id: reminder.recipient_id,
            created_at: reminder.created_at,
        }
    }
}
