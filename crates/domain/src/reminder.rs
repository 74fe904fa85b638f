use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Priority classification of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

/// Lifecycle marker of a reminder. Deliberately an open two-variant
/// value rather than a guarded transition graph: toggling back from
/// `Completed` to `Created` is allowed. The field-level permission
/// rules live in `policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReminderStatus {
    #[default]
    Created,
    Completed,
}

#[derive(Error, Debug)]
#[error("Invalid severity: {0}")]
pub struct InvalidSeverityError(String);

impl FromStr for Severity {
    type Err = InvalidSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(InvalidSeverityError(s.to_string())),
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
#[error("Invalid reminder status: {0}")]
pub struct InvalidReminderStatusError(String);

impl FromStr for ReminderStatus {
    type Err = InvalidReminderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(Self::Created),
            "Completed" => Ok(Self::Completed),
            _ => Err(InvalidReminderStatusError(s.to_string())),
        }
    }
}

impl Display for ReminderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Created => "Created",
            Self::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

/// A time-bound reminder sent from one user to another (or to self).
#[derive(Debug, Clone)]
pub struct Reminder {
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

impl Entity<ID> for Reminder {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// Partial update of a `Reminder`. Every field is optional so that
/// "not supplied" leaves the stored value untouched. `description` is
/// doubly optional to keep "not supplied" distinct from "explicitly
/// cleared".
#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<DateTime<Utc>>,
    pub severity: Option<Severity>,
    pub status: Option<ReminderStatus>,
}

impl ReminderPatch {
    /// Whether the patch carries any field other than `status`.
    pub fn touches_details(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.due_date.is_some()
            || self.severity.is_some()
    }
}

impl Reminder {
    /// Applies all supplied patch fields verbatim, leaving absent
    /// fields untouched.
    pub fn apply(&mut self, patch: &ReminderPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
