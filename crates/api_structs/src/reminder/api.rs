use crate::dtos::ReminderDTO;
use chrono::{DateTime, Utc};
use remind_anyone_domain::{ReminderPatch, ReminderStatus, Severity, ID};
use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes a field that was explicitly set to `null` from one
/// that was left out of the payload entirely: an absent field stays
/// `None` via `#[serde(default)]`, a present one (null included)
/// becomes `Some(..)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
        pub due_date: DateTime<Utc>,
        #[serde(default)]
        pub severity: Option<Severity>,
        pub recipient_id: ID,
    }

    pub type APIResponse = ReminderDTO;
}

pub mod list_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;
}

pub mod update_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Default, Deserialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default, deserialize_with = "double_option")]
        pub description: Option<Option<String>>,
        #[serde(default)]
        pub due_date: Option<DateTime<Utc>>,
        #[serde(default)]
        pub severity: Option<Severity>,
        #[serde(default)]
        pub status: Option<ReminderStatus>,
    }

    impl From<RequestBody> for ReminderPatch {
        fn from(body: RequestBody) -> Self {
            Self {
                title: body.title,
                description: body.description,
                due_date: body.due_date,
                severity: body.severity,
                status: body.status,
            }
        }
    }

    pub type APIResponse = ReminderDTO;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub reminder_id: ID,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct APIResponse {
        pub ok: bool,
    }
}
