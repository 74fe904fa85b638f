use super::IReminderRepo;
use chrono::{DateTime, Utc};
use remind_anyone_domain::{Reminder, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_uid: Uuid,
    title: String,
    description: Option<String>,
    due_date: DateTime<Utc>,
    severity: String,
    status: String,
    creator_uid: Uuid,
    recipient_uid: Uuid,
    created_at: DateTime<Utc>,
}

impl From<ReminderRaw> for Reminder {
    fn from(raw: ReminderRaw) -> Self {
        Self {
            id: raw.reminder_uid.into(),
            title: raw.title,
            description: raw.description,
            due_date: raw.due_date,
            severity: raw.severity.parse().unwrap_or_default(),
            status: raw.status.parse().unwrap_or_default(),
            creator_id: raw.creator_uid.into(),
            recipient_id: raw.recipient_uid.into(),
            created_at: raw.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders
            (reminder_uid, title, description, due_date, severity, status, creator_uid, recipient_uid, created_at)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.due_date)
        .bind(reminder.severity.to_string())
        .bind(reminder.status.to_string())
        .bind(reminder.creator_id.inner_ref())
        .bind(reminder.recipient_id.inner_ref())
        .bind(reminder.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET title = $2,
            description = $3,
            due_date = $4,
            severity = $5,
            status = $6
            WHERE reminder_uid = $1
            "#,
        )
        .bind(reminder.id.inner_ref())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.due_date)
        .bind(reminder.severity.to_string())
        .bind(reminder.status.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.reminder_uid = $1
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(Reminder::from)
    }

    async fn find_for_user(&self, user_id: &ID) -> Vec<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            SELECT * FROM reminders AS r
            WHERE r.creator_uid = $1 OR r.recipient_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(Reminder::from)
        .collect()
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        sqlx::query_as::<_, ReminderRaw>(
            r#"
            DELETE FROM reminders AS r
            WHERE r.reminder_uid = $1
            RETURNING *
            "#,
        )
        .bind(reminder_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(Reminder::from)
    }
}
