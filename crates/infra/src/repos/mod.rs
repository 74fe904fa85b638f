mod friendship;
mod reminder;
mod shared;
mod user;

use friendship::{IFriendshipRepo, InMemoryFriendshipRepo, PostgresFriendshipRepo};
use reminder::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub friendships: Arc<dyn IFriendshipRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self {
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            friendships: Arc::new(PostgresFriendshipRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            friendships: Arc::new(InMemoryFriendshipRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
