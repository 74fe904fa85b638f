mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use remind_anyone_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// Fails when the email or username collides with an existing user.
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_many(&self, user_ids: &[ID]) -> Vec<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
    /// Matches either the email or the username field; first match wins.
    async fn find_by_email_or_username(&self, term: &str) -> Option<User>;
}
