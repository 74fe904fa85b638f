use super::IUserRepo;
use crate::repos::shared::inmemory_repo::*;
use remind_anyone_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        // Same uniqueness rules that the postgres schema enforces.
        // Check and push inside one critical section so concurrent
        // inserts cannot both pass the check.
        let mut users = self.users.lock().unwrap();
        let collision = users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username);
        if collision {
            anyhow::bail!("User with that email or username already exists");
        }
        users.push(user.clone());
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        save(user, &self.users);
        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        find(user_id, &self.users)
    }

    async fn find_many(&self, user_ids: &[ID]) -> Vec<User> {
        find_by(&self.users, |u: &User| user_ids.contains(&u.id))
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        find_by(&self.users, |u: &User| u.email == email)
            .into_iter()
            .next()
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        find_by(&self.users, |u: &User| u.username == username)
            .into_iter()
            .next()
    }

    async fn find_by_email_or_username(&self, term: &str) -> Option<User> {
        find_by(&self.users, |u: &User| u.email == term || u.username == term)
            .into_iter()
            .next()
    }
}
