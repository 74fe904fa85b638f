use super::IFriendshipRepo;
use remind_anyone_domain::{Friendship, ID};
use std::sync::Mutex;

pub struct InMemoryFriendshipRepo {
    friendships: Mutex<Vec<Friendship>>,
}

impl InMemoryFriendshipRepo {
    pub fn new() -> Self {
        Self {
            friendships: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IFriendshipRepo for InMemoryFriendshipRepo {
    async fn insert_pair(&self, edge: &Friendship, mirror: &Friendship) -> anyhow::Result<()> {
        // Single critical section so the pair is all-or-nothing
        let mut friendships = self.friendships.lock().unwrap();
        let collision = friendships.iter().any(|f| {
            (f.user_id == edge.user_id && f.friend_id == edge.friend_id)
                || (f.user_id == mirror.user_id && f.friend_id == mirror.friend_id)
        });
        if collision {
            anyhow::bail!("Friendship edge already exists");
        }
        friendships.push(edge.clone());
        friendships.push(mirror.clone());
        Ok(())
    }

    async fn exists(&self, owner_id: &ID, friend_id: &ID) -> bool {
        let friendships = self.friendships.lock().unwrap();
        friendships
            .iter()
            .any(|f| f.user_id == *owner_id && f.friend_id == *friend_id)
    }

    async fn find_friends_of(&self, owner_id: &ID) -> Vec<ID> {
        let friendships = self.friendships.lock().unwrap();
        friendships
            .iter()
            .filter(|f| f.user_id == *owner_id)
            .map(|f| f.friend_id.clone())
            .collect()
    }
}
