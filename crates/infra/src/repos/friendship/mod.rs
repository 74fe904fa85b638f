mod inmemory;
mod postgres;

pub use inmemory::InMemoryFriendshipRepo;
pub use postgres::PostgresFriendshipRepo;
use remind_anyone_domain::{Friendship, ID};

#[async_trait::async_trait]
pub trait IFriendshipRepo: Send + Sync {
    /// Inserts both directional edges as one atomic unit. When either
    /// edge collides with an existing one the whole operation fails
    /// and no edge is left behind.
    async fn insert_pair(&self, edge: &Friendship, mirror: &Friendship) -> anyhow::Result<()>;
    /// Existence check on the (owner -> friend) direction only.
    async fn exists(&self, owner_id: &ID, friend_id: &ID) -> bool;
    async fn find_friends_of(&self, owner_id: &ID) -> Vec<ID>;
}
