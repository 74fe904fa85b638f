use crate::shared::entity::ID;
use chrono::{DateTime, Utc};

/// A directed is-friend-of edge. Edges are only ever created in
/// symmetric pairs, so if (A -> B) exists then (B -> A) exists as
/// well. The pair (user_id, friend_id) is unique and user_id may
/// never equal friend_id.
#[derive(Debug, Clone)]
pub struct Friendship {
    pub user_id: ID,
    pub friend_id: ID,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Both directional edges for a new friendship, sharing one
    /// creation timestamp.
    pub fn symmetric_pair(a: ID, b: ID, created_at: DateTime<Utc>) -> (Self, Self) {
        (
            Self {
                user_id: a.clone(),
                friend_id: b.clone(),
                created_at,
            },
            Self {
                user_id: b,
                friend_id: a,
                created_at,
            },
        )
    }
}
