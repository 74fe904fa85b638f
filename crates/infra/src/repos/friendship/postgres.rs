use super::IFriendshipRepo;
use remind_anyone_domain::{Friendship, ID};
use sqlx::{types::Uuid, PgPool, Row};

pub struct PostgresFriendshipRepo {
    pool: PgPool,
}

impl PostgresFriendshipRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl IFriendshipRepo for PostgresFriendshipRepo {
    async fn insert_pair(&self, edge: &Friendship, mirror: &Friendship) -> anyhow::Result<()> {
        // One transaction for both edges. The composite primary key
        // turns a concurrent duplicate into a constraint violation
        // that rolls the whole pair back.
        let mut tx = self.pool.begin().await?;
        for f in [edge, mirror] {
            sqlx::query(
                r#"
                INSERT INTO friendships(user_uid, friend_uid, created_at)
                VALUES($1, $2, $3)
                "#,
            )
            .bind(f.user_id.inner_ref())
            .bind(f.friend_id.inner_ref())
            .bind(f.created_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(())
    }

    async fn exists(&self, owner_id: &ID, friend_id: &ID) -> bool {
        sqlx::query(
            r#"
            SELECT 1 AS found FROM friendships AS f
            WHERE f.user_uid = $1 AND f.friend_uid = $2
            "#,
        )
        .bind(owner_id.inner_ref())
        .bind(friend_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .is_some()
    }

    async fn find_friends_of(&self, owner_id: &ID) -> Vec<ID> {
        sqlx::query(
            r#"
            SELECT f.friend_uid FROM friendships AS f
            WHERE f.user_uid = $1
            "#,
        )
        .bind(owner_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|row| row.get::<Uuid, _>("friend_uid").into())
        .collect()
    }
}
