use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::{error::AppResult, models::Like};

/// Per-user storage of liked movies
#[async_trait::async_trait]
pub trait LikeStore: Send + Sync {
    /// Writes a like, replacing any earlier like of the same movie by the same user
    async fn upsert(&self, like: &Like) -> AppResult<()>;

    /// All likes of one user, most recent first
    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Like>>;
}

/// Postgres-backed like store
#[derive(Clone)]
pub struct PgLikeStore {
    pool: PgPool,
}

impl PgLikeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LikeStore for PgLikeStore {
    async fn upsert(&self, like: &Like) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO likes (id, user_id, user_email, movie_id, title, year, poster, liked_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, movie_id) DO UPDATE SET
                id = EXCLUDED.id,
                user_email = EXCLUDED.user_email,
                title = EXCLUDED.title,
                year = EXCLUDED.year,
                poster = EXCLUDED.poster,
                liked_at = EXCLUDED.liked_at
            "#,
        )
        .bind(&like.id)
        .bind(&like.user_id)
        .bind(&like.user_email)
        .bind(&like.movie_id)
        .bind(&like.title)
        .bind(&like.year)
        .bind(&like.poster)
        .bind(like.liked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Like>> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, user_id, user_email, movie_id, title, year, poster, liked_at
            FROM likes
            WHERE user_id = $1
            ORDER BY liked_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }
}

/// In-process like store, used when no database is configured and in tests
#[derive(Clone, Default)]
pub struct MemoryLikeStore {
    // (user_id, movie_id)
    likes: Arc<RwLock<HashMap<(String, String), Like>>>,
}

impl MemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LikeStore for MemoryLikeStore {
    async fn upsert(&self, like: &Like) -> AppResult<()> {
        let mut likes = self.likes.write().await;
        likes.insert((like.user_id.clone(), like.movie_id.clone()), like.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Like>> {
        let likes = self.likes.read().await;
        let mut found: Vec<Like> = likes
            .values()
            .filter(|like| like.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.liked_at.cmp(&a.liked_at));
        Ok(found)
    }
}
