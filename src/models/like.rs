use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's saved association with a movie.
///
/// Stored under `(user_id, movie_id)`, so liking the same movie twice replaces
/// the earlier record instead of adding a second one. `id` is the display form
/// `{user_id}_{movie_id}` and is not unique on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub user_email: Option<String>,
    pub movie_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub liked_at: DateTime<Utc>,
}

impl Like {
    pub fn new(user: &UserIdentity, movie: LikedMovie) -> Self {
        Self {
            id: Self::key(&user.id, &movie.imdb_id),
            user_id: user.id.clone(),
            user_email: user.email.clone(),
            movie_id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            poster: movie.poster,
            liked_at: Utc::now(),
        }
    }

    /// Display id for a user and movie
    pub fn key(user_id: &str, movie_id: &str) -> String {
        format!("{}_{}", user_id, movie_id)
    }
}

/// The signed-in caller, as forwarded by the upstream auth layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: Option<String>,
}

/// Movie fields copied into a like record
#[derive(Debug, Clone, PartialEq)]
pub struct LikedMovie {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}
