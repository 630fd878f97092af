use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::{error::AppError, models::UserIdentity};

/// Header carrying the signed-in user's id, set by the upstream auth layer
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the signed-in user's email
pub const USER_EMAIL_HEADER: &str = "x-user-email";

pub const NOT_LOGGED_IN: &str = "You must be logged in.";

/// Extractor for the calling user; rejects with 401 when no user id is forwarded
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header(parts, USER_ID_HEADER)
            .ok_or_else(|| AppError::Unauthorized(NOT_LOGGED_IN.to_string()))?;

        Ok(CurrentUser(UserIdentity {
            id: id.to_string(),
            email: header(parts, USER_EMAIL_HEADER).map(str::to_string),
        }))
    }
}
