//! Bearer token stand-in. The token is the username handed out by `/login`,
//! so resolving it is a single lookup and nothing is kept server side.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{db::User, error::ServiceError, store::Store, AppError};

/// The user named by the request's `Authorization: Bearer` header.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Store: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let store = Store::from_ref(state);

        store
            .find_user_by_username(token)
            .await?
            .map(CurrentUser)
            .ok_or(ServiceError::Unauthorized("unknown token").into())
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, ServiceError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(ServiceError::Unauthorized("missing bearer token"))?
        .to_str()
        .map_err(|_| ServiceError::Unauthorized("malformed authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(ServiceError::Unauthorized("missing bearer token"))
}
