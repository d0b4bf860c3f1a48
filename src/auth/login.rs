use axum::{debug_handler, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{error::ServiceError, store::Store, AppResult};

#[derive(Deserialize)]
pub(crate) struct LoginQuery {
    pub(crate) username: String,
    pub(crate) password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    pub(crate) token_type: &'static str,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn login(
    State(store): State<Store>,
    Json(LoginQuery { username, password }): Json<LoginQuery>,
) -> AppResult<Json<TokenResponse>> {
    let Some(user) = store.find_user_by_username(&username).await? else {
        return Err(ServiceError::InvalidCredentials)?;
    };

    // passwords are stored as given
    if user.password != password {
        tracing::warn!(username = %username, "bad password");
        return Err(ServiceError::InvalidCredentials)?;
    }

    tracing::info!(user_id = user.id, "welcome u/{}", user.username);
    Ok(Json(TokenResponse {
        access_token: user.username,
        token_type: "bearer",
    }))
}
