use axum::{debug_handler, extract::{Path, State}, Json};

use crate::{auth::CurrentUser, db::UserWithCourse, error::ServiceError, store::Store, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn users(State(store): State<Store>) -> AppResult<Json<Vec<UserWithCourse>>> {
    Ok(Json(store.find_users_with_course().await?))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn user(
    State(store): State<Store>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserWithCourse>> {
    let user = store
        .find_user_with_course(user_id)
        .await?
        .ok_or(ServiceError::UserNotFound)?;
    Ok(Json(user))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn me(
    State(store): State<Store>,
    CurrentUser(current): CurrentUser,
) -> AppResult<Json<UserWithCourse>> {
    let user = store
        .find_user_with_course(current.id)
        .await?
        .ok_or(ServiceError::UserNotFound)?;
    Ok(Json(user))
}
