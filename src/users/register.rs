use axum::{debug_handler, extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{
    db::User,
    error::ServiceError,
    store::{NewUser, Store},
    AppResult,
};

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterQuery {
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    is_tutor: bool,
    course_id: Option<i64>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn register(
    State(store): State<Store>,
    Json(RegisterQuery { username, email, password, is_tutor, course_id }): Json<RegisterQuery>,
) -> AppResult<(StatusCode, Json<User>)> {
    if store.find_user_by_email(&email).await?.is_some() {
        return Err(ServiceError::EmailTaken)?;
    }
    if store.find_user_by_username(&username).await?.is_some() {
        return Err(ServiceError::UsernameTaken)?;
    }
    if let Some(course_id) = course_id {
        if store.find_course_by_id(course_id).await?.is_none() {
            return Err(ServiceError::CourseNotFound)?;
        }
    }

    let user = store
        .insert_user(NewUser {
            username: &username,
            email: &email,
            password: &password,
            is_tutor,
            course_id,
        })
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, is_tutor, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}
