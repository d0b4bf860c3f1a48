use axum::{debug_handler, extract::{Path, State}, Json};

use crate::{db::UserWithCourse, error::ServiceError, store::Store, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn tutors(State(store): State<Store>) -> AppResult<Json<Vec<UserWithCourse>>> {
    Ok(Json(store.find_users_by_tutor_flag(true).await?))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn tutor_by_name(
    State(store): State<Store>,
    Path(name): Path<String>,
) -> AppResult<Json<UserWithCourse>> {
    let tutor = store
        .find_tutor_by_name(&name)
        .await?
        .ok_or(ServiceError::TutorNotFound)?;
    Ok(Json(tutor))
}
