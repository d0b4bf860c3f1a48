use axum::{debug_handler, extract::{Path, State}, Json};

use crate::{db::Course, error::ServiceError, store::Store, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn courses(State(store): State<Store>) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(store.find_courses().await?))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn course(
    State(store): State<Store>,
    Path(name): Path<String>,
) -> AppResult<Json<Course>> {
    let course = store
        .find_course_by_name(&name)
        .await?
        .ok_or(ServiceError::CourseNotFound)?;
    Ok(Json(course))
}
