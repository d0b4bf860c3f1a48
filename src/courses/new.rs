use axum::{debug_handler, extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{db::Course, error::ServiceError, store::Store, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct NewCourseQuery {
    name: String,
    description: Option<String>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_course(
    State(store): State<Store>,
    Json(NewCourseQuery { name, description }): Json<NewCourseQuery>,
) -> AppResult<(StatusCode, Json<Course>)> {
    if store.find_course_by_name(&name).await?.is_some() {
        return Err(ServiceError::CourseNameTaken(name))?;
    }

    let course = store.insert_course(&name, description.as_deref()).await?;
    tracing::info!(course_id = course.id, name = %course.name, "course created");
    Ok((StatusCode::CREATED, Json(course)))
}
