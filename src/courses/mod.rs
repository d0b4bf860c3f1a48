mod new;
mod page;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(page::courses).post(new::new_course))
        .route("/courses/{name}", get(page::course))
}
