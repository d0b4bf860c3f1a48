pub mod appresult;
pub mod auth;
pub mod chats;
pub mod config;
pub mod courses;
pub mod db;
pub mod error;
pub mod index;
pub mod store;
pub mod telemetry;
pub mod users;

use axum::{extract::FromRef, routing::get, Router};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use appresult::{AppError, AppResult};

use chats::ChatService;
use store::Store;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Store,
    pub chats: ChatService,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        let store = Store::new(db_pool);
        Self {
            chats: ChatService::new(store.clone()),
            store,
        }
    }
}

pub fn app(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(courses::router())
        .merge(chats::router());

    Router::new()
        .route("/", get(index::index))
        .nest("/api", api)

        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    AppState::new(db::test_pool().await)
}
