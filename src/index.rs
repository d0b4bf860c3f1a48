use axum::{debug_handler, Json};
use serde_json::{json, Value};

#[debug_handler]
pub async fn index() -> Json<Value> {
    Json(json!({ "message": "Welcome to HiveMind Backend!" }))
}
