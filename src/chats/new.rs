use axum::{debug_handler, extract::State, Json};
use serde::Deserialize;

use crate::{db::Chat, AppResult};

use super::ChatService;

#[derive(Debug, Deserialize)]
pub(crate) struct NewChatQuery {
    tutor_id: i64,
    student_id: i64,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_chat(
    State(chats): State<ChatService>,
    Json(NewChatQuery { tutor_id, student_id }): Json<NewChatQuery>,
) -> AppResult<Json<Chat>> {
    Ok(Json(chats.create_chat(tutor_id, student_id).await?))
}
