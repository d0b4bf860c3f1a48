use axum::{debug_handler, extract::{Path, State}, http::StatusCode, Json};
use serde::Deserialize;

use crate::{db::Message, AppResult};

use super::ChatService;

#[derive(Debug, Deserialize)]
pub(crate) struct SendMessageQuery {
    sender_id: i64,
    content: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn send_msg(
    State(chats): State<ChatService>,
    Path(chat_id): Path<i64>,
    Json(SendMessageQuery { sender_id, content }): Json<SendMessageQuery>,
) -> AppResult<(StatusCode, Json<Message>)> {
    let message = chats.send_message(chat_id, sender_id, &content).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn list_msgs(
    State(chats): State<ChatService>,
    Path(chat_id): Path<i64>,
) -> AppResult<Json<Vec<Message>>> {
    Ok(Json(chats.list_messages(chat_id).await?))
}
