use axum::{debug_handler, extract::{Path, State}, Json};

use crate::AppResult;

use super::{ChatService, ChatView};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn user_chats(
    State(chats): State<ChatService>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<ChatView>>> {
    Ok(Json(chats.list_chats_for_user(user_id).await?))
}
