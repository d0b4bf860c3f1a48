mod access;
mod list;
mod msg;
mod new;
mod service;

pub use access::{validate_chat_participants, validate_sender};
pub use service::{ChatService, ChatView};

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chats", post(new::new_chat))
        .route("/chats/{chat_id}/messages", get(msg::list_msgs).post(msg::send_msg))
        .route("/users/{user_id}/chats", get(list::user_chats))
}
