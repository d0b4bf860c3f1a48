use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::{
    db::{Chat, ChatWithNames, Message},
    error::{ServiceError, ServiceResult},
    store::Store,
};

use super::access::{validate_chat_participants, validate_sender};

/// A chat as seen by one of its participants: carries the other party's
/// name and never the caller's own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatView {
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
}

impl ChatView {
    /// A user on both sides of a chat sees it as its tutor.
    fn for_caller(chat: ChatWithNames, caller_id: i64) -> Self {
        let (tutor_name, student_name) = if chat.tutor_id == caller_id {
            (None, Some(chat.student_name))
        } else {
            (Some(chat.tutor_name), None)
        };

        Self {
            id: chat.id,
            tutor_id: chat.tutor_id,
            student_id: chat.student_id,
            created_at: chat.created_at,
            tutor_name,
            student_name,
        }
    }
}

#[derive(Clone)]
pub struct ChatService {
    store: Store,
}

impl ChatService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Returns the existing chat for the pair if there is one, otherwise
    /// inserts it.
    pub async fn create_chat(&self, tutor_id: i64, student_id: i64) -> ServiceResult<Chat> {
        let tutor = self.store.find_user_by_id(tutor_id).await?;
        let student = self.store.find_user_by_id(student_id).await?;
        let (tutor_id, student_id) = validate_chat_participants(tutor.as_ref(), student.as_ref())
            .inspect_err(|_| warn!(tutor_id, student_id, "rejected chat participants"))?;

        if let Some(chat) = self.store.find_chat_by_participants(tutor_id, student_id).await? {
            debug!(chat_id = chat.id, tutor_id, student_id, "chat already exists");
            return Ok(chat);
        }

        match self.store.insert_chat(tutor_id, student_id).await? {
            Some(chat) => {
                info!(chat_id = chat.id, tutor_id, student_id, "chat created");
                Ok(chat)
            }
            // lost the race against a concurrent insert of the same pair
            None => self
                .store
                .find_chat_by_participants(tutor_id, student_id)
                .await?
                .ok_or(ServiceError::ChatNotFound),
        }
    }

    pub async fn send_message(&self, chat_id: i64, sender_id: i64, content: &str) -> ServiceResult<Message> {
        let chat = self
            .store
            .find_chat_by_id(chat_id)
            .await?
            .ok_or(ServiceError::ChatNotFound)?;

        validate_sender(&chat, sender_id)
            .inspect_err(|_| warn!(chat_id, sender_id, "sender not in chat"))?;

        let message = self.store.insert_message(chat.id, sender_id, content).await?;
        debug!(chat_id, sender_id, message_id = message.id, "message stored");
        Ok(message)
    }

    pub async fn list_chats_for_user(&self, user_id: i64) -> ServiceResult<Vec<ChatView>> {
        let user = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or(ServiceError::UserNotFound)?;

        Ok(self
            .store
            .find_chats_for_user(user.id)
            .await?
            .into_iter()
            .map(|chat| ChatView::for_caller(chat, user.id))
            .collect())
    }

    /// Oldest first.
    pub async fn list_messages(&self, chat_id: i64) -> ServiceResult<Vec<Message>> {
        let chat = self
            .store
            .find_chat_by_id(chat_id)
            .await?
            .ok_or(ServiceError::ChatNotFound)?;

        Ok(self.store.find_messages_by_chat(chat.id).await?)
    }
}
