//! Who may open a chat and who may post in it. No I/O here, callers fetch
//! the rows first.

use crate::{db::{Chat, User}, error::ServiceError};

/// The first party must exist and be a tutor, the second must exist and not be.
pub fn validate_chat_participants(
    tutor: Option<&User>,
    student: Option<&User>,
) -> Result<(i64, i64), ServiceError> {
    match (tutor, student) {
        (Some(tutor), Some(student)) if tutor.is_tutor && !student.is_tutor => Ok((tutor.id, student.id)),
        _ => Err(ServiceError::InvalidParticipants),
    }
}

pub fn validate_sender(chat: &Chat, sender_id: i64) -> Result<(), ServiceError> {
    if sender_id == chat.tutor_id || sender_id == chat.student_id {
        Ok(())
    } else {
        Err(ServiceError::SenderNotInChat)
    }
}
