use thiserror::Error;

/// Everything a service operation can refuse with.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid participants: tutor_id must name a tutor and student_id a student")]
    InvalidParticipants,

    #[error("chat not found")]
    ChatNotFound,

    #[error("sender is not part of this chat")]
    SenderNotInChat,

    #[error("user not found")]
    UserNotFound,

    #[error("tutor not found")]
    TutorNotFound,

    #[error("course not found")]
    CourseNotFound,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("course '{0}' already exists")]
    CourseNameTaken(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("store failure: {0}")]
    Store(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
