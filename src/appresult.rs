use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::json;

use crate::error::ServiceError;

pub type AppResult<T> = Result<T, AppError>;
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        use ServiceError::*;
        match self.0.downcast_ref::<ServiceError>() {
            Some(InvalidParticipants | EmailTaken | UsernameTaken | CourseNameTaken(_)) => StatusCode::BAD_REQUEST,
            Some(ChatNotFound | UserNotFound | TutorNotFound | CourseNotFound) => StatusCode::NOT_FOUND,
            Some(SenderNotInChat) => StatusCode::FORBIDDEN,
            Some(InvalidCredentials | Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            Some(Store(_)) | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
        }

        (
            status,
            Json(json!({ "detail": self.0.to_string() })),
        )
            .into_response()
    }
}

macro_rules! apperr_impl {
    ($E:ty) => {
        impl From<$E> for AppError {
            fn from(err: $E) -> Self {
                Self(anyhow::Error::from(err))
            }
        }
    };
}

apperr_impl!(ServiceError);

// store faults keep their domain wrapper so they are classified the same way
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self(anyhow::Error::from(ServiceError::Store(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status() {
        let cases = [
            (ServiceError::InvalidParticipants, StatusCode::BAD_REQUEST),
            (ServiceError::ChatNotFound, StatusCode::NOT_FOUND),
            (ServiceError::UserNotFound, StatusCode::NOT_FOUND),
            (ServiceError::TutorNotFound, StatusCode::NOT_FOUND),
            (ServiceError::CourseNotFound, StatusCode::NOT_FOUND),
            (ServiceError::SenderNotInChat, StatusCode::FORBIDDEN),
            (ServiceError::EmailTaken, StatusCode::BAD_REQUEST),
            (ServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (ServiceError::Store(sqlx::Error::PoolTimedOut), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn unclassified_is_internal() {
        assert_eq!(AppError(anyhow::anyhow!("boom")).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::from(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
