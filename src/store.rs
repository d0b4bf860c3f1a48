//! Store client: every SQL statement the app runs lives here.
//!
//! Handed to the services and handlers through `AppState`; nothing in the
//! crate reaches a database any other way.

use sqlx::SqlitePool;

use crate::{
    db::{Chat, ChatWithNames, Course, Message, User, UserWithCourse},
    error::ServiceError,
};

const USER_WITH_COURSE: &str = "SELECT u.id,u.username,u.email,u.is_tutor,u.course_id,c.name AS course_name \
    FROM users u LEFT JOIN courses c ON c.id=u.course_id";

#[derive(Clone)]
pub struct Store {
    db_pool: SqlitePool,
}

pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub is_tutor: bool,
    pub course_id: Option<i64>,
}

impl Store {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.db_pool
    }

    pub async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT id,username,email,password,is_tutor,course_id FROM users WHERE id=?")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT id,username,email,password,is_tutor,course_id FROM users WHERE username=?")
            .bind(username)
            .fetch_optional(&self.db_pool)
            .await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as("SELECT id,username,email,password,is_tutor,course_id FROM users WHERE email=?")
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await
    }

    /// A clash on the email or username unique key comes back as
    /// `EmailTaken`/`UsernameTaken`, email checked first.
    pub async fn insert_user(&self, user: NewUser<'_>) -> Result<User, ServiceError> {
        let inserted: Result<User, sqlx::Error> = sqlx::query_as(
            "INSERT INTO users (username,email,password,is_tutor,course_id) VALUES (?,?,?,?,?) \
             RETURNING id,username,email,password,is_tutor,course_id",
        )
        .bind(user.username)
        .bind(user.email)
        .bind(user.password)
        .bind(user.is_tutor)
        .bind(user.course_id)
        .fetch_one(&self.db_pool)
        .await;

        match inserted {
            Err(err) if is_unique_violation(&err) => {
                if self.find_user_by_email(user.email).await?.is_some() {
                    Err(ServiceError::EmailTaken)
                } else {
                    Err(ServiceError::UsernameTaken)
                }
            }
            other => Ok(other?),
        }
    }

    pub async fn find_users_with_course(&self) -> Result<Vec<UserWithCourse>, sqlx::Error> {
        sqlx::query_as(&format!("{USER_WITH_COURSE} ORDER BY u.id"))
            .fetch_all(&self.db_pool)
            .await
    }

    pub async fn find_user_with_course(&self, id: i64) -> Result<Option<UserWithCourse>, sqlx::Error> {
        sqlx::query_as(&format!("{USER_WITH_COURSE} WHERE u.id=?"))
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
    }

    pub async fn find_users_by_tutor_flag(&self, is_tutor: bool) -> Result<Vec<UserWithCourse>, sqlx::Error> {
        sqlx::query_as(&format!("{USER_WITH_COURSE} WHERE u.is_tutor=? ORDER BY u.id"))
            .bind(is_tutor)
            .fetch_all(&self.db_pool)
            .await
    }

    /// Case-insensitive on the username.
    pub async fn find_tutor_by_name(&self, name: &str) -> Result<Option<UserWithCourse>, sqlx::Error> {
        sqlx::query_as(&format!(
            "{USER_WITH_COURSE} WHERE u.is_tutor=1 AND u.username=? COLLATE NOCASE ORDER BY u.id LIMIT 1"
        ))
        .bind(name)
        .fetch_optional(&self.db_pool)
        .await
    }

    pub async fn find_course_by_id(&self, id: i64) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as("SELECT id,name,description FROM courses WHERE id=?")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
    }

    pub async fn find_course_by_name(&self, name: &str) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as("SELECT id,name,description FROM courses WHERE name=?")
            .bind(name)
            .fetch_optional(&self.db_pool)
            .await
    }

    pub async fn find_courses(&self) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as("SELECT id,name,description FROM courses ORDER BY name")
            .fetch_all(&self.db_pool)
            .await
    }

    pub async fn insert_course(&self, name: &str, description: Option<&str>) -> Result<Course, ServiceError> {
        sqlx::query_as("INSERT INTO courses (name,description) VALUES (?,?) RETURNING id,name,description")
            .bind(name)
            .bind(description)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|err| match is_unique_violation(&err) {
                true => ServiceError::CourseNameTaken(name.to_owned()),
                false => ServiceError::Store(err),
            })
    }

    pub async fn find_chat_by_id(&self, id: i64) -> Result<Option<Chat>, sqlx::Error> {
        sqlx::query_as("SELECT id,tutor_id,student_id,created_at FROM chats WHERE id=?")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
    }

    pub async fn find_chat_by_participants(&self, tutor_id: i64, student_id: i64) -> Result<Option<Chat>, sqlx::Error> {
        sqlx::query_as("SELECT id,tutor_id,student_id,created_at FROM chats WHERE tutor_id=? AND student_id=?")
            .bind(tutor_id)
            .bind(student_id)
            .fetch_optional(&self.db_pool)
            .await
    }

    /// `None` when a chat for the pair already exists.
    pub async fn insert_chat(&self, tutor_id: i64, student_id: i64) -> Result<Option<Chat>, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO chats (tutor_id,student_id) VALUES (?,?) \
             ON CONFLICT(tutor_id,student_id) DO NOTHING \
             RETURNING id,tutor_id,student_id,created_at",
        )
        .bind(tutor_id)
        .bind(student_id)
        .fetch_optional(&self.db_pool)
        .await
    }

    /// Chats where the user sits on either side, oldest first.
    pub async fn find_chats_for_user(&self, user_id: i64) -> Result<Vec<ChatWithNames>, sqlx::Error> {
        sqlx::query_as(
            "SELECT c.id,c.tutor_id,c.student_id,c.created_at,t.username AS tutor_name,s.username AS student_name \
             FROM chats c \
             JOIN users t ON t.id=c.tutor_id \
             JOIN users s ON s.id=c.student_id \
             WHERE c.tutor_id=? OR c.student_id=? \
             ORDER BY c.created_at,c.id",
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.db_pool)
        .await
    }

    pub async fn find_messages_by_chat(&self, chat_id: i64) -> Result<Vec<Message>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id,chat_id,sender_id,content,timestamp FROM messages WHERE chat_id=? ORDER BY timestamp,id",
        )
        .bind(chat_id)
        .fetch_all(&self.db_pool)
        .await
    }

    pub async fn insert_message(&self, chat_id: i64, sender_id: i64, content: &str) -> Result<Message, sqlx::Error> {
        sqlx::query_as(
            "INSERT INTO messages (chat_id,sender_id,content) VALUES (?,?,?) \
             RETURNING id,chat_id,sender_id,content,timestamp",
        )
        .bind(chat_id)
        .bind(sender_id)
        .bind(content)
        .fetch_one(&self.db_pool)
        .await
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error().is_some_and(|e| e.is_unique_violation())
}
