use std::str::FromStr;

use serde::Serialize;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    FromRow, SqlitePool,
};
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    // plain text, hashing is switched off
    #[serde(skip_serializing)]
    pub password: String,
    pub is_tutor: bool,
    pub course_id: Option<i64>,

    // unique: username
    // unique: email
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,

    // unique: name
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chat {
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    // unique: tutor_id, student_id
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A user joined to the name of its course, if it has one.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UserWithCourse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_tutor: bool,
    pub course_id: Option<i64>,
    pub course_name: Option<String>,
}

/// A chat row with both participants' usernames resolved.
#[derive(Debug, Clone, FromRow)]
pub struct ChatWithNames {
    pub id: i64,
    pub tutor_id: i64,
    pub student_id: i64,
    pub created_at: OffsetDateTime,
    pub tutor_name: String,
    pub student_name: String,
}

/// Opens the pool and brings the schema up to date.
pub async fn open(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(database_url)?
        .foreign_keys(true)
        .create_if_missing(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await?;

    sqlx::migrate!("./migrations").run(&db_pool).await?;

    Ok(db_pool)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    // every :memory: connection is its own database, so pin the pool to one
    open("sqlite::memory:", 1).await.unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_create_tables() {
        let db_pool = test_pool().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&db_pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(names, ["chats", "courses", "messages", "users"]);
    }

    #[tokio::test]
    async fn foreign_keys_enforced() {
        let db_pool = test_pool().await;

        let (on,): (i32,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&db_pool)
            .await
            .unwrap();
        assert_eq!(on, 1);

        let orphan = sqlx::query("INSERT INTO messages (chat_id,sender_id,content) VALUES (42,42,'x')")
            .execute(&db_pool)
            .await;
        assert!(orphan.is_err());
    }
}
