mod list;
mod register;
mod tutors;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list::users).post(register::register))
        .route("/users/me", get(list::me))
        .route("/users/{user_id}", get(list::user))
        .route("/tutors", get(tutors::tutors))
        .route("/tutors/{name}", get(tutors::tutor_by_name))
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::{extract::{Path, State}, http::StatusCode, Json};
    use serde_json::json;

    use super::*;
    use crate::{db::User, test_state};

    pub(crate) async fn register_user(state: &AppState, username: &str, is_tutor: bool, course_id: Option<i64>) -> User {
        let query = serde_json::from_value(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "hunter2",
            "is_tutor": is_tutor,
            "course_id": course_id,
        }))
        .unwrap();

        let (status, Json(user)) = register::register(State(state.store.clone()), Json(query)).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        user
    }

    #[tokio::test]
    async fn register_hides_password() {
        let state = test_state().await;
        let user = register_user(&state, "alice", true, None).await;

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["is_tutor"], true);
    }

    #[tokio::test]
    async fn register_defaults_to_student() {
        let state = test_state().await;
        let query = serde_json::from_value(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "pw",
        }))
        .unwrap();

        let (_, Json(user)) = register::register(State(state.store.clone()), Json(query)).await.unwrap();
        assert!(!user.is_tutor);
        assert_eq!(user.course_id, None);
    }

    #[tokio::test]
    async fn register_rejects_duplicates() {
        let state = test_state().await;
        register_user(&state, "alice", true, None).await;

        let same_email = serde_json::from_value(json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "pw",
        }))
        .unwrap();
        let err = register::register(State(state.store.clone()), Json(same_email)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.0.to_string(), "Email already registered");

        let same_name = serde_json::from_value(json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "pw",
        }))
        .unwrap();
        let err = register::register(State(state.store.clone()), Json(same_name)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn register_with_unknown_course() {
        let state = test_state().await;
        let query = serde_json::from_value(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "pw",
            "course_id": 77,
        }))
        .unwrap();

        let err = register::register(State(state.store.clone()), Json(query)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn users_carry_course_name() {
        let state = test_state().await;
        let course = state.store.insert_course("Algebra", Some("groups and rings")).await.unwrap();
        let alice = register_user(&state, "alice", true, Some(course.id)).await;
        let bob = register_user(&state, "bob", false, None).await;

        let Json(users) = list::users(State(state.store.clone())).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, alice.id);
        assert_eq!(users[0].course_name.as_deref(), Some("Algebra"));
        assert_eq!(users[1].id, bob.id);
        assert_eq!(users[1].course_name, None);

        let Json(one) = list::user(State(state.store.clone()), Path(bob.id)).await.unwrap();
        assert_eq!(one, users[1]);

        let err = list::user(State(state.store.clone()), Path(999)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn tutors_only_lists_tutors() {
        let state = test_state().await;
        register_user(&state, "alice", true, None).await;
        register_user(&state, "bob", false, None).await;
        register_user(&state, "carol", true, None).await;

        let Json(found) = tutors::tutors(State(state.store.clone())).await.unwrap();
        let names: Vec<&str> = found.iter().map(|t| t.username.as_str()).collect();
        assert_eq!(names, ["alice", "carol"]);
        assert!(found.iter().all(|t| t.is_tutor));
    }

    #[tokio::test]
    async fn tutor_lookup_ignores_case() {
        let state = test_state().await;
        let alice = register_user(&state, "Alice", true, None).await;
        register_user(&state, "bob", false, None).await;

        let Json(found) = tutors::tutor_by_name(State(state.store.clone()), Path("aLiCe".to_owned()))
            .await
            .unwrap();
        assert_eq!(found.id, alice.id);

        for missing in ["bob", "nobody"] {
            let err = tutors::tutor_by_name(State(state.store.clone()), Path(missing.to_owned()))
                .await
                .unwrap_err();
            assert_eq!(err.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn me_returns_token_owner() {
        let state = test_state().await;
        let course = state.store.insert_course("Chemistry", None).await.unwrap();
        let bob = register_user(&state, "bob", false, Some(course.id)).await;

        let Json(me) = list::me(State(state.store.clone()), crate::auth::CurrentUser(bob.clone())).await.unwrap();
        assert_eq!(me.id, bob.id);
        assert_eq!(me.course_name.as_deref(), Some("Chemistry"));
    }
}
