use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Deserialize;

use super::{log_api_issue, ErrorResponse};
use crate::auth::resolve_caller;
use crate::state::AppState;
use crate::store::{StoreError, Task};

/// Allow-list for mass assignment: only title and body may be set from
/// the request; everything else (id, owner, assignee, timestamps) is
/// derived server-side. Unknown fields reject the whole request.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskBody {
    title: String,
    body: String,
}

/// POST /tasks -- create a single task owned by and assigned to the
/// caller. No bulk creation.
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, Json<ErrorResponse>)> {
    let caller = resolve_caller(state.store.as_ref(), &headers)?;

    // Presence validation before any record is built.
    let title = body.title.trim();
    let text = body.body.trim();
    if title.is_empty() || text.is_empty() {
        let status = StatusCode::BAD_REQUEST;
        log_api_issue(
            status,
            "taskboard.api.create_task",
            format!(
                "Rejected task creation from user {}: empty title or body",
                caller.id
            ),
        );
        return Err((
            status,
            Json(ErrorResponse::bad_request("title and body must be present")),
        ));
    }

    let task = state.store.create_task(&caller, title, text).map_err(|e| {
        let status = match &e {
            StoreError::UserNotFound(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        log_api_issue(
            status,
            "taskboard.api.create_task",
            format!("Failed to create task for user {}: {}", caller.id, e),
        );
        (status, Json(ErrorResponse::new(&e.to_string())))
    })?;

    Ok((StatusCode::CREATED, Json(task)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::api_router;
    use crate::store::memory::MemoryStore;
    use crate::store::{TaskStore, User};
    use axum::body::Body;
    use axum::http::Request;
    use axum::Router;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> (Router, Arc<MemoryStore>, User) {
        let store = Arc::new(MemoryStore::new());
        let user = store.create_user("Alice", "alice@example.com", &[]).unwrap();
        let app = api_router().with_state(AppState::new(store.clone()));
        (app, store, user)
    }

    fn create_request(user_id: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/tasks")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", user_id))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_task_returns_persisted_record() {
        let (app, store, user) = test_app();

        let response = app
            .oneshot(create_request(
                &user.id,
                r#"{"title":"Write report","body":"Quarterly numbers"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let task = body_json(response.into_body()).await;
        assert_eq!(task["title"], "Write report");
        assert_eq!(task["body"], "Quarterly numbers");
        assert_eq!(task["owner_id"], user.id.as_str());
        assert_eq!(task["assigned_to"], user.id.as_str());
        assert!(task["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(task["created_at"].is_string());

        // Row is durable and readable back through the store.
        assert_eq!(store.task_count(), 1);
        let id = task["id"].as_str().unwrap();
        assert_eq!(store.get_task(id).unwrap().owner_id, user.id);
    }

    #[tokio::test]
    async fn test_empty_title_rejected_before_persistence() {
        // Scenario D: empty title produces zero persisted rows.
        let (app, store, user) = test_app();

        let response = app
            .oneshot(create_request(&user.id, r#"{"title":"","body":"Something"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.task_count(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_body_rejected() {
        let (app, store, user) = test_app();

        let response = app
            .oneshot(create_request(&user.id, r#"{"title":"Title","body":"   "}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.task_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_field_rejected_by_allow_list() {
        let (app, store, user) = test_app();

        let response = app
            .oneshot(create_request(
                &user.id,
                r#"{"title":"T","body":"B","owner_id":"someone-else"}"#,
            ))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
        assert_eq!(store.task_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_is_unauthorized() {
        let (app, store, _user) = test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/tasks")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title":"T","body":"B"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(store.task_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_caller_is_unauthorized() {
        let (app, store, _user) = test_app();

        let response = app
            .oneshot(create_request("not-a-user", r#"{"title":"T","body":"B"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(store.task_count(), 0);

        let error = body_json(response.into_body()).await;
        assert_eq!(error["error"], "Unauthorized");
    }
}
