//! HTTP endpoint tests.
//!
//! The router is exercised with `tower::ServiceExt::oneshot`. Student
//! routes run against the real in-memory store; user routes run against
//! a mocked repository so no database is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mockall::predicate::eq;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::{json, Value};
use tower::ServiceExt;

use roster_api::api::{create_router, AppState};
use roster_api::domain::{Student, User};
use roster_api::errors::AppError;
use roster_api::infra::{Database, InMemoryStudentStore, MockUserRepository};

/// Build a router over the seeded student store and the given user mock
fn test_app(users: MockUserRepository) -> axum::Router {
    let database = Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    );
    let state = AppState::new(
        Arc::new(InMemoryStudentStore::with_seed_data()),
        Arc::new(users),
        Arc::new(database),
    );
    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_user(id: i64) -> User {
    User {
        id,
        username: "gloryh".to_string(),
        password: "s3cret".to_string(),
        age: 24,
    }
}

#[tokio::test]
async fn root_returns_welcome_message() {
    let app = test_app(MockUserRepository::new());

    let response = app.oneshot(get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to Roster API");
}

#[tokio::test]
async fn openapi_doc_lists_all_operations() {
    let app = test_app(MockUserRepository::new());

    let response = app
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let paths = body["paths"].as_object().unwrap();
    for path in ["/students", "/students/{id}", "/users", "/users/{id}"] {
        assert!(paths.contains_key(path), "missing path {}", path);
    }
    // Schema examples from the entity derives survive into the doc
    assert_eq!(
        body["components"]["schemas"]["Student"]["properties"]["name"]["example"],
        "张三"
    );
}

#[tokio::test]
async fn list_students_returns_seeded_roster() {
    let app = test_app(MockUserRepository::new());

    let response = app.oneshot(get_request("/students")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 3);
}

#[tokio::test]
async fn get_student_by_id() {
    let app = test_app(MockUserRepository::new());

    let response = app.oneshot(get_request("/students/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "张三");
    assert_eq!(body["age"], 20);
}

#[tokio::test]
async fn get_unknown_student_is_404() {
    let app = test_app(MockUserRepository::new());

    let response = app.oneshot(get_request("/students/9")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn upsert_student_then_read_back() {
    let app = test_app(MockUserRepository::new());
    let payload = serde_json::to_value(Student::new(9, "赵六", 19)).unwrap();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/students", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request("/students/9")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "赵六");
}

#[tokio::test]
async fn delete_student_then_404() {
    let app = test_app(MockUserRepository::new());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/students/2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get_request("/students/2")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_user_hides_password() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(sample_user(id)));

    let app = test_app(users);
    let response = app.oneshot(get_request("/users/7")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["username"], "gloryh");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn get_unknown_user_is_404() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(|_| Err(AppError::NotFound));

    let app = test_app(users);
    let response = app.oneshot(get_request("/users/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_users_returns_rows() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_all()
        .returning(|| Ok(vec![sample_user(1), sample_user(2)]));

    let app = test_app(users);
    let response = app.oneshot(get_request("/users")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_user_with_valid_payload() {
    let mut users = MockUserRepository::new();
    users
        .expect_save()
        .withf(|u: &User| u.username == "gloryh" && u.age == 24)
        .times(1)
        .returning(|_| Ok(()));

    let app = test_app(users);
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"id": 1, "username": "gloryh", "age": 24, "password": "s3cret"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn create_user_with_invalid_payload_never_reaches_store() {
    let mut users = MockUserRepository::new();
    users.expect_save().times(0);

    let app = test_app(users);
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"id": null, "username": "a", "age": 10, "password": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    // All four constraints are reported at once
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("id: required"));
    assert!(message.contains("username: length"));
    assert!(message.contains("age: range"));
    assert!(message.contains("password: length"));
}

#[tokio::test]
async fn update_user_issues_store_update() {
    let mut users = MockUserRepository::new();
    users
        .expect_update()
        .withf(|u: &User| u.id == 7 && u.username == "renamed")
        .times(1)
        .returning(|_| Ok(()));

    let app = test_app(users);
    let response = app
        .oneshot(json_request(
            "PUT",
            "/users",
            json!({"id": 7, "username": "renamed", "age": 30, "password": "pw"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_user_is_silent() {
    let mut users = MockUserRepository::new();
    users
        .expect_delete_by_id()
        .with(eq(3))
        .times(1)
        .returning(|_| Ok(()));

    let app = test_app(users);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
