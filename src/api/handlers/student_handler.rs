//! Student handlers.
//!
//! Thin verb-to-store mapping; the store owns all semantics.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::Student;
use crate::errors::{AppResult, OptionExt};

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_students).post(save_student).put(update_student),
        )
        .route("/:id", get(get_student).delete(delete_student))
}

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    responses(
        (status = 200, description = "All students", body = [Student])
    )
)]
pub async fn list_students(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = state.students.find_all().await?;
    Ok(Json(students))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 404, description = "No student with this id")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Student>> {
    let student = state.students.find_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(student))
}

/// Insert or replace a student (keyed by payload id)
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = Student,
    responses(
        (status = 204, description = "Student stored")
    )
)]
pub async fn save_student(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> AppResult<StatusCode> {
    state.students.save_or_update(student).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update a student (same upsert semantics as save)
#[utoipa::path(
    put,
    path = "/students",
    tag = "Students",
    request_body = Student,
    responses(
        (status = 204, description = "Student stored")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> AppResult<StatusCode> {
    state.students.save_or_update(student).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a student by id (no-op when absent)
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i64, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student removed (or was never there)")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.students.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
