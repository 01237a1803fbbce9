//! OpenAPI documentation definition.

use utoipa::OpenApi;

use super::handlers::{student_handler, user_handler};
use crate::domain::{Student, User, UserPayload};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        description = "Teaching-oriented CRUD demo: students in memory, users in SQL",
        version = "0.1.0"
    ),
    paths(
        student_handler::list_students,
        student_handler::get_student,
        student_handler::save_student,
        student_handler::update_student,
        student_handler::delete_student,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(schemas(Student, User, UserPayload)),
    tags(
        (name = "Students", description = "In-memory student roster"),
        (name = "Users", description = "SQL-backed user records")
    )
)]
pub struct ApiDoc;
