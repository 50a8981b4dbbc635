use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    api::models::{ApiError, CreateUserRequest, ErrorResponse},
    core::{models::user::User, schemas::CreateUserInput, services::UserService},
    infrastructure::repository::in_memory::InMemoryUserRepository,
};

pub fn api_routes(service: Arc<UserService<InMemoryUserRepository>>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/users", post(create_user))
        .with_state(service)
}

async fn health() -> &'static str {
    "OK"
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Invalid email or name", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Arc<UserService<InMemoryUserRepository>>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let input = CreateUserInput {
        email: req.email,
        name: req.name,
    };
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
