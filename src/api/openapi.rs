use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse},
    core::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::create_user),
    components(schemas(CreateUserRequest, ErrorResponse, User)),
    info(
        title = "Aion API",
        description = "User registration service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
