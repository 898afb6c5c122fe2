use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::ErrorResponse;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDto};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user),
    components(schemas(UserDto, ErrorResponse)),
    tags(
        (name = "users", description = "Guest account endpoints")
    )
)]
pub struct ApiDoc;

/// Create the user router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user))
        .with_state(shared_service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<UserDto>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserDto>> {
    let user = service.get_user(&id).await?.ok_or(UserError::NotFound(id))?;
    Ok(Json(user))
}

/// Create a new user
///
/// The server assigns the ID; any ID in the request body is ignored.
#[utoipa::path(
    post,
    path = "",
    tag = "users",
    request_body = UserDto,
    responses(
        (status = 200, description = "User created successfully", body = String),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Json(input): Json<UserDto>,
) -> UserResult<impl IntoResponse> {
    let user = User {
        id: Uuid::new_v4().to_string(),
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        password: input.password.unwrap_or_default(),
    };

    service.add_user(user).await?;

    Ok((StatusCode::OK, "User created successfully"))
}
