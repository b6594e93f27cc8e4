//! User management handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewUser, UserChanges, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Patch};

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Maria Brown")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "maria@gmail.com")]
    pub email: String,
    #[schema(example = "988888888")]
    pub phone: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "123456", min_length = 6)]
    pub password: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            phone: request.phone,
            password: request.password,
        }
    }
}

/// User update request; omitted fields keep their value
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Maria Green")]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "maria.green@gmail.com")]
    pub email: Option<String>,
    /// `null` clears the phone number
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "977777777")]
    pub phone: Patch<String>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(request: UpdateUserRequest) -> Self {
        UserChanges {
            name: request.name,
            email: request.email,
            phone: request.phone,
        }
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.find_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::errors::StandardError)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse,
            headers(("location" = String, description = "URI of the new user"))),
        (status = 400, description = "Validation error", body = crate::errors::StandardError)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.insert(payload.into()).await?;
    Ok(Created::at(format!("/users/{}", user.id), UserResponse::from(user)))
}

/// Update user details
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::errors::StandardError),
        (status = 404, description = "User not found", body = crate::errors::StandardError)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.update(id, payload.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Delete a user without orders
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "User is still referenced by orders", body = crate::errors::StandardError),
        (status = 404, description = "User not found", body = crate::errors::StandardError)
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<NoContent> {
    state.user_service.delete(id).await?;
    Ok(NoContent)
}
