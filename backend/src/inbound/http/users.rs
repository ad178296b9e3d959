//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users {"email":"luke@tatooine","password":"blue-milk"}
//! DELETE /users/{id}
//! ```
//!
//! Passwords are accepted on input only; no response ever carries one.

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{User, UserId, UserRegistration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require, user_validation_error};

const EMAIL: FieldName = FieldName::new("email");
const PASSWORD: FieldName = FieldName::new("password");

/// Request body for `POST /users`.
///
/// Fields are optional at the serde level so a missing field is reported as
/// a validation error naming it, not as a generic JSON error.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "luke@tatooine.net")]
    pub email: Option<String>,
    #[schema(example = "blue-milk", format = Password)]
    pub password: Option<String>,
}

impl CreateUserRequest {
    fn into_registration(self) -> ApiResult<UserRegistration> {
        let email = require(self.email, EMAIL)?;
        let password = require(self.password, PASSWORD)?;
        UserRegistration::try_new(email, password).map_err(user_validation_error)
    }
}

/// Serialised user. The password hash is never included.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "luke@tatooine.net")]
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            email: user.email().to_string(),
        }
    }
}

/// Envelope returned by user mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserEnvelope {
    #[schema(example = "User created successfully")]
    pub msg: String,
    pub user: UserResponse,
}

impl UserEnvelope {
    fn new(msg: &str, user: &User) -> Self {
        Self {
            msg: msg.to_owned(),
            user: user.into(),
        }
    }
}

/// List every user in ascending id order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserResponse),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state
        .users_query
        .get_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(UserResponse::from(&user)))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserEnvelope),
        (status = 400, description = "Missing or malformed field", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let registration = payload.into_inner().into_registration()?;
    let user = state.users.create_user(registration).await?;
    Ok(web::Json(UserEnvelope::new("User created successfully", &user)))
}

/// Delete a user and return it as it was.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = UserEnvelope),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let user = state
        .users
        .delete_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(UserEnvelope::new("User deleted", &user)))
}
