//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the request and
//! response schemas. The document backs Swagger UI (debug builds), the `/`
//! sitemap and the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::{health, people, sitemap, users};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Star Wars data API",
        description = "CRUD endpoints for users and people, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        sitemap::sitemap,
        users::list_users,
        users::get_user,
        users::create_user,
        users::delete_user,
        people::list_people,
        people::get_person,
        people::create_person,
        people::delete_person,
        health::ready,
        health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        users::CreateUserRequest,
        users::UserResponse,
        users::UserEnvelope,
        people::CreatePersonRequest,
        people::PersonResponse,
        people::PeopleEnvelope,
    )),
    tags(
        (name = "users", description = "Registered users"),
        (name = "people", description = "Star Wars characters"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "sitemap", description = "Route index")
    )
)]
pub struct ApiDoc;
