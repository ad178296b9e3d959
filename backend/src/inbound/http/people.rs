//! People API handlers.
//!
//! ```text
//! GET    /people
//! GET    /people/{id}
//! POST   /people {"name":"Luke","description":"hero"}
//! DELETE /people/{id}
//! ```

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Person, PersonDraft, PersonId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, person_validation_error, require};

const NAME: FieldName = FieldName::new("name");
const DESCRIPTION: FieldName = FieldName::new("description");

/// Request body for `POST /people`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreatePersonRequest {
    #[schema(example = "Luke")]
    pub name: Option<String>,
    #[schema(example = "hero")]
    pub description: Option<String>,
}

impl CreatePersonRequest {
    fn into_draft(self) -> ApiResult<PersonDraft> {
        let name = require(self.name, NAME)?;
        let description = require(self.description, DESCRIPTION)?;
        PersonDraft::try_new(name, description).map_err(person_validation_error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PersonResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Luke")]
    pub name: String,
    #[schema(example = "hero")]
    pub description: String,
}

impl From<&Person> for PersonResponse {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id().value(),
            name: person.name().to_owned(),
            description: person.description().to_owned(),
        }
    }
}

/// Envelope returned by people mutations. The record sits under `people`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct PeopleEnvelope {
    #[schema(example = "People created successfully")]
    pub msg: String,
    pub people: PersonResponse,
}

impl PeopleEnvelope {
    fn new(msg: &str, person: &Person) -> Self {
        Self {
            msg: msg.to_owned(),
            people: person.into(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people", body = [PersonResponse]),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "listPeople"
)]
#[get("/people")]
pub async fn list_people(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PersonResponse>>> {
    let people = state.people_query.list_people().await?;
    Ok(web::Json(people.iter().map(PersonResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "The person", body = PersonResponse),
        (status = 404, description = "No such person", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "getPerson"
)]
#[get("/people/{id}")]
pub async fn get_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PersonResponse>> {
    let person = state
        .people_query
        .get_person(PersonId::new(path.into_inner()))
        .await?;
    Ok(web::Json(PersonResponse::from(&person)))
}

#[utoipa::path(
    post,
    path = "/people",
    request_body = CreatePersonRequest,
    responses(
        (status = 200, description = "Person created", body = PeopleEnvelope),
        (status = 400, description = "Missing or blank field", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "createPerson"
)]
#[post("/people")]
pub async fn create_person(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePersonRequest>,
) -> ApiResult<web::Json<PeopleEnvelope>> {
    let draft = payload.into_inner().into_draft()?;
    let person = state.people.create_person(draft).await?;
    Ok(web::Json(PeopleEnvelope::new(
        "People created successfully",
        &person,
    )))
}

#[utoipa::path(
    delete,
    path = "/people/{id}",
    params(("id" = i32, Path, description = "Person identifier")),
    responses(
        (status = 200, description = "Person deleted", body = PeopleEnvelope),
        (status = 404, description = "No such person", body = ErrorSchema)
    ),
    tags = ["people"],
    operation_id = "deletePerson"
)]
#[delete("/people/{id}")]
pub async fn delete_person(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PeopleEnvelope>> {
    let person = state
        .people
        .delete_person(PersonId::new(path.into_inner()))
        .await?;
    Ok(web::Json(PeopleEnvelope::new("People deleted", &person)))
}
