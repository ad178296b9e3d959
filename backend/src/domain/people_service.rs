//! People domain service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{PeopleCommand, PeopleQuery, PersonPersistenceError, PersonRepository};
use crate::domain::{Error, Person, PersonDraft, PersonId};

fn map_repository_error(error: PersonPersistenceError) -> Error {
    match error {
        PersonPersistenceError::Connection { message } => {
            warn!(%message, "person repository connection failed");
            Error::service_unavailable("person repository unavailable")
        }
        PersonPersistenceError::Query { message } => {
            Error::internal(format!("person repository error: {message}"))
        }
    }
}

fn not_found(id: PersonId) -> Error {
    Error::not_found(format!("person {id} not found"))
}

/// People service implementing [`PeopleQuery`] and [`PeopleCommand`].
#[derive(Clone)]
pub struct PeopleService<R> {
    person_repo: Arc<R>,
}

impl<R> PeopleService<R> {
    pub fn new(person_repo: Arc<R>) -> Self {
        Self { person_repo }
    }
}

#[async_trait]
impl<R> PeopleQuery for PeopleService<R>
where
    R: PersonRepository,
{
    async fn list_people(&self) -> Result<Vec<Person>, Error> {
        self.person_repo.list().await.map_err(map_repository_error)
    }

    async fn get_person(&self, id: PersonId) -> Result<Person, Error> {
        self.person_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))
    }
}

#[async_trait]
impl<R> PeopleCommand for PeopleService<R>
where
    R: PersonRepository,
{
    async fn create_person(&self, draft: PersonDraft) -> Result<Person, Error> {
        let person = self
            .person_repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(person_id = %person.id(), "person created");
        Ok(person)
    }

    async fn delete_person(&self, id: PersonId) -> Result<Person, Error> {
        let person = self
            .person_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| not_found(id))?;
        info!(person_id = %id, "person deleted");
        Ok(person)
    }
}
