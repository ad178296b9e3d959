//! Driving port for people mutations.

use async_trait::async_trait;

use crate::domain::{Error, Person, PersonDraft, PersonId};

#[async_trait]
pub trait PeopleCommand: Send + Sync {
    async fn create_person(&self, draft: PersonDraft) -> Result<Person, Error>;

    /// Remove a person and return the deleted record, or a `not_found` error.
    async fn delete_person(&self, id: PersonId) -> Result<Person, Error>;
}
