//! Driving port for reading people.

use async_trait::async_trait;

use crate::domain::{Error, Person, PersonId};

#[async_trait]
pub trait PeopleQuery: Send + Sync {
    /// Every person ordered by ascending identifier.
    async fn list_people(&self) -> Result<Vec<Person>, Error>;

    async fn get_person(&self, id: PersonId) -> Result<Person, Error>;
}
