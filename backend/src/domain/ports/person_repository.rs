//! Driven port for people persistence.
use async_trait::async_trait;

use crate::domain::{Person, PersonDraft, PersonId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by person repository adapters.
    pub enum PersonPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "person repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "person repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All people ordered by ascending identifier.
    async fn list(&self) -> Result<Vec<Person>, PersonPersistenceError>;

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError>;

    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonPersistenceError>;

    /// Remove a person, returning the record as it was before removal.
    async fn delete(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError>;
}
