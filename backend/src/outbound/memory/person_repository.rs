//! In-memory `PersonRepository`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{PersonPersistenceError, PersonRepository};
use crate::domain::{Person, PersonDraft, PersonId};

use super::{Table, lock};

#[derive(Default)]
pub struct InMemoryPersonRepository {
    table: Mutex<Table<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, PersonPersistenceError> {
        let table = lock(&self.table, PersonPersistenceError::query)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError> {
        let table = lock(&self.table, PersonPersistenceError::query)?;
        Ok(table.rows.get(&id.value()).cloned())
    }

    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonPersistenceError> {
        let mut table = lock(&self.table, PersonPersistenceError::query)?;
        let id = table.next_id();
        let stored = draft.clone().with_id(PersonId::new(id));
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError> {
        let mut table = lock(&self.table, PersonPersistenceError::query)?;
        Ok(table.rows.remove(&id.value()))
    }
}
