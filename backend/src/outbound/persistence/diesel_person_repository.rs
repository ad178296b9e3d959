//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PersonPersistenceError, PersonRepository};
use crate::domain::{Person, PersonDraft, PersonId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPersonRow, PersonRow};
use super::pool::{DbPool, PoolError};
use super::schema::people;

/// Diesel-backed implementation of the [`PersonRepository`] port.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> PersonPersistenceError {
    map_pool_error(error, PersonPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> PersonPersistenceError {
    map_diesel_error(
        error,
        PersonPersistenceError::query,
        PersonPersistenceError::connection,
    )
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person::new(PersonId::new(row.id), row.name, row.description)
    }
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn list(&self) -> Result<Vec<Person>, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<PersonRow> = people::table
            .order(people::id.asc())
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<PersonRow> = people::table
            .find(id.value())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Person::from))
    }

    async fn insert(&self, draft: &PersonDraft) -> Result<Person, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewPersonRow {
            name: draft.name(),
            description: draft.description(),
        };
        let stored: PersonRow = diesel::insert_into(people::table)
            .values(&row)
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(stored.into())
    }

    async fn delete(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row: Option<PersonRow> = diesel::delete(people::table.find(id.value()))
            .returning(PersonRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Person::from))
    }
}
