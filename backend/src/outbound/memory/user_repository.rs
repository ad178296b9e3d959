//! In-memory `UserRepository`.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

use super::{Table, lock};

/// Volatile user store enforcing email uniqueness.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let table = lock(&self.table, UserPersistenceError::query)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let table = lock(&self.table, UserPersistenceError::query)?;
        Ok(table.rows.get(&id.value()).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut table = lock(&self.table, UserPersistenceError::query)?;
        if table.rows.values().any(|existing| existing.email() == &user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email.to_string()));
        }
        let id = table.next_id();
        let stored = User::new(
            UserId::new(id),
            user.email.clone(),
            user.password_hash.clone(),
        );
        table.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut table = lock(&self.table, UserPersistenceError::query)?;
        Ok(table.rows.remove(&id.value()))
    }
}
