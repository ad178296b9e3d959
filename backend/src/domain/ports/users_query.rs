//! Driving port for reading users.
//!
//! Inbound adapters fetch user records through this port without importing
//! outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user ordered by ascending identifier.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// A single user, or a `not_found` error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
