//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserRegistration};

#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Hash the password and persist a new user.
    ///
    /// Fails with `conflict` when the email is already registered.
    async fn create_user(&self, registration: UserRegistration) -> Result<User, Error>;

    /// Remove a user and return the deleted record, or a `not_found` error.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
