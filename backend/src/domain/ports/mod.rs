//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`) are called by inbound adapters.
//! Driven ports (`*Repository`) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod people_command;
mod people_query;
mod person_repository;
mod user_repository;
mod users_command;
mod users_query;

pub use people_command::PeopleCommand;
pub use people_query::PeopleQuery;
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{PersonPersistenceError, PersonRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
