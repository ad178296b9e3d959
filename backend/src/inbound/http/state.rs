//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{PeopleCommand, PeopleQuery, UsersCommand, UsersQuery};

/// Parameter object bundling the port implementations for [`HttpState`].
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub people: Arc<dyn PeopleCommand>,
    pub people_query: Arc<dyn PeopleQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub people: Arc<dyn PeopleCommand>,
    pub people_query: Arc<dyn PeopleQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{PeopleService, UsersService};
    /// use backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use backend::outbound::memory::{InMemoryPersonRepository, InMemoryUserRepository};
    ///
    /// let users = Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::new())));
    /// let people = Arc::new(PeopleService::new(Arc::new(InMemoryPersonRepository::new())));
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: users.clone(),
    ///     users_query: users,
    ///     people: people.clone(),
    ///     people_query: people,
    /// });
    /// let _query = state.users_query.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_query,
            people,
            people_query,
        } = ports;
        Self {
            users,
            users_query,
            people,
            people_query,
        }
    }
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}
