//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::ports::{
    PeopleCommand, PeopleQuery, PersonRepository, UserRepository, UsersCommand, UsersQuery,
};
use backend::domain::{PeopleService, UsersService};
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::memory::{InMemoryPersonRepository, InMemoryUserRepository};
use backend::outbound::persistence::{DieselPersonRepository, DieselUserRepository};

use super::ServerConfig;

type UserPorts = (Arc<dyn UsersCommand>, Arc<dyn UsersQuery>);
type PeoplePorts = (Arc<dyn PeopleCommand>, Arc<dyn PeopleQuery>);

fn user_ports<R>(repo: R) -> UserPorts
where
    R: UserRepository + 'static,
{
    let service = Arc::new(UsersService::new(Arc::new(repo)));
    (service.clone(), service)
}

fn people_ports<R>(repo: R) -> PeoplePorts
where
    R: PersonRepository + 'static,
{
    let service = Arc::new(PeopleService::new(Arc::new(repo)));
    (service.clone(), service)
}

/// Assemble the handler state for `config`.
///
/// Uses the Diesel repositories when a pool is configured and falls back to
/// in-memory storage otherwise. Built once per server so every worker shares
/// the same store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ((users, users_query), (people, people_query)) = match &config.db_pool {
        Some(pool) => (
            user_ports(DieselUserRepository::new(pool.clone())),
            people_ports(DieselPersonRepository::new(pool.clone())),
        ),
        None => (
            user_ports(InMemoryUserRepository::new()),
            people_ports(InMemoryPersonRepository::new()),
        ),
    };

    web::Data::new(HttpState::new(HttpStatePorts {
        users,
        users_query,
        people,
        people_query,
    }))
}
