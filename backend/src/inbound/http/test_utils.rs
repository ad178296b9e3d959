//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::{PeopleService, UsersService};
use crate::inbound::http::configure;
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryPersonRepository, InMemoryUserRepository};

/// Handler state backed by fresh in-memory repositories.
pub(crate) fn in_memory_state() -> HttpState {
    let users = Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::new())));
    let people = Arc::new(PeopleService::new(Arc::new(
        InMemoryPersonRepository::new(),
    )));
    HttpState::new(HttpStatePorts {
        users: users.clone(),
        users_query: users,
        people: people.clone(),
        people_query: people,
    })
}

/// App with every REST route registered over `state`.
pub(crate) fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(HealthState::new()))
        .configure(configure)
}
