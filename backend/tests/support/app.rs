//! Full application assembly over in-memory adapters.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, web};
use backend::domain::{PeopleService, UsersService};
use backend::inbound::http::configure;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::{HttpState, HttpStatePorts};
use backend::outbound::memory::{InMemoryPersonRepository, InMemoryUserRepository};
use backend::{Trace, cors};

/// Handler state backed by fresh in-memory repositories.
pub fn in_memory_state() -> web::Data<HttpState> {
    let users = Arc::new(UsersService::new(Arc::new(InMemoryUserRepository::new())));
    let people = Arc::new(PeopleService::new(Arc::new(
        InMemoryPersonRepository::new(),
    )));
    web::Data::new(HttpState::new(HttpStatePorts {
        users: users.clone(),
        users_query: users,
        people: people.clone(),
        people_query: people,
    }))
}

/// The production middleware stack around every REST route.
pub fn full_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = HealthState::new();
    health.mark_ready();
    App::new()
        .app_data(state)
        .app_data(web::Data::new(health))
        .configure(configure)
        .wrap(cors())
        .wrap(Trace)
        .wrap(NormalizePath::trim())
}
