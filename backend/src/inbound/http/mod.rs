//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod people;
pub mod schemas;
pub mod sitemap;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

use self::error::{json_error_handler, path_error_handler};

/// Register every REST handler and the extractor error policies.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>` as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let app = App::new().configure(backend::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(sitemap::sitemap)
        .service(health::ready)
        .service(health::live)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::delete_user)
        .service(people::list_people)
        .service(people::get_person)
        .service(people::create_person)
        .service(people::delete_person);
}
