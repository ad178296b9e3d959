//! Request middleware for cross-cutting request lifecycle concerns.

pub mod trace;

pub use trace::Trace;

use actix_cors::Cors;
use actix_web::http::Method;

use crate::domain::TRACE_ID_HEADER;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Cross-origin policy: any origin, the REST verbs and any request header.
///
/// Responses advertise `Access-Control-Allow-Origin: *` and expose the
/// trace-id header so browser clients can report it.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::cors;
///
/// let app = App::new().wrap(cors());
/// ```
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_any_header()
        .expose_headers([TRACE_ID_HEADER])
        .max_age(PREFLIGHT_MAX_AGE_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::http::header::{
        ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS,
        ACCESS_CONTROL_REQUEST_METHOD, HeaderMap, HeaderName, ORIGIN,
    };
    use actix_web::{App, HttpResponse, test, web};
    use rstest::rstest;

    fn header(headers: &HeaderMap, name: HeaderName) -> Option<&str> {
        headers.get(name).and_then(|value| value.to_str().ok())
    }

    #[rstest]
    #[actix_web::test]
    async fn cross_origin_requests_get_the_wildcard_origin() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/users", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/users")
                .insert_header((ORIGIN, "https://example.test"))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(header(res.headers(), ACCESS_CONTROL_ALLOW_ORIGIN), Some("*"));
        let exposed = header(res.headers(), ACCESS_CONTROL_EXPOSE_HEADERS).expect("expose header");
        assert!(exposed.to_ascii_lowercase().contains(TRACE_ID_HEADER));
    }

    #[rstest]
    #[actix_web::test]
    async fn preflights_list_the_rest_verbs() {
        let app = test::init_service(
            App::new()
                .wrap(cors())
                .route("/users", web::post().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let res = test::call_service(
            &app,
            test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/users")
                .insert_header((ORIGIN, "http://localhost:5173"))
                .insert_header((ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
                .to_request(),
        )
        .await;

        assert!(res.status().is_success());
        let allowed = header(res.headers(), ACCESS_CONTROL_ALLOW_METHODS).expect("allow methods");
        for verb in ["GET", "POST", "DELETE"] {
            assert!(allowed.contains(verb), "{verb} missing from {allowed}");
        }
    }
}
