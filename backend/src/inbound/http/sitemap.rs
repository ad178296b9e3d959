//! Root endpoint listing every documented route.
//!
//! The page is rendered from the generated OpenAPI document, so new handlers
//! appear as soon as they are registered in [`crate::doc::ApiDoc`].

use std::sync::OnceLock;

use actix_web::{HttpResponse, get, http::header::ContentType};
use utoipa::OpenApi;
use utoipa::openapi::path::PathItem;

use crate::doc::ApiDoc;

static SITEMAP: OnceLock<String> = OnceLock::new();

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the sitemap page for `paths` in document order.
pub(crate) fn render<'a>(paths: impl IntoIterator<Item = (&'a str, Vec<&'static str>)>) -> String {
    let mut links = String::new();
    let mut others = String::new();
    for (path, methods) in paths {
        let path = escape(path);
        let is_link = methods.contains(&"GET") && !path.contains('{');
        if is_link {
            links.push_str(&format!("<li><a href=\"{path}\">{path}</a></li>"));
        }
        let remaining: Vec<&str> = methods
            .into_iter()
            .filter(|method| !(is_link && *method == "GET"))
            .collect();
        if !remaining.is_empty() {
            others.push_str(&format!("<li>{} {path}</li>", remaining.join(", ")));
        }
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>API sitemap</title></head>\
         <body><h1>Endpoints</h1><ul>{links}</ul><h2>Other routes</h2><ul>{others}</ul>\
         </body></html>"
    )
}

fn sitemap_html() -> &'static str {
    SITEMAP.get_or_init(|| {
        let doc = ApiDoc::openapi();
        render(
            doc.paths
                .paths
                .iter()
                .map(|(path, item)| (path.as_str(), methods(item))),
        )
    })
}

/// HTML index of every route the API serves.
#[utoipa::path(
    get,
    path = "/",
    tags = ["sitemap"],
    responses((status = 200, description = "HTML route listing", content_type = "text/html"))
)]
#[get("/")]
pub async fn sitemap() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(sitemap_html())
}
