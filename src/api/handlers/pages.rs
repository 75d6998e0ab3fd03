// src/api/handlers/pages.rs
use actix_web::{HttpRequest, HttpResponse, Responder};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

fn serve(path: &str) -> HttpResponse {
    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}

/// GET / - the upload page
pub async fn index() -> impl Responder {
    serve("index.html")
}

pub async fn static_file_handler(req: HttpRequest) -> impl Responder {
    // trim leading '/'
    let path = req.path().trim_start_matches('/');
    if path.is_empty() {
        return serve("index.html");
    }
    serve(path)
}
