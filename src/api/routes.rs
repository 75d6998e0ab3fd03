// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/solve", web::post().to(handlers::solve_image))
        .route("/solve_text", web::post().to(handlers::solve_text))
        .route("/{_:.*}", web::get().to(handlers::static_file_handler));
}
