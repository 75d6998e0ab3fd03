// src/api/mod.rs
pub mod body;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::configure_routes;
pub use state::AppState;
