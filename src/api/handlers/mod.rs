// src/api/handlers/mod.rs
mod health;
mod pages;
mod solve;

pub use health::health_check;
pub use pages::{index, static_file_handler};
pub use solve::{solve_image, solve_text};
