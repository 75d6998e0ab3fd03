// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod models;
pub mod providers;
pub mod solver;
pub mod validation;
