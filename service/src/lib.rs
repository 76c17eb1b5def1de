#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod app;
pub mod compose;
pub mod config;
pub mod favorites;
pub mod render;
pub mod store;
pub mod validation;

pub use rf_civic as civic;
