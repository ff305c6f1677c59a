//! Terminal front-end: configuration, effect wiring and the input loop.
mod app;
mod config;
mod effects;
mod ui;

pub use app::run_app;
