mod app;
mod cli;
mod config;
mod effects;
mod logging;
mod persistence;
mod router;
mod ui;

pub use app::run_app;
