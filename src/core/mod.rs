//! Core module: shot models, record store, statistics and reporting

pub mod config;
pub mod export;
pub mod form;
pub mod glossary;
pub mod models;
pub mod report;
pub mod stats;
pub mod store;

/// Returns the current version of the `shotlog` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
