//! Shared library for `shotlog`
//! Contains the shot models, record store, statistics and reporting used by the CLI

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
