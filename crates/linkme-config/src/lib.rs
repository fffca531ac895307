//! # LinkMe Config
//!
//! Layered configuration for LinkMe: TOML files, `.env`, then
//! `LINKME__`-prefixed environment variables, validated on load.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
