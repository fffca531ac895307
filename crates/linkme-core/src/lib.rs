//! # LinkMe Core
//!
//! Core types, domain entities, and error definitions shared by every
//! LinkMe crate: the follow-graph and activity entities, the pagination
//! parameter, and the unified error type returned from the data layer.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
