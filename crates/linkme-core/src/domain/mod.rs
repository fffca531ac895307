//! Domain entities for the follow graph and the activity log.

pub mod activity;
pub mod relation;

pub use activity::*;
pub use relation::*;
