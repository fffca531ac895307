//! # LinkMe Server Library
//!
//! Dependency injection wiring for the LinkMe data layer.

pub mod di;
