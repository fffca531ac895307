//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).

pub mod activity_repository_impl;
pub mod relation_repository_impl;

pub use activity_repository_impl::ActivityRepositoryImpl;
pub use relation_repository_impl::RelationRepositoryImpl;
