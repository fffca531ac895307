//! DAO (Data Access Object) layer.
//!
//! DAOs issue the storage queries and own the pool handle. Each DAO
//! interface has one implementation per storage technology under `impl/`.
//!
//! Hierarchy:
//! ```text
//! Service → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod activity_dao;
pub mod r#impl;
pub mod relation_dao;

pub use activity_dao::{ActivityDao, RecentActivityRow};
pub use r#impl::{MySqlActivityDaoImpl, MySqlRelationDaoImpl};
pub use relation_dao::{RelationDao, RelationRow};
