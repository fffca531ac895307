//! # LinkMe Repository
//!
//! Data access for the follow graph and the recent-activity log:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn RelationRepository> / Arc<dyn ActivityRepository>
//! RelationRepositoryImpl / ActivityRepositoryImpl   (row ↔ domain translation)
//!   ↓  Arc<dyn RelationDao> / Arc<dyn ActivityDao>
//! MySqlRelationDaoImpl / MySqlActivityDaoImpl        (SQLx queries)
//!   ↓
//! MySQL
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                        ← RelationRepository, ActivityRepository
//!   impl/
//!     relation_repository_impl.rs
//!     activity_repository_impl.rs
//!   dao/
//!     relation_dao.rs                ← RelationDao trait, RelationRow
//!     activity_dao.rs                ← ActivityDao trait, RecentActivityRow
//!     impl/mysql/
//!       relation_dao_impl.rs         ← MySqlRelationDaoImpl
//!       activity_dao_impl.rs         ← MySqlActivityDaoImpl
//!   pool.rs                          ← DatabasePool
//! ```
//!
//! DAOs log every storage failure once at `error` level and return it
//! unchanged; repositories never log errors a second time.

pub mod dao;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{
    ActivityDao, MySqlActivityDaoImpl, MySqlRelationDaoImpl, RecentActivityRow, RelationDao,
    RelationRow,
};
pub use pool::*;
pub use r#impl::{ActivityRepositoryImpl, RelationRepositoryImpl};
pub use traits::*;
