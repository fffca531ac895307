//! MySQL DAO implementations.

mod activity_dao_impl;
mod relation_dao_impl;

pub use activity_dao_impl::MySqlActivityDaoImpl;
pub use relation_dao_impl::MySqlRelationDaoImpl;
