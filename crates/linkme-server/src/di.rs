//! Dependency injection module using Shaku.
//!
//! One module holds the whole data layer: the pool, both DAOs, and both
//! repositories. Callers resolve the repository interfaces only.

use linkme_core::{module, HasComponent};
use linkme_repository::{
    ActivityRepository, ActivityRepositoryImpl, DatabasePool, DatabasePoolInterface,
    DatabasePoolParameters, MySqlActivityDaoImpl, MySqlRelationDaoImpl, RelationRepository,
    RelationRepositoryImpl,
};
use std::sync::Arc;

module! {
    pub DataModule {
        components = [
            DatabasePool,
            MySqlRelationDaoImpl,
            MySqlActivityDaoImpl,
            RelationRepositoryImpl,
            ActivityRepositoryImpl,
        ],
        providers = [],
    }
}

impl DataModule {
    /// Resolves the relation repository.
    #[must_use]
    pub fn relation_repository(&self) -> Arc<dyn RelationRepository> {
        HasComponent::<dyn RelationRepository>::resolve(self)
    }

    /// Resolves the activity repository.
    #[must_use]
    pub fn activity_repository(&self) -> Arc<dyn ActivityRepository> {
        HasComponent::<dyn ActivityRepository>::resolve(self)
    }

    /// Resolves the shared pool.
    #[must_use]
    pub fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        HasComponent::<dyn DatabasePoolInterface>::resolve(self)
    }
}

/// Builds the data module around an already connected pool.
#[must_use]
pub fn build_data_module(pool: &DatabasePool) -> Arc<DataModule> {
    let module = DataModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: pool.inner().clone(),
        })
        .build();

    Arc::new(module)
}
