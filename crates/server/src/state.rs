use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::registry::{
    repo::seaorm::SeaOrmRegistryRepository, repository::RegistryRepository, RegistryService,
};

pub type SharedRegistry = Arc<RegistryService<dyn RegistryRepository>>;

/// Router state: the registry service over an injected repository.
#[derive(Clone)]
pub struct ServerState {
    pub registry: SharedRegistry,
}

impl ServerState {
    pub fn new(repo: Arc<dyn RegistryRepository>) -> Self {
        Self { registry: Arc::new(RegistryService::new(repo)) }
    }

    /// Registry backed by PostgreSQL through SeaORM.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRegistryRepository { db }))
    }
}
