use async_trait::async_trait;
use uuid::Uuid;

use models::company::{self, NewCompany};
use models::service::{self, NewService};

use super::domain::{CompanyWithServices, ServiceWithCompany};
use crate::errors::ServiceError;

/// Persistence gateway for companies and services.
///
/// Implementations must enforce registration-number uniqueness themselves
/// (`create_company` fails with `ServiceError::Conflict`) and refuse services
/// for unknown companies (`create_service` fails with `ServiceError::NotFound`);
/// callers only pre-check.
#[async_trait]
pub trait RegistryRepository: Send + Sync {
    async fn find_company_by_registration_number(&self, registration_number: &str) -> Result<Option<company::Model>, ServiceError>;
    async fn find_company(&self, id: Uuid) -> Result<Option<company::Model>, ServiceError>;
    async fn create_company(&self, input: &NewCompany) -> Result<company::Model, ServiceError>;
    /// Every company with its services, most recently created company first.
    async fn list_companies(&self) -> Result<Vec<CompanyWithServices>, ServiceError>;
    async fn create_service(&self, input: &NewService) -> Result<service::Model, ServiceError>;
    async fn find_service(&self, id: Uuid) -> Result<Option<ServiceWithCompany>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use tokio::sync::Mutex;

    use models::company::DUPLICATE_REGISTRATION;
    use models::service::COMPANY_NOT_FOUND;

    #[derive(Default)]
    struct Store {
        companies: Vec<company::Model>, // insertion order
        services: Vec<service::Model>,
    }

    #[derive(Default)]
    pub struct MockRegistryRepository {
        store: Mutex<Store>,
        stale_reads: bool,
        unavailable: bool,
    }

    impl MockRegistryRepository {
        /// Lookups by registration number never see existing rows, as if a
        /// concurrent request inserted between check and create.
        pub fn with_stale_reads() -> Self { Self { stale_reads: true, ..Self::default() } }

        /// Every call fails like a lost database connection.
        pub fn unavailable() -> Self { Self { unavailable: true, ..Self::default() } }

        pub async fn company_count(&self) -> usize { self.store.lock().await.companies.len() }

        pub async fn service_count(&self) -> usize { self.store.lock().await.services.len() }

        fn check_available(&self) -> Result<(), ServiceError> {
            if self.unavailable {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl RegistryRepository for MockRegistryRepository {
        async fn find_company_by_registration_number(&self, registration_number: &str) -> Result<Option<company::Model>, ServiceError> {
            self.check_available()?;
            if self.stale_reads {
                return Ok(None);
            }
            let store = self.store.lock().await;
            Ok(store.companies.iter().find(|c| c.registration_number == registration_number).cloned())
        }

        async fn find_company(&self, id: Uuid) -> Result<Option<company::Model>, ServiceError> {
            self.check_available()?;
            let store = self.store.lock().await;
            Ok(store.companies.iter().find(|c| c.id == id).cloned())
        }

        async fn create_company(&self, input: &NewCompany) -> Result<company::Model, ServiceError> {
            self.check_available()?;
            input.validate()?;
            let mut store = self.store.lock().await;
            // unique key
            if store.companies.iter().any(|c| c.registration_number == input.registration_number) {
                return Err(ServiceError::Conflict(DUPLICATE_REGISTRATION.into()));
            }
            let now = Utc::now().into();
            let created = company::Model {
                id: Uuid::new_v4(),
                name: input.name.clone(),
                registration_number: input.registration_number.clone(),
                created_at: now,
                updated_at: now,
            };
            store.companies.push(created.clone());
            Ok(created)
        }

        async fn list_companies(&self) -> Result<Vec<CompanyWithServices>, ServiceError> {
            self.check_available()?;
            let store = self.store.lock().await;
            // Newest insert first; the stable sort keeps that order for equal timestamps.
            let mut companies: Vec<_> = store.companies.iter().rev().cloned().collect();
            companies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(companies
                .into_iter()
                .map(|company| {
                    let services = store.services.iter().filter(|s| s.company_id == company.id).cloned().collect();
                    CompanyWithServices { company, services }
                })
                .collect())
        }

        async fn create_service(&self, input: &NewService) -> Result<service::Model, ServiceError> {
            self.check_available()?;
            input.validate()?;
            let mut store = self.store.lock().await;
            // foreign key
            if !store.companies.iter().any(|c| c.id == input.company_id) {
                return Err(ServiceError::NotFound(COMPANY_NOT_FOUND.into()));
            }
            let now = Utc::now().into();
            let created = service::Model {
                id: Uuid::new_v4(),
                name: input.name.clone(),
                description: input.description.clone(),
                price: input.price,
                company_id: input.company_id,
                created_at: now,
                updated_at: now,
            };
            store.services.push(created.clone());
            Ok(created)
        }

        async fn find_service(&self, id: Uuid) -> Result<Option<ServiceWithCompany>, ServiceError> {
            self.check_available()?;
            let store = self.store.lock().await;
            let Some(service) = store.services.iter().find(|s| s.id == id).cloned() else { return Ok(None) };
            let company = store
                .companies
                .iter()
                .find(|c| c.id == service.company_id)
                .cloned()
                .ok_or_else(|| ServiceError::Db(format!("service {} has no owning company", id)))?;
            Ok(Some(ServiceWithCompany { service, company }))
        }
    }
}
