use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::company::DUPLICATE_REGISTRATION;
use models::service::{self as service_model, NewService, COMPANY_NOT_FOUND};

use super::domain::{CompanyWithServices, CreateCompanyInput, CreateServiceInput, ServiceWithCompany};
use super::repository::RegistryRepository;
use crate::errors::ServiceError;

/// Registry business service independent of web framework.
///
/// Works against any [`RegistryRepository`], including `dyn` ones, so the
/// HTTP layer can hold a single shared instance.
pub struct RegistryService<R: RegistryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RegistryRepository + ?Sized> RegistryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a company after validating the payload.
    ///
    /// The registration-number lookup is only a fast path; the repository's
    /// unique constraint decides when two requests race.
    ///
    /// # Examples
    /// ```
    /// use service::registry::{RegistryService, repository::mock::MockRegistryRepository};
    /// use service::registry::domain::CreateCompanyInput;
    /// use std::sync::Arc;
    /// let svc = RegistryService::new(Arc::new(MockRegistryRepository::default()));
    /// let input = CreateCompanyInput { name: Some("Acme".into()), registration_number: Some("RN-1".into()) };
    /// let created = tokio_test::block_on(svc.create_company(input.clone())).unwrap();
    /// assert_eq!(created.company.name, "Acme");
    /// assert!(created.services.is_empty());
    /// assert!(tokio_test::block_on(svc.create_company(input)).is_err());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create_company(&self, input: CreateCompanyInput) -> Result<CompanyWithServices, ServiceError> {
        let new = input.validate().map_err(ServiceError::Validation)?;
        if let Some(existing) = self.repo.find_company_by_registration_number(&new.registration_number).await? {
            debug!(company_id = %existing.id, "registration number taken");
            return Err(ServiceError::Conflict(DUPLICATE_REGISTRATION.into()));
        }
        let company = self.repo.create_company(&new).await?;
        info!(company_id = %company.id, registration_number = %company.registration_number, "company_created");
        Ok(CompanyWithServices { company, services: Vec::new() })
    }

    /// All companies with their services, newest first.
    pub async fn list_companies(&self) -> Result<Vec<CompanyWithServices>, ServiceError> {
        let companies = self.repo.list_companies().await?;
        debug!(count = companies.len(), "companies listed");
        Ok(companies)
    }

    /// Create a service under an existing company.
    #[instrument(skip(self, input))]
    pub async fn create_service(&self, input: CreateServiceInput) -> Result<service_model::Model, ServiceError> {
        let draft = input.validate().map_err(ServiceError::Validation)?;
        // An id that is not a UUID cannot name a stored company.
        let company_id = Uuid::parse_str(draft.company_id.trim())
            .map_err(|_| ServiceError::NotFound(COMPANY_NOT_FOUND.into()))?;
        if self.repo.find_company(company_id).await?.is_none() {
            return Err(ServiceError::NotFound(COMPANY_NOT_FOUND.into()));
        }
        let created = self
            .repo
            .create_service(&NewService {
                name: draft.name,
                description: draft.description,
                price: draft.price,
                company_id,
            })
            .await?;
        info!(service_id = %created.id, company_id = %company_id, price = created.price, "service_created");
        Ok(created)
    }

    /// Fetch a service and its owning company by path id.
    #[instrument(skip(self))]
    pub async fn get_service(&self, id: &str) -> Result<ServiceWithCompany, ServiceError> {
        if id.is_empty() {
            return Err(ServiceError::BadRequest("Service ID is required".into()));
        }
        let Ok(id) = Uuid::parse_str(id) else {
            return Err(ServiceError::not_found("Service"));
        };
        self.repo.find_service(id).await?.ok_or_else(|| ServiceError::not_found("Service"))
    }
}
