use std::collections::HashMap;

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use models::company::{self, NewCompany};
use models::service::{self, NewService};

use crate::errors::ServiceError;
use crate::registry::domain::{CompanyWithServices, ServiceWithCompany};
use crate::registry::repository::RegistryRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmRegistryRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl RegistryRepository for SeaOrmRegistryRepository {
    async fn find_company_by_registration_number(&self, registration_number: &str) -> Result<Option<company::Model>, ServiceError> {
        Ok(company::find_by_registration_number(&self.db, registration_number).await?)
    }

    async fn find_company(&self, id: Uuid) -> Result<Option<company::Model>, ServiceError> {
        Ok(company::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create_company(&self, input: &NewCompany) -> Result<company::Model, ServiceError> {
        Ok(company::create(&self.db, input).await?)
    }

    async fn list_companies(&self) -> Result<Vec<CompanyWithServices>, ServiceError> {
        let companies = company::Entity::find()
            .order_by_desc(company::Column::CreatedAt)
            .all(&self.db)
            .await?;
        let mut by_company: HashMap<Uuid, Vec<service::Model>> = HashMap::new();
        for s in service::find_all(&self.db).await? {
            by_company.entry(s.company_id).or_default().push(s);
        }
        Ok(companies
            .into_iter()
            .map(|company| {
                let services = by_company.remove(&company.id).unwrap_or_default();
                CompanyWithServices { company, services }
            })
            .collect())
    }

    async fn create_service(&self, input: &NewService) -> Result<service::Model, ServiceError> {
        Ok(service::create(&self.db, input).await?)
    }

    async fn find_service(&self, id: Uuid) -> Result<Option<ServiceWithCompany>, ServiceError> {
        match service::find_with_company(&self.db, id).await? {
            None => Ok(None),
            Some((service, Some(company))) => Ok(Some(ServiceWithCompany { service, company })),
            Some((_, None)) => Err(ServiceError::Db(format!("service {} has no owning company", id))),
        }
    }
}
