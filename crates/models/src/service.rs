use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Select, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::company;
use crate::errors::ModelError;
use crate::validation::{Violations, DESCRIPTION_REQUIRED, NAME_REQUIRED, PRICE_POSITIVE};

pub const COMPANY_NOT_FOUND: &str = "Company not found";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub company_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Checked input for a new service under `company_id`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub company_id: Uuid,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.text("name", Some(self.name.clone()), NAME_REQUIRED);
        v.text("description", Some(self.description.clone()), DESCRIPTION_REQUIRED);
        v.require(self.price.is_finite() && self.price > 0.0, "price", PRICE_POSITIVE);
        v.finish(()).map_err(ModelError::Validation)
    }
}

/// Insert a service. The foreign key to `company` is enforced by the store;
/// a dangling `company_id` surfaces as `ModelError::MissingReference`.
pub async fn create(db: &DatabaseConnection, input: &NewService) -> Result<Model, ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.clone()),
        description: Set(input.description.clone()),
        price: Set(input.price),
        company_id: Set(input.company_id),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db)
        .await
        .map_err(|e| ModelError::from_write(e, "service already exists", Some(COMPANY_NOT_FOUND)))
}

/// Every service, oldest first. Takes no bind parameters regardless of how
/// many companies exist.
pub fn all_oldest_first() -> Select<Entity> {
    Entity::find().order_by_asc(Column::CreatedAt)
}

pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(all_oldest_first().all(db).await?)
}

/// A service together with its owning company.
pub async fn find_with_company(db: &DatabaseConnection, id: Uuid) -> Result<Option<(Model, Option<company::Model>)>, ModelError> {
    Ok(Entity::find_by_id(id)
        .find_also_related(company::Entity)
        .one(db)
        .await?)
}
