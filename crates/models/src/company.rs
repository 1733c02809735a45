use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::service;
use crate::validation::{Violations, NAME_REQUIRED, REGISTRATION_NUMBER_REQUIRED};

pub const DUPLICATE_REGISTRATION: &str = "Registration number already exists";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Services,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Services => Entity::has_many(service::Entity).into(),
        }
    }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Services.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Checked input for a new company.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub registration_number: String,
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut v = Violations::new();
        v.text("name", Some(self.name.clone()), NAME_REQUIRED);
        v.text("registrationNumber", Some(self.registration_number.clone()), REGISTRATION_NUMBER_REQUIRED);
        v.finish(()).map_err(ModelError::Validation)
    }
}

pub async fn find_by_registration_number(db: &DatabaseConnection, registration_number: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::RegistrationNumber.eq(registration_number))
        .one(db)
        .await?)
}

/// Insert a company. A duplicate registration number surfaces as
/// `ModelError::Conflict` whether or not the caller checked beforehand.
pub async fn create(db: &DatabaseConnection, input: &NewCompany) -> Result<Model, ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.clone()),
        registration_number: Set(input.registration_number.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db)
        .await
        .map_err(|e| ModelError::from_write(e, DUPLICATE_REGISTRATION, None))
}
