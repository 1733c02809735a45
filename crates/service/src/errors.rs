use models::errors::ModelError;
use models::validation::{summarize, FieldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Failures the caller could not have caused; reported without detail.
    pub fn is_internal(&self) -> bool { matches!(self, Self::Db(_)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(errs) => Self::Validation(errs),
            ModelError::Conflict(msg) => Self::Conflict(msg),
            ModelError::MissingReference(msg) => Self::NotFound(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_onto_service_errors() {
        assert!(matches!(ServiceError::from(ModelError::Conflict("dup".into())), ServiceError::Conflict(m) if m == "dup"));
        assert!(matches!(ServiceError::from(ModelError::MissingReference("Company not found".into())), ServiceError::NotFound(_)));
        assert!(ServiceError::from(ModelError::Db("boom".into())).is_internal());
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(ServiceError::not_found("Service").to_string(), "not found: Service not found");
    }
}
