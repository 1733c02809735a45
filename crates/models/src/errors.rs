use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::validation::{summarize, FieldError};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", summarize(.0))]
    Validation(Vec<FieldError>),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("missing reference: {0}")]
    MissingReference(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Sort a write failure into constraint violations and everything else.
    /// A foreign-key violation only becomes `MissingReference` when the table
    /// has a reference to miss; otherwise it stays a database error.
    pub fn from_write(err: DbErr, conflict: &str, missing: Option<&str>) -> Self {
        classify(err.sql_err(), err.to_string(), conflict, missing)
    }
}

fn classify(sql: Option<SqlErr>, detail: String, conflict: &str, missing: Option<&str>) -> ModelError {
    match (sql, missing) {
        (Some(SqlErr::UniqueConstraintViolation(_)), _) => ModelError::Conflict(conflict.to_string()),
        (Some(SqlErr::ForeignKeyConstraintViolation(_)), Some(msg)) => ModelError::MissingReference(msg.to_string()),
        _ => ModelError::Db(detail),
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_is_conflict() {
        let e = classify(Some(SqlErr::UniqueConstraintViolation("dup key".into())), "dup key".into(), "taken", None);
        assert!(matches!(e, ModelError::Conflict(m) if m == "taken"));
    }

    #[test]
    fn foreign_key_violation_needs_a_reference_message() {
        let fk = || Some(SqlErr::ForeignKeyConstraintViolation("fk_service_company".into()));
        let e = classify(fk(), "fk".into(), "taken", Some("Company not found"));
        assert!(matches!(e, ModelError::MissingReference(m) if m == "Company not found"));

        let e = classify(fk(), "fk".into(), "taken", None);
        assert!(matches!(e, ModelError::Db(d) if d == "fk"));
    }

    #[test]
    fn other_failures_stay_database_errors() {
        let e = ModelError::from_write(DbErr::Custom("connection reset".into()), "taken", None);
        assert!(matches!(e, ModelError::Db(_)));
    }
}
