use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::validation::FieldError;
use service::errors::ServiceError;
use tracing::{debug, error, warn};

const INTERNAL: &str = "Internal server error";

/// Error surfaced to HTTP clients. Internal failures carry no detail.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<FieldError>),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal,
}

impl ApiError {
    /// Map a service failure, logging internal ones with `context`.
    pub fn from_service(err: ServiceError, context: &str) -> Self {
        if err.is_internal() {
            error!(err = %err, context, "request failed");
        } else {
            debug!(err = %err, context, "request rejected");
        }
        Self::from(err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errs) => ApiError::Validation(errs),
            ServiceError::BadRequest(msg) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Conflict(msg) => ApiError::Conflict(msg),
            ServiceError::Db(_) => ApiError::Internal,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(reason = %rejection.body_text(), "rejected request body");
        ApiError::BadRequest("Invalid request body".into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(errors) => serde_json::json!({ "errors": errors }),
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                serde_json::json!({ "error": msg })
            }
            ApiError::Internal => serde_json::json!({ "error": INTERNAL }),
        };
        (status, Json(body)).into_response()
    }
}
