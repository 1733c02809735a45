use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use service::registry::domain::{CreateServiceInput, ServiceWithCompany};

use crate::{errors::ApiError, state::ServerState};

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::CreateServiceRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorResponse),
        (status = 404, description = "Company not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create_service(
    State(state): State<ServerState>,
    payload: Result<Json<CreateServiceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<models::service::Model>), ApiError> {
    let Json(input) = payload?;
    state
        .registry
        .create_service(input)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|e| ApiError::from_service(e, "create service"))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service with its company", body = crate::openapi::ServiceWithCompanyDoc),
        (status = 400, description = "Service ID is required", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get_service(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceWithCompany>, ApiError> {
    state
        .registry
        .get_service(&id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "get service"))
}

/// `GET /services/` with the id segment left empty.
pub async fn missing_service_id(State(state): State<ServerState>) -> Result<Json<ServiceWithCompany>, ApiError> {
    get_service(State(state), Path(String::new())).await
}
