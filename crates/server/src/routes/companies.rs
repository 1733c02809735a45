use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use service::registry::domain::{CompanyWithServices, CreateCompanyInput};

use crate::{errors::ApiError, state::ServerState};

#[utoipa::path(
    post, path = "/companies", tag = "companies",
    request_body = crate::openapi::CreateCompanyRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CompanyWithServicesDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorResponse),
        (status = 409, description = "Registration number already exists", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create_company(
    State(state): State<ServerState>,
    payload: Result<Json<CreateCompanyInput>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyWithServices>), ApiError> {
    let Json(input) = payload?;
    state
        .registry
        .create_company(input)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|e| ApiError::from_service(e, "create company"))
}

#[utoipa::path(
    get, path = "/companies", tag = "companies",
    responses(
        (status = 200, description = "Companies with services, newest first", body = [crate::openapi::CompanyWithServicesDoc]),
        (status = 500, description = "Internal server error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn list_companies(State(state): State<ServerState>) -> Result<Json<Vec<CompanyWithServices>>, ApiError> {
    state
        .registry
        .list_companies()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "list companies"))
}
