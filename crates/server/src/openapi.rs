use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String, pub message: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDoc { pub path: String, pub msg: String, pub location: String }

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse { pub errors: Vec<FieldErrorDoc> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest { pub name: String, pub registration_number: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    /// Strictly positive; numeric strings are accepted too.
    pub price: f64,
    pub company_id: Uuid,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDoc {
    pub id: Uuid,
    pub name: String,
    pub registration_number: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDoc {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub company_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyWithServicesDoc {
    pub id: Uuid,
    pub name: String,
    pub registration_number: String,
    pub created_at: String,
    pub updated_at: String,
    pub services: Vec<ServiceDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWithCompanyDoc {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub company_id: Uuid,
    pub created_at: String,
    pub updated_at: String,
    pub company: CompanyDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::create_company,
        crate::routes::companies::list_companies,
        crate::routes::services::create_service,
        crate::routes::services::get_service
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            FieldErrorDoc,
            ValidationErrorResponse,
            CreateCompanyRequest,
            CreateServiceRequest,
            CompanyDoc,
            ServiceDoc,
            CompanyWithServicesDoc,
            ServiceWithCompanyDoc
        )
    ),
    tags(
        (name = "health"),
        (name = "companies"),
        (name = "services")
    )
)]
pub struct ApiDoc;
