use serde::{Deserialize, Serialize};
use serde_json::Value;

use models::validation::{
    FieldError, Violations, COMPANY_ID_REQUIRED, DESCRIPTION_REQUIRED, NAME_REQUIRED, PRICE_POSITIVE,
    REGISTRATION_NUMBER_REQUIRED,
};
use models::{company, service};

/// Raw `POST /companies` payload. Fields are optional so that missing ones
/// are reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
}

impl CreateCompanyInput {
    pub fn validate(self) -> Result<company::NewCompany, Vec<FieldError>> {
        let mut v = Violations::new();
        let name = v.text("name", self.name, NAME_REQUIRED);
        let registration_number = v.text("registrationNumber", self.registration_number, REGISTRATION_NUMBER_REQUIRED);
        v.finish(company::NewCompany { name, registration_number })
    }
}

/// Raw `POST /services` payload. `price` may be a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub company_id: Option<String>,
}

/// A service payload that passed field rules; the company is not resolved yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub company_id: String,
}

impl CreateServiceInput {
    pub fn validate(self) -> Result<ServiceDraft, Vec<FieldError>> {
        let mut v = Violations::new();
        let name = v.text("name", self.name, NAME_REQUIRED);
        let description = v.text("description", self.description, DESCRIPTION_REQUIRED);
        let price = v.positive_float("price", self.price.as_ref(), PRICE_POSITIVE);
        let company_id = v.text("companyId", self.company_id, COMPANY_ID_REQUIRED);
        v.finish(ServiceDraft { name, description, price, company_id })
    }
}

/// A company with every service it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyWithServices {
    #[serde(flatten)]
    pub company: company::Model,
    pub services: Vec<service::Model>,
}

/// A service with its owning company nested under `company`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceWithCompany {
    #[serde(flatten)]
    pub service: service::Model,
    pub company: company::Model,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn company_input_reports_both_missing_fields() {
        let input: CreateCompanyInput = serde_json::from_value(json!({})).unwrap();
        let errs = input.validate().unwrap_err();
        assert_eq!(errs, vec![
            FieldError::body("name", NAME_REQUIRED),
            FieldError::body("registrationNumber", REGISTRATION_NUMBER_REQUIRED),
        ]);
    }

    #[test]
    fn company_input_reads_camel_case() {
        let input: CreateCompanyInput =
            serde_json::from_value(json!({"name": "Acme", "registrationNumber": "RN-1"})).unwrap();
        let new = input.validate().unwrap();
        assert_eq!(new.name, "Acme");
        assert_eq!(new.registration_number, "RN-1");
    }

    #[test]
    fn service_input_reports_every_rule_in_order() {
        let input: CreateServiceInput =
            serde_json::from_value(json!({"name": "", "price": -3, "companyId": null})).unwrap();
        let paths: Vec<_> = input.validate().unwrap_err().into_iter().map(|e| e.path).collect();
        assert_eq!(paths, ["name", "description", "price", "companyId"]);
    }

    #[test]
    fn service_input_accepts_numeric_string_price() {
        let input: CreateServiceInput = serde_json::from_value(json!({
            "name": "Audit", "description": "Annual audit", "price": "500", "companyId": "abc"
        }))
        .unwrap();
        let draft = input.validate().unwrap();
        assert_eq!(draft.price, 500.0);
        assert_eq!(draft.company_id, "abc");
    }
}
