use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::company::{Company, CompanyStatus};

// Request para crear una empresa
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: String,

    #[validate(length(max = 255))]
    pub contact_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    pub status: Option<CompanyStatus>,
}

// Request para actualizar una empresa existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    pub contact_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,

    pub status: Option<CompanyStatus>,
}

// Response de empresa para la API
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: CompanyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            contact_name: company.contact_name,
            email: company.email,
            phone: company.phone,
            address: company.address,
            status: company.status,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Parámetros de búsqueda (?q=término)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}
