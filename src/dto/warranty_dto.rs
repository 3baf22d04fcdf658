use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::warranty::{Warranty, WarrantyStatus, WarrantyWithDetails};
use crate::services::status;

// Request para crear una garantía. `warranty_end` no se envía: se deriva
// de warranty_start + warranty_period en el controller.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateWarrantyRequest {
    pub job_id: Uuid,
    pub motor_id: Uuid,
    pub company_id: Uuid,

    pub warranty_start: String,

    #[validate(range(min = 1, max = 120))]
    pub warranty_period: i32,

    #[validate(length(max = 2000))]
    pub work_description: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

// Request para actualizar una garantía existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWarrantyRequest {
    pub status: Option<WarrantyStatus>,

    #[validate(length(max = 2000))]
    pub work_description: Option<String>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

// Request para extender una garantía
#[derive(Debug, Deserialize, Validate)]
pub struct ExtendWarrantyRequest {
    #[validate(range(min = 1, max = 60))]
    pub extension_months: i32,

    #[validate(length(min = 1, max = 500))]
    pub extension_reason: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

// Response de garantía con relaciones y cobertura derivada
#[derive(Debug, Serialize)]
pub struct WarrantyResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub motor_id: Uuid,
    pub company_id: Uuid,
    pub status: WarrantyStatus,
    pub warranty_start: NaiveDate,
    pub warranty_end: NaiveDate,
    pub warranty_period: i32,
    pub original_end_date: Option<NaiveDate>,
    pub extension_months: i32,
    pub extension_reason: Option<String>,
    pub work_description: Option<String>,
    pub notes: Option<String>,
    pub company_name: Option<String>,
    pub motor_tag: Option<String>,
    pub job_number: Option<String>,
    // derivado de warranty_end al momento de la consulta; puede marcar
    // expirada una garantía cuyo status almacenado sigue en `active`
    pub days_remaining: i64,
    pub expired: bool,
    pub expiring_soon: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WarrantyResponse {
    pub fn from_warranty(warranty: Warranty, today: NaiveDate) -> Self {
        let coverage = status::warranty_coverage(warranty.warranty_end, today);
        Self {
            id: warranty.id,
            job_id: warranty.job_id,
            motor_id: warranty.motor_id,
            company_id: warranty.company_id,
            status: warranty.status,
            warranty_start: warranty.warranty_start,
            warranty_end: warranty.warranty_end,
            warranty_period: warranty.warranty_period,
            original_end_date: warranty.original_end_date,
            extension_months: warranty.extension_months,
            extension_reason: warranty.extension_reason,
            work_description: warranty.work_description,
            notes: warranty.notes,
            company_name: None,
            motor_tag: None,
            job_number: None,
            days_remaining: coverage.days_remaining,
            expired: coverage.expired,
            expiring_soon: coverage.expiring_soon,
            created_at: warranty.created_at,
            updated_at: warranty.updated_at,
        }
    }

    pub fn from_details(details: WarrantyWithDetails, today: NaiveDate) -> Self {
        let mut response = WarrantyResponse::from_warranty(details.warranty, today);
        response.company_name = details.company_name;
        response.motor_tag = details.motor_tag;
        response.job_number = details.job_number;
        response
    }
}
