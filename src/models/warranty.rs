//! Modelo de Warranty
//!
//! Garantía sobre un trabajo entregado. `warranty_end` siempre es
//! derivable como `warranty_start + warranty_period` meses más las
//! extensiones acumuladas; `original_end_date` guarda el fin previo a la
//! primera extensión y no se sobrescribe después.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una garantía (enumeración cerrada)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WarrantyStatus {
    Active,
    Expired,
    Claimed,
    Extended,
}

impl WarrantyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarrantyStatus::Active => "active",
            WarrantyStatus::Expired => "expired",
            WarrantyStatus::Claimed => "claimed",
            WarrantyStatus::Extended => "extended",
        }
    }
}

impl std::str::FromStr for WarrantyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(WarrantyStatus::Active),
            "expired" => Ok(WarrantyStatus::Expired),
            "claimed" => Ok(WarrantyStatus::Claimed),
            "extended" => Ok(WarrantyStatus::Extended),
            other => Err(format!("estado de garantía desconocido: '{}'", other)),
        }
    }
}

/// Warranty principal - mapea exactamente a la tabla warranties
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Warranty {
    pub id: Uuid,
    pub job_id: Uuid,
    pub motor_id: Uuid,
    pub company_id: Uuid,
    pub status: WarrantyStatus,
    pub warranty_start: NaiveDate,
    pub warranty_end: NaiveDate,
    /// Período contractual en meses desde warranty_start
    pub warranty_period: i32,
    pub original_end_date: Option<NaiveDate>,
    pub extension_months: i32,
    pub extension_reason: Option<String>,
    pub work_description: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Warranty con sus relaciones para listados
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WarrantyWithDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub warranty: Warranty,
    pub company_name: Option<String>,
    pub motor_tag: Option<String>,
    pub job_number: Option<String>,
}

/// Datos ya validados y tipados para insertar una garantía nueva
#[derive(Debug, Clone)]
pub struct NewWarranty {
    pub job_id: Uuid,
    pub motor_id: Uuid,
    pub company_id: Uuid,
    pub warranty_start: NaiveDate,
    pub warranty_end: NaiveDate,
    pub warranty_period: i32,
    pub work_description: Option<String>,
    pub notes: Option<String>,
}
