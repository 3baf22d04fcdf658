//! Modelo de Job
//!
//! Trabajo de reparación sobre un motor. El número de documento
//! (`JOB-2025-001`) se asigna al crear y nunca se reasigna. El ciclo de
//! vida avanza solo por acción explícita:
//! pending → in_progress → completed → delivered, más under_warranty.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de un trabajo (enumeración cerrada)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Delivered,
    UnderWarranty,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Delivered => "delivered",
            JobStatus::UnderWarranty => "under_warranty",
        }
    }

    /// Progreso inferido cuando la fila no trae porcentaje almacenado
    pub fn default_progress(&self) -> i32 {
        match self {
            JobStatus::Pending => 10,
            JobStatus::InProgress => 50,
            JobStatus::Completed => 85,
            JobStatus::Delivered => 100,
            JobStatus::UnderWarranty => 100,
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(JobStatus::Pending),
            "in_progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            "delivered" => Ok(JobStatus::Delivered),
            "under_warranty" => Ok(JobStatus::UnderWarranty),
            other => Err(format!("estado de trabajo desconocido: '{}'", other)),
        }
    }
}

/// Prioridad de un trabajo (enumeración cerrada)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobPriority {
    Low,
    Normal,
    High,
    Urgent,
}

/// Job principal - mapea exactamente a la tabla jobs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub job_number: String,
    pub company_id: Uuid,
    pub motor_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub description: String,
    pub status: JobStatus,
    pub priority: JobPriority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
    pub estimated_cost: Option<Decimal>,
    pub final_cost: Option<Decimal>,
    pub progress_percentage: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job con los nombres de sus relaciones para listados.
/// Las relaciones opcionales entran por LEFT JOIN: un técnico borrado
/// aparece como None, nunca como error.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobWithDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: Job,
    pub company_name: Option<String>,
    pub motor_tag: Option<String>,
    pub technician_name: Option<String>,
}

/// Cambios parciales ya validados para un trabajo existente;
/// None deja el campo como está
#[derive(Debug, Clone, Default)]
pub struct JobChanges {
    pub technician_id: Option<Uuid>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
    pub priority: Option<JobPriority>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
    pub estimated_cost: Option<Decimal>,
    pub final_cost: Option<Decimal>,
    pub progress_percentage: Option<i32>,
}

/// Datos ya validados y tipados para insertar un trabajo nuevo
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_id: Uuid,
    pub motor_id: Uuid,
    pub technician_id: Option<Uuid>,
    pub description: String,
    pub priority: JobPriority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
    pub estimated_cost: Decimal,
}
