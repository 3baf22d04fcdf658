use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::job::{Job, JobPriority, JobStatus, JobWithDetails};
use crate::services::status;

// Request para crear un trabajo. Las fechas llegan como strings de
// formulario y pasan por una sola etapa de parseo validante en el
// controller antes de cualquier cálculo.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    pub company_id: Uuid,
    pub motor_id: Uuid,
    pub technician_id: Option<Uuid>,

    #[validate(length(min = 3, max = 2000))]
    pub description: String,

    pub priority: Option<JobPriority>,

    pub start_date: Option<String>,
    pub due_date: Option<String>,

    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
}

// Request para actualizar un trabajo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobRequest {
    pub technician_id: Option<Uuid>,

    #[validate(length(min = 3, max = 2000))]
    pub description: Option<String>,

    pub status: Option<JobStatus>,
    pub priority: Option<JobPriority>,

    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub completed_date: Option<String>,

    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub parts_cost: Option<Decimal>,
    pub final_cost: Option<Decimal>,

    #[validate(range(min = 0, max = 100))]
    pub progress_percentage: Option<i32>,
}

// Response de trabajo con relaciones y estado derivado para mostrar
#[derive(Debug, Serialize)]
pub struct JobResponse {
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
    pub progress_percentage: i32,
    pub company_name: Option<String>,
    pub motor_tag: Option<String>,
    pub technician_name: Option<String>,
    // derivado de due_date al momento de la consulta, no persistido
    pub days_until_due: Option<i64>,
    pub overdue: bool,
    pub due_soon: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobResponse {
    pub fn from_job(job: Job, today: NaiveDate) -> Self {
        let due = status::job_due_info(job.due_date, today);
        let progress = job
            .progress_percentage
            .unwrap_or_else(|| job.status.default_progress());
        Self {
            id: job.id,
            job_number: job.job_number,
            company_id: job.company_id,
            motor_id: job.motor_id,
            technician_id: job.technician_id,
            description: job.description,
            status: job.status,
            priority: job.priority,
            start_date: job.start_date,
            due_date: job.due_date,
            completed_date: job.completed_date,
            labor_hours: job.labor_hours,
            labor_rate: job.labor_rate,
            parts_cost: job.parts_cost,
            estimated_cost: job.estimated_cost,
            final_cost: job.final_cost,
            progress_percentage: progress,
            company_name: None,
            motor_tag: None,
            technician_name: None,
            days_until_due: due.map(|d| d.days_until_due),
            overdue: due.map(|d| d.overdue).unwrap_or(false),
            due_soon: due.map(|d| d.due_soon).unwrap_or(false),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }

    pub fn from_details(details: JobWithDetails, today: NaiveDate) -> Self {
        let mut response = JobResponse::from_job(details.job, today);
        response.company_name = details.company_name;
        response.motor_tag = details.motor_tag;
        response.technician_name = details.technician_name;
        response
    }
}
