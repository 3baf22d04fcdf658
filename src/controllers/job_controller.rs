use chrono::{Datelike, Local, NaiveDate};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::job_dto::{CreateJobRequest, JobResponse, UpdateJobRequest};
use crate::models::job::{JobChanges, JobPriority, JobStatus, NewJob};
use crate::repositories::job_repository::JobRepository;
use crate::services::billing;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_date;

pub struct JobController {
    repository: JobRepository,
}

impl JobController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: JobRepository::new(pool),
        }
    }

    /// Crear un trabajo: una sola etapa de parseo validante del formulario,
    /// costo estimado calculado en el servidor y número JOB-YYYY-NNN
    /// asignado atómicamente junto con el insert.
    pub async fn create(&self, request: CreateJobRequest) -> Result<JobResponse, AppError> {
        request.validate()?;

        let start_date = parse_optional_date(request.start_date.as_deref(), "start_date")?;
        let due_date = parse_optional_date(request.due_date.as_deref(), "due_date")?;

        let estimated_cost = billing::estimated_cost(
            request.labor_hours,
            request.labor_rate,
            request.parts_cost,
        );

        let today = Local::now().date_naive();
        let new_job = NewJob {
            company_id: request.company_id,
            motor_id: request.motor_id,
            technician_id: request.technician_id,
            description: request.description,
            priority: request.priority.unwrap_or(JobPriority::Normal),
            start_date,
            due_date,
            labor_hours: request.labor_hours,
            labor_rate: request.labor_rate,
            parts_cost: request.parts_cost,
            estimated_cost,
        };

        let job = self.repository.create(new_job, today.year()).await?;

        Ok(JobResponse::from_job(job, today))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<JobResponse, AppError> {
        let job = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Job", &id.to_string()))?;

        Ok(JobResponse::from_job(job, Local::now().date_naive()))
    }

    pub async fn list(&self) -> Result<Vec<JobResponse>, AppError> {
        let today = Local::now().date_naive();
        let jobs = self.repository.list_all().await?;
        Ok(jobs
            .into_iter()
            .map(|j| JobResponse::from_details(j, today))
            .collect())
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<JobResponse>, AppError> {
        let today = Local::now().date_naive();
        let jobs = self.repository.list_by_company(company_id).await?;
        Ok(jobs
            .into_iter()
            .map(|j| JobResponse::from_details(j, today))
            .collect())
    }

    pub async fn list_by_status(&self, status: JobStatus) -> Result<Vec<JobResponse>, AppError> {
        let today = Local::now().date_naive();
        let jobs = self.repository.list_by_status(status).await?;
        Ok(jobs
            .into_iter()
            .map(|j| JobResponse::from_details(j, today))
            .collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<JobResponse>, AppError> {
        let today = Local::now().date_naive();
        let jobs = self.repository.search(term).await?;
        Ok(jobs
            .into_iter()
            .map(|j| JobResponse::from_details(j, today))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateJobRequest,
    ) -> Result<JobResponse, AppError> {
        request.validate()?;

        let changes = JobChanges {
            technician_id: request.technician_id,
            description: request.description,
            status: request.status,
            priority: request.priority,
            start_date: parse_optional_date(request.start_date.as_deref(), "start_date")?,
            due_date: parse_optional_date(request.due_date.as_deref(), "due_date")?,
            completed_date: parse_optional_date(
                request.completed_date.as_deref(),
                "completed_date",
            )?,
            labor_hours: request.labor_hours,
            labor_rate: request.labor_rate,
            parts_cost: request.parts_cost,
            // el costo estimado se fija al crear; aquí no se recalcula
            estimated_cost: None,
            final_cost: request.final_cost,
            progress_percentage: request.progress_percentage,
        };

        let job = self
            .repository
            .update(id, changes)
            .await?
            .ok_or_else(|| not_found_error("Job", &id.to_string()))?;

        Ok(JobResponse::from_job(job, Local::now().date_naive()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Job", &id.to_string()));
        }
        Ok(())
    }
}

fn parse_optional_date(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<NaiveDate>, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => validate_date(s)
            .map(Some)
            .map_err(|_| validation_error(field, "fecha inválida, se espera YYYY-MM-DD")),
        _ => Ok(None),
    }
}
