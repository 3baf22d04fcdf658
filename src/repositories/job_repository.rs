use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{Job, JobChanges, JobStatus, JobWithDetails, NewJob};
use crate::services::document_number::{self, DocumentKind};
use crate::utils::errors::AppError;

const WITH_DETAILS: &str = r#"
    SELECT j.*,
           c.name AS company_name,
           m.motor_tag AS motor_tag,
           u.name AS technician_name
    FROM jobs j
    LEFT JOIN companies c ON c.id = j.company_id
    LEFT JOIN motors m ON m.id = j.motor_id
    LEFT JOIN users u ON u.id = j.technician_id
"#;

pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear un trabajo asignando su número de documento en la misma
    /// transacción: si el insert falla, el incremento del contador se
    /// revierte junto con él.
    pub async fn create(&self, new_job: NewJob, year: i32) -> Result<Job, AppError> {
        let mut tx = self.pool.begin().await?;

        let job_number = document_number::allocate(&mut tx, DocumentKind::Job, year).await?;

        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                id, job_number, company_id, motor_id, technician_id, description,
                status, priority, start_date, due_date, labor_hours, labor_rate,
                parts_cost, estimated_cost, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8, $9, $10, $11, $12, $13, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&job_number)
        .bind(new_job.company_id)
        .bind(new_job.motor_id)
        .bind(new_job.technician_id)
        .bind(new_job.description)
        .bind(new_job.priority)
        .bind(new_job.start_date)
        .bind(new_job.due_date)
        .bind(new_job.labor_hours)
        .bind(new_job.labor_rate)
        .bind(new_job.parts_cost)
        .bind(new_job.estimated_cost)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(job)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, AppError> {
        let result = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn update(&self, id: Uuid, changes: JobChanges) -> Result<Option<Job>, AppError> {
        let result = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET technician_id = COALESCE($2, technician_id),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                start_date = COALESCE($6, start_date),
                due_date = COALESCE($7, due_date),
                completed_date = COALESCE($8, completed_date),
                labor_hours = COALESCE($9, labor_hours),
                labor_rate = COALESCE($10, labor_rate),
                parts_cost = COALESCE($11, parts_cost),
                estimated_cost = COALESCE($12, estimated_cost),
                final_cost = COALESCE($13, final_cost),
                progress_percentage = COALESCE($14, progress_percentage),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.technician_id)
        .bind(changes.description)
        .bind(changes.status)
        .bind(changes.priority)
        .bind(changes.start_date)
        .bind(changes.due_date)
        .bind(changes.completed_date)
        .bind(changes.labor_hours)
        .bind(changes.labor_rate)
        .bind(changes.parts_cost)
        .bind(changes.estimated_cost)
        .bind(changes.final_cost)
        .bind(changes.progress_percentage)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<JobWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} ORDER BY j.created_at DESC");
        let result = sqlx::query_as::<_, JobWithDetails>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<JobWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} WHERE j.company_id = $1 ORDER BY j.created_at DESC");
        let result = sqlx::query_as::<_, JobWithDetails>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_by_status(&self, status: JobStatus) -> Result<Vec<JobWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} WHERE j.status = $1 ORDER BY j.created_at DESC");
        let result = sqlx::query_as::<_, JobWithDetails>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<JobWithDetails>, AppError> {
        let sql = format!(
            "{WITH_DETAILS} WHERE j.job_number ILIKE $1 OR j.description ILIKE $1 ORDER BY j.created_at DESC"
        );
        let result = sqlx::query_as::<_, JobWithDetails>(&sql)
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }
}
