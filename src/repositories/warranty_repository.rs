use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::warranty::{NewWarranty, Warranty, WarrantyStatus, WarrantyWithDetails};
use crate::utils::errors::AppError;

const WITH_DETAILS: &str = r#"
    SELECT w.*,
           c.name AS company_name,
           m.motor_tag AS motor_tag,
           j.job_number AS job_number
    FROM warranties w
    LEFT JOIN companies c ON c.id = w.company_id
    LEFT JOIN motors m ON m.id = w.motor_id
    LEFT JOIN jobs j ON j.id = w.job_id
"#;

pub struct WarrantyRepository {
    pool: PgPool,
}

impl WarrantyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_warranty: NewWarranty) -> Result<Warranty, AppError> {
        let result = sqlx::query_as::<_, Warranty>(
            r#"
            INSERT INTO warranties (
                id, job_id, motor_id, company_id, status, warranty_start,
                warranty_end, warranty_period, extension_months,
                work_description, notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, 'active', $5, $6, $7, 0, $8, $9, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_warranty.job_id)
        .bind(new_warranty.motor_id)
        .bind(new_warranty.company_id)
        .bind(new_warranty.warranty_start)
        .bind(new_warranty.warranty_end)
        .bind(new_warranty.warranty_period)
        .bind(new_warranty.work_description)
        .bind(new_warranty.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Warranty>, AppError> {
        let result = sqlx::query_as::<_, Warranty>("SELECT * FROM warranties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        status: Option<WarrantyStatus>,
        work_description: Option<String>,
        notes: Option<String>,
    ) -> Result<Option<Warranty>, AppError> {
        let result = sqlx::query_as::<_, Warranty>(
            r#"
            UPDATE warranties
            SET status = COALESCE($2, status),
                work_description = COALESCE($3, work_description),
                notes = COALESCE($4, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(work_description)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Persistir el resultado de una extensión: nueva fecha de fin,
    /// original_end_date (ya resuelto set-once por el servicio), meses
    /// acumulados, razón y status `extended`.
    pub async fn apply_extension(
        &self,
        id: Uuid,
        new_end: NaiveDate,
        original_end_date: NaiveDate,
        extension_months: i32,
        extension_reason: String,
        notes: Option<String>,
    ) -> Result<Option<Warranty>, AppError> {
        let result = sqlx::query_as::<_, Warranty>(
            r#"
            UPDATE warranties
            SET warranty_end = $2,
                original_end_date = $3,
                extension_months = $4,
                extension_reason = $5,
                notes = COALESCE($6, notes),
                status = 'extended',
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new_end)
        .bind(original_end_date)
        .bind(extension_months)
        .bind(extension_reason)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM warranties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<WarrantyWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} ORDER BY w.created_at DESC");
        let result = sqlx::query_as::<_, WarrantyWithDetails>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_by_status(
        &self,
        status: WarrantyStatus,
    ) -> Result<Vec<WarrantyWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} WHERE w.status = $1 ORDER BY w.created_at DESC");
        let result = sqlx::query_as::<_, WarrantyWithDetails>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    /// Garantías activas que terminan en o antes de la fecha límite
    /// (la ventana de 30 días la decide el controller)
    pub async fn list_expiring(
        &self,
        until: NaiveDate,
    ) -> Result<Vec<WarrantyWithDetails>, AppError> {
        let sql = format!(
            "{WITH_DETAILS} WHERE w.status = 'active' AND w.warranty_end <= $1 ORDER BY w.warranty_end"
        );
        let result = sqlx::query_as::<_, WarrantyWithDetails>(&sql)
            .bind(until)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<WarrantyWithDetails>, AppError> {
        let sql = format!(
            "{WITH_DETAILS} WHERE w.work_description ILIKE $1 ORDER BY w.created_at DESC"
        );
        let result = sqlx::query_as::<_, WarrantyWithDetails>(&sql)
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }
}
