use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::{Company, CompanyStatus};
use crate::utils::errors::AppError;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        contact_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        status: CompanyStatus,
    ) -> Result<Company, AppError> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (id, name, contact_name, email, phone, address, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(contact_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM companies WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        contact_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        status: Option<CompanyStatus>,
    ) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = COALESCE($2, name),
                contact_name = COALESCE($3, contact_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(contact_name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_by_status(&self, status: CompanyStatus) -> Result<Vec<Company>, AppError> {
        let result =
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE status = $1 ORDER BY name")
                .bind(status)
                .fetch_all(&self.pool)
                .await?;

        Ok(result)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Company>, AppError> {
        let pattern = format!("%{}%", term);
        let result = sqlx::query_as::<_, Company>(
            r#"
            SELECT * FROM companies
            WHERE name ILIKE $1 OR contact_name ILIKE $1 OR email ILIKE $1
            ORDER BY name
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}
