use sqlx::PgPool;
use uuid::Uuid;

use crate::models::motor::{Motor, MotorWithCompany};
use crate::utils::errors::AppError;

const WITH_COMPANY: &str = r#"
    SELECT m.*, c.name AS company_name
    FROM motors m
    LEFT JOIN companies c ON c.id = m.company_id
"#;

pub struct MotorRepository {
    pool: PgPool,
}

impl MotorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        motor_tag: String,
        manufacturer: Option<String>,
        model: Option<String>,
        serial_number: Option<String>,
        motor_type: Option<String>,
    ) -> Result<Motor, AppError> {
        let result = sqlx::query_as::<_, Motor>(
            r#"
            INSERT INTO motors (id, company_id, motor_tag, manufacturer, model, serial_number, motor_type, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(motor_tag)
        .bind(manufacturer)
        .bind(model)
        .bind(serial_number)
        .bind(motor_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Motor>, AppError> {
        let result = sqlx::query_as::<_, Motor>("SELECT * FROM motors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn tag_exists(&self, motor_tag: &str, company_id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM motors WHERE motor_tag = $1 AND company_id = $2)",
        )
        .bind(motor_tag)
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        motor_tag: Option<String>,
        manufacturer: Option<String>,
        model: Option<String>,
        serial_number: Option<String>,
        motor_type: Option<String>,
    ) -> Result<Option<Motor>, AppError> {
        let result = sqlx::query_as::<_, Motor>(
            r#"
            UPDATE motors
            SET motor_tag = COALESCE($2, motor_tag),
                manufacturer = COALESCE($3, manufacturer),
                model = COALESCE($4, model),
                serial_number = COALESCE($5, serial_number),
                motor_type = COALESCE($6, motor_type),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(motor_tag)
        .bind(manufacturer)
        .bind(model)
        .bind(serial_number)
        .bind(motor_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM motors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<MotorWithCompany>, AppError> {
        let sql = format!("{WITH_COMPANY} ORDER BY m.motor_tag");
        let result = sqlx::query_as::<_, MotorWithCompany>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Motor>, AppError> {
        let result = sqlx::query_as::<_, Motor>(
            "SELECT * FROM motors WHERE company_id = $1 ORDER BY motor_tag",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn list_by_type(&self, motor_type: &str) -> Result<Vec<MotorWithCompany>, AppError> {
        let sql = format!("{WITH_COMPANY} WHERE m.motor_type = $1 ORDER BY m.motor_tag");
        let result = sqlx::query_as::<_, MotorWithCompany>(&sql)
            .bind(motor_type)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<MotorWithCompany>, AppError> {
        let sql = format!(
            r#"{WITH_COMPANY}
            WHERE m.motor_tag ILIKE $1 OR m.manufacturer ILIKE $1
               OR m.model ILIKE $1 OR m.serial_number ILIKE $1
            ORDER BY m.motor_tag
            "#
        );
        let result = sqlx::query_as::<_, MotorWithCompany>(&sql)
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }
}
