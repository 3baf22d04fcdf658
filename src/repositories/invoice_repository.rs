use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::invoice::{Invoice, InvoiceStatus, InvoiceWithDetails, NewInvoice};
use crate::services::document_number::{self, DocumentKind};
use crate::utils::errors::AppError;

const WITH_DETAILS: &str = r#"
    SELECT i.*,
           c.name AS company_name,
           j.job_number AS job_number
    FROM invoices i
    LEFT JOIN companies c ON c.id = i.company_id
    LEFT JOIN jobs j ON j.id = i.job_id
"#;

pub struct InvoiceRepository {
    pool: PgPool,
}

impl InvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una factura asignando su número en la misma transacción que
    /// el insert (ver document_number::allocate).
    pub async fn create(&self, new_invoice: NewInvoice, year: i32) -> Result<Invoice, AppError> {
        let mut tx = self.pool.begin().await?;

        let invoice_number =
            document_number::allocate(&mut tx, DocumentKind::Invoice, year).await?;

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (
                id, invoice_number, job_id, company_id, status, subtotal,
                tax_amount, total_amount, issue_date, due_date, payment_terms,
                notes, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, 'draft', $5, $6, $7, $8, $9, $10, $11, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&invoice_number)
        .bind(new_invoice.job_id)
        .bind(new_invoice.company_id)
        .bind(new_invoice.subtotal)
        .bind(new_invoice.tax_amount)
        .bind(new_invoice.total_amount)
        .bind(new_invoice.issue_date)
        .bind(new_invoice.due_date)
        .bind(new_invoice.payment_terms)
        .bind(new_invoice.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(invoice)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, AppError> {
        let result = sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn update(
        &self,
        id: Uuid,
        status: Option<InvoiceStatus>,
        due_date: Option<NaiveDate>,
        paid_date: Option<NaiveDate>,
        payment_terms: Option<i32>,
        notes: Option<String>,
    ) -> Result<Option<Invoice>, AppError> {
        let result = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET status = COALESCE($2, status),
                due_date = COALESCE($3, due_date),
                paid_date = COALESCE($4, paid_date),
                payment_terms = COALESCE($5, payment_terms),
                notes = COALESCE($6, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(due_date)
        .bind(paid_date)
        .bind(payment_terms)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn list_all(&self) -> Result<Vec<InvoiceWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} ORDER BY i.created_at DESC");
        let result = sqlx::query_as::<_, InvoiceWithDetails>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_by_status(
        &self,
        status: InvoiceStatus,
    ) -> Result<Vec<InvoiceWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} WHERE i.status = $1 ORDER BY i.created_at DESC");
        let result = sqlx::query_as::<_, InvoiceWithDetails>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<InvoiceWithDetails>, AppError> {
        let sql = format!("{WITH_DETAILS} WHERE i.invoice_number ILIKE $1 ORDER BY i.created_at DESC");
        let result = sqlx::query_as::<_, InvoiceWithDetails>(&sql)
            .bind(format!("%{}%", term))
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }
}
