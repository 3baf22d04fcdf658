use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::invoice_dto::{CreateInvoiceRequest, InvoiceResponse, UpdateInvoiceRequest};
use crate::models::invoice::{InvoiceStatus, NewInvoice};
use crate::repositories::invoice_repository::InvoiceRepository;
use crate::repositories::job_repository::JobRepository;
use crate::services::billing;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_date;

pub struct InvoiceController {
    repository: InvoiceRepository,
    jobs: JobRepository,
}

impl InvoiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InvoiceRepository::new(pool.clone()),
            jobs: JobRepository::new(pool),
        }
    }

    /// Crear una factura: impuesto y total se calculan en el servidor a
    /// partir del subtotal (tasa fija 8%, Decimal exacto) y el número
    /// INV-YYYY-NNN se asigna atómicamente junto con el insert.
    pub async fn create(&self, request: CreateInvoiceRequest) -> Result<InvoiceResponse, AppError> {
        request.validate()?;

        if request.subtotal < Decimal::ZERO {
            return Err(validation_error("subtotal", "el subtotal no puede ser negativo"));
        }

        // la factura referencia un trabajo existente
        if self.jobs.find_by_id(request.job_id).await?.is_none() {
            return Err(not_found_error("Job", &request.job_id.to_string()));
        }

        let issue_date = parse_date(&request.issue_date, "issue_date")?;
        let due_date = parse_date(&request.due_date, "due_date")?;
        if due_date < issue_date {
            return Err(validation_error(
                "due_date",
                "la fecha de vencimiento no puede ser anterior a la emisión",
            ));
        }

        let totals = billing::invoice_totals(request.subtotal);

        let today = Local::now().date_naive();
        let new_invoice = NewInvoice {
            job_id: request.job_id,
            company_id: request.company_id,
            subtotal: totals.subtotal,
            tax_amount: totals.tax_amount,
            total_amount: totals.total_amount,
            issue_date,
            due_date,
            payment_terms: request.payment_terms.unwrap_or(30),
            notes: request.notes,
        };

        let invoice = self.repository.create(new_invoice, today.year()).await?;

        Ok(InvoiceResponse::from_invoice(invoice, today))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<InvoiceResponse, AppError> {
        let invoice = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Invoice", &id.to_string()))?;

        Ok(InvoiceResponse::from_invoice(invoice, Local::now().date_naive()))
    }

    pub async fn list(&self) -> Result<Vec<InvoiceResponse>, AppError> {
        let today = Local::now().date_naive();
        let invoices = self.repository.list_all().await?;
        Ok(invoices
            .into_iter()
            .map(|i| InvoiceResponse::from_details(i, today))
            .collect())
    }

    pub async fn list_by_status(
        &self,
        status: InvoiceStatus,
    ) -> Result<Vec<InvoiceResponse>, AppError> {
        let today = Local::now().date_naive();
        let invoices = self.repository.list_by_status(status).await?;
        Ok(invoices
            .into_iter()
            .map(|i| InvoiceResponse::from_details(i, today))
            .collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<InvoiceResponse>, AppError> {
        let today = Local::now().date_naive();
        let invoices = self.repository.search(term).await?;
        Ok(invoices
            .into_iter()
            .map(|i| InvoiceResponse::from_details(i, today))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateInvoiceRequest,
    ) -> Result<InvoiceResponse, AppError> {
        request.validate()?;

        let due_date = parse_optional_date(request.due_date.as_deref(), "due_date")?;
        let paid_date = parse_optional_date(request.paid_date.as_deref(), "paid_date")?;

        let invoice = self
            .repository
            .update(
                id,
                request.status,
                due_date,
                paid_date,
                request.payment_terms,
                request.notes,
            )
            .await?
            .ok_or_else(|| not_found_error("Invoice", &id.to_string()))?;

        Ok(InvoiceResponse::from_invoice(invoice, Local::now().date_naive()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(not_found_error("Invoice", &id.to_string()));
        }
        Ok(())
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, AppError> {
    validate_date(value).map_err(|_| validation_error(field, "fecha inválida, se espera YYYY-MM-DD"))
}

fn parse_optional_date(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<NaiveDate>, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => parse_date(s, field).map(Some),
        _ => Ok(None),
    }
}
