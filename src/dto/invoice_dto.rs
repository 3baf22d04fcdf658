use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::invoice::{Invoice, InvoiceStatus, InvoiceWithDetails};
use crate::services::status;

// Request para crear una factura. El impuesto y el total se calculan en
// el servidor a partir del subtotal; el cliente no los envía.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    pub job_id: Uuid,
    pub company_id: Uuid,

    pub subtotal: Decimal,

    pub issue_date: String,
    pub due_date: String,

    #[validate(range(min = 1, max = 365))]
    pub payment_terms: Option<i32>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

// Request para actualizar una factura existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    pub status: Option<InvoiceStatus>,

    pub due_date: Option<String>,
    pub paid_date: Option<String>,

    #[validate(range(min = 1, max = 365))]
    pub payment_terms: Option<i32>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

// Response de factura con relaciones y vencimiento derivado
#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub invoice_number: String,
    pub job_id: Uuid,
    pub company_id: Uuid,
    pub status: InvoiceStatus,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub payment_terms: i32,
    pub notes: Option<String>,
    pub company_name: Option<String>,
    pub job_number: Option<String>,
    // derivado de due_date al momento de la consulta, no persistido
    pub days_until_due: i64,
    pub overdue: bool,
    pub due_soon: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvoiceResponse {
    pub fn from_invoice(invoice: Invoice, today: NaiveDate) -> Self {
        let due = status::invoice_due_info(invoice.due_date, invoice.status, today);
        Self {
            id: invoice.id,
            invoice_number: invoice.invoice_number,
            job_id: invoice.job_id,
            company_id: invoice.company_id,
            status: invoice.status,
            subtotal: invoice.subtotal,
            tax_amount: invoice.tax_amount,
            total_amount: invoice.total_amount,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            paid_date: invoice.paid_date,
            payment_terms: invoice.payment_terms,
            notes: invoice.notes,
            company_name: None,
            job_number: None,
            days_until_due: due.days_until_due,
            overdue: due.overdue,
            due_soon: due.due_soon,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
        }
    }

    pub fn from_details(details: InvoiceWithDetails, today: NaiveDate) -> Self {
        let mut response = InvoiceResponse::from_invoice(details.invoice, today);
        response.company_name = details.company_name;
        response.job_number = details.job_number;
        response
    }
}
