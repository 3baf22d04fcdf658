//! Modelo de Invoice
//!
//! Factura emitida por un trabajo. Número `INV-2025-001` asignado al
//! crear. Montos en Decimal, nunca flotantes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una factura (enumeración cerrada)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "cancelled" => Ok(InvoiceStatus::Cancelled),
            other => Err(format!("estado de factura desconocido: '{}'", other)),
        }
    }
}

/// Invoice principal - mapea exactamente a la tabla invoices
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Invoice con nombre de empresa y número de trabajo para listados
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct InvoiceWithDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub invoice: Invoice,
    pub company_name: Option<String>,
    pub job_number: Option<String>,
}

/// Datos ya validados y tipados para insertar una factura nueva
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub job_id: Uuid,
    pub company_id: Uuid,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub payment_terms: i32,
    pub notes: Option<String>,
}
