//! Derivación de estado para visualización
//!
//! El estado almacenado (`status`) solo cambia por acción explícita del
//! usuario; lo que se muestra como "vencido" / "vence pronto" / "por
//! expirar" se deriva de las fechas al momento de renderizar y nunca se
//! persiste. Ambas fechas se truncan a día calendario antes de restar,
//! consistente con las columnas date-only.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::invoice::InvoiceStatus;

/// Umbral "vence pronto" para trabajos (días)
pub const JOB_DUE_SOON_DAYS: i64 = 2;
/// Umbral "vence pronto" para facturas (días)
pub const INVOICE_DUE_SOON_DAYS: i64 = 7;
/// Ventana "por expirar" para garantías (días)
pub const WARRANTY_EXPIRING_WINDOW_DAYS: i64 = 30;

/// Días calendario entre hoy y una fecha objetivo (negativo si ya pasó)
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Estado de vencimiento derivado para trabajos y facturas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DueInfo {
    pub days_until_due: i64,
    pub overdue: bool,
    pub due_soon: bool,
}

/// Derivar vencimiento de un trabajo. Los trabajos se juzgan solo por la
/// fecha límite; sin fecha no hay nada que derivar.
pub fn job_due_info(due_date: Option<NaiveDate>, today: NaiveDate) -> Option<DueInfo> {
    let due = due_date?;
    let days = days_until(due, today);
    Some(DueInfo {
        days_until_due: days,
        overdue: days < 0,
        due_soon: (0..=JOB_DUE_SOON_DAYS).contains(&days),
    })
}

/// Derivar vencimiento de una factura. Una factura pagada nunca se marca
/// vencida aunque la fecha haya pasado.
pub fn invoice_due_info(due_date: NaiveDate, status: InvoiceStatus, today: NaiveDate) -> DueInfo {
    let days = days_until(due_date, today);
    let paid = status == InvoiceStatus::Paid;
    DueInfo {
        days_until_due: days,
        overdue: days < 0 && !paid,
        due_soon: !paid && (0..=INVOICE_DUE_SOON_DAYS).contains(&days),
    }
}

/// Cobertura derivada de una garantía
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageInfo {
    pub days_remaining: i64,
    pub expired: bool,
    pub expiring_soon: bool,
}

/// Derivar cobertura de una garantía. "Expirada" se deriva de la fecha
/// aunque el status almacenado siga diciendo `active`.
pub fn warranty_coverage(warranty_end: NaiveDate, today: NaiveDate) -> CoverageInfo {
    let days = days_until(warranty_end, today);
    CoverageInfo {
        days_remaining: days,
        expired: days <= 0,
        expiring_soon: days > 0 && days <= WARRANTY_EXPIRING_WINDOW_DAYS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until() {
        let today = date(2025, 6, 10);
        assert_eq!(days_until(date(2025, 6, 12), today), 2);
        assert_eq!(days_until(date(2025, 6, 10), today), 0);
        assert_eq!(days_until(date(2025, 6, 8), today), -2);
    }

    #[test]
    fn test_job_due_soon_threshold() {
        let today = date(2025, 6, 10);
        let info = job_due_info(Some(date(2025, 6, 12)), today).unwrap();
        assert!(info.due_soon);
        assert!(!info.overdue);
        // a 3 días ya no es "due soon" para trabajos
        let info = job_due_info(Some(date(2025, 6, 13)), today).unwrap();
        assert!(!info.due_soon);
    }

    #[test]
    fn test_invoice_due_soon_threshold_is_independent() {
        let today = date(2025, 6, 10);
        // a +2 días el trabajo y la factura caen en "due soon",
        // cada uno bajo su propio umbral (2 vs 7)
        let due = date(2025, 6, 12);
        assert!(job_due_info(Some(due), today).unwrap().due_soon);
        assert!(invoice_due_info(due, InvoiceStatus::Sent, today).due_soon);
        // a +5 días solo la factura sigue en "due soon"
        let due = date(2025, 6, 15);
        assert!(!job_due_info(Some(due), today).unwrap().due_soon);
        assert!(invoice_due_info(due, InvoiceStatus::Sent, today).due_soon);
    }

    #[test]
    fn test_paid_invoice_never_overdue() {
        let today = date(2025, 6, 10);
        let past = date(2025, 5, 1);
        assert!(invoice_due_info(past, InvoiceStatus::Sent, today).overdue);
        let info = invoice_due_info(past, InvoiceStatus::Paid, today);
        assert!(!info.overdue);
        assert!(!info.due_soon);
    }

    #[test]
    fn test_job_overdue_by_date_alone() {
        let today = date(2025, 6, 10);
        let info = job_due_info(Some(date(2025, 6, 9)), today).unwrap();
        assert!(info.overdue);
        assert_eq!(info.days_until_due, -1);
        assert!(job_due_info(None, today).is_none());
    }

    #[test]
    fn test_warranty_coverage_windows() {
        let today = date(2025, 6, 10);
        // dentro de la ventana de 30 días
        let info = warranty_coverage(date(2025, 7, 10), today);
        assert!(info.expiring_soon);
        assert!(!info.expired);
        // justo afuera
        let info = warranty_coverage(date(2025, 7, 11), today);
        assert!(!info.expiring_soon);
        // el día exacto de expiración cuenta como expirada
        let info = warranty_coverage(today, today);
        assert!(info.expired);
        assert!(!info.expiring_soon);
        assert_eq!(info.days_remaining, 0);
    }
}
