//! Cálculo monetario
//!
//! Totales de factura (tasa fija de impuesto del 8%) y costo estimado de
//! trabajos. Todo en `Decimal` con redondeo a 2 decimales; con flotantes
//! binarios el impuesto acumula deriva de redondeo entre recálculos.

use rust_decimal::{Decimal, RoundingStrategy};

/// Tasa de impuesto fija (8%)
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Totales calculados de una factura
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
}

/// Calcular impuesto y total a partir del subtotal
pub fn invoice_totals(subtotal: Decimal) -> InvoiceTotals {
    let subtotal = round_currency(subtotal);
    let tax_amount = round_currency(subtotal * tax_rate());
    InvoiceTotals {
        subtotal,
        tax_amount,
        total_amount: subtotal + tax_amount,
    }
}

/// Costo estimado de un trabajo: horas × tarifa + repuestos.
/// Cualquier factor ausente cuenta como cero.
pub fn estimated_cost(
    labor_hours: Option<Decimal>,
    labor_rate: Option<Decimal>,
    parts_cost: Option<Decimal>,
) -> Decimal {
    let labor = labor_hours.unwrap_or(Decimal::ZERO) * labor_rate.unwrap_or(Decimal::ZERO);
    round_currency(labor + parts_cost.unwrap_or(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_invoice_totals_exact_decimal() {
        let totals = invoice_totals(dec("1170.00"));
        assert_eq!(totals.tax_amount, dec("93.60"));
        assert_eq!(totals.total_amount, dec("1263.60"));
    }

    #[test]
    fn test_invoice_totals_rounds_half_away_from_zero() {
        // 1234.56 * 0.08 = 98.7648 -> 98.76
        let totals = invoice_totals(dec("1234.56"));
        assert_eq!(totals.tax_amount, dec("98.76"));
        assert_eq!(totals.total_amount, dec("1333.32"));
        // 106.25 * 0.08 = 8.50 exacto
        let totals = invoice_totals(dec("106.25"));
        assert_eq!(totals.tax_amount, dec("8.50"));
    }

    #[test]
    fn test_no_drift_across_repeated_computation() {
        let subtotal = dec("1170.00");
        let first = invoice_totals(subtotal);
        let again = invoice_totals(first.subtotal);
        assert_eq!(first, again);
    }

    #[test]
    fn test_estimated_cost() {
        assert_eq!(
            estimated_cost(Some(dec("10.5")), Some(dec("80")), Some(dec("125.40"))),
            dec("965.40")
        );
    }

    #[test]
    fn test_estimated_cost_missing_factors_are_zero() {
        assert_eq!(estimated_cost(None, Some(dec("80")), None), Decimal::ZERO);
        assert_eq!(
            estimated_cost(Some(dec("2")), None, Some(dec("50"))),
            dec("50.00")
        );
        assert_eq!(estimated_cost(None, None, None), Decimal::ZERO);
    }
}
