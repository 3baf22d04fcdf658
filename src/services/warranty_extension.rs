//! Aritmética de fechas de garantía
//!
//! Cobertura inicial (`warranty_start + warranty_period` meses) y
//! extensiones. La suma de meses usa la semántica de `chrono::Months`:
//! avanza el campo mes acarreando al año y, si el día no existe en el mes
//! destino, lo ajusta al último día válido (2025-01-31 + 1 mes =
//! 2025-02-28).

use chrono::{Months, NaiveDate};

/// Sumar meses calendario a una fecha con ajuste de fin de mes
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Fecha de fin de cobertura a partir del inicio y el período en meses
pub fn coverage_end(warranty_start: NaiveDate, period_months: i32) -> Option<NaiveDate> {
    if period_months < 0 {
        return None;
    }
    add_months(warranty_start, period_months as u32)
}

/// Campos que cambian al extender una garantía
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionOutcome {
    pub new_end: NaiveDate,
    /// Fin de cobertura previo a la primera extensión; se fija una vez y
    /// no se sobrescribe en extensiones posteriores
    pub original_end_date: NaiveDate,
    /// Meses de extensión acumulados sobre todas las extensiones
    pub extension_months: i32,
}

/// Calcular el efecto de extender una garantía `add_months` meses.
/// No muta nada: el repositorio persiste el resultado junto con el cambio
/// de status a `extended`.
pub fn extend(
    current_end: NaiveDate,
    original_end_date: Option<NaiveDate>,
    accumulated_months: i32,
    months: i32,
) -> Option<ExtensionOutcome> {
    if months <= 0 {
        return None;
    }
    let new_end = add_months(current_end, months as u32)?;
    Some(ExtensionOutcome {
        new_end,
        original_end_date: original_end_date.unwrap_or(current_end),
        extension_months: accumulated_months + months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_coverage_end_twelve_months() {
        assert_eq!(
            coverage_end(date(2025, 1, 15), 12),
            Some(date(2026, 1, 15))
        );
    }

    #[test]
    fn test_add_months_clamps_to_month_length() {
        // febrero no bisiesto
        assert_eq!(add_months(date(2025, 1, 31), 1), Some(date(2025, 2, 28)));
        // febrero bisiesto
        assert_eq!(add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        // acarreo de año
        assert_eq!(add_months(date(2025, 11, 30), 3), Some(date(2026, 2, 28)));
    }

    #[test]
    fn test_extend_sets_original_end_once() {
        let end = date(2025, 6, 30);

        let first = extend(end, None, 0, 6).unwrap();
        assert_eq!(first.new_end, date(2025, 12, 30));
        assert_eq!(first.original_end_date, end);
        assert_eq!(first.extension_months, 6);

        // segunda extensión: original_end_date no cambia, los meses se acumulan
        let second = extend(
            first.new_end,
            Some(first.original_end_date),
            first.extension_months,
            3,
        )
        .unwrap();
        assert_eq!(second.new_end, date(2026, 3, 30));
        assert_eq!(second.original_end_date, end);
        assert_eq!(second.extension_months, 9);
    }

    #[test]
    fn test_extend_rejects_non_positive_months() {
        let end = date(2025, 6, 30);
        assert!(extend(end, None, 0, 0).is_none());
        assert!(extend(end, None, 0, -3).is_none());
    }
}
