//! Utilidades de validación
//!
//! Funciones helper para convertir los campos de formulario (strings)
//! en valores tipados antes de tocar la capa de datos.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar y convertir string a fecha (formato YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("2025-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(validate_date("15/01/2025").is_err());
        assert!(validate_date("2025-02-31").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("motor").is_ok());
        assert!(validate_not_empty("   ").is_err());
    }
}
