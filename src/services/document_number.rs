//! Generación de números de documento
//!
//! Los trabajos y facturas llevan un número secuencial legible
//! (`JOB-2025-001`, `INV-2025-001`) además de su UUID interno. La secuencia
//! reinicia en 1 cada año y se asigna al crear el documento, nunca se
//! reasigna.
//!
//! La versión original leía el último número y sumaba uno, lo que permitía
//! duplicados bajo creación concurrente. Aquí la asignación pasa por un
//! contador por (tipo, año) en la tabla `document_counters`, incrementado en
//! una sola sentencia dentro de la misma transacción que inserta el
//! documento. `next_sequence` conserva la derivación pura para tests y para
//! herramientas de migración.

use sqlx::{Postgres, Transaction};

/// Tipos de documento que llevan número secuencial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Job,
    Invoice,
}

impl DocumentKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::Job => "JOB",
            DocumentKind::Invoice => "INV",
        }
    }

    /// Tabla y columna donde viven los números ya asignados
    fn number_source(&self) -> (&'static str, &'static str) {
        match self {
            DocumentKind::Job => ("jobs", "job_number"),
            DocumentKind::Invoice => ("invoices", "invoice_number"),
        }
    }
}

/// Formatear un número de documento: sufijo con ceros hasta 3 dígitos,
/// sin truncar cuando la secuencia pasa de 999 (1000 imprime como 1000).
pub fn format_number(kind: DocumentKind, year: i32, sequence: u32) -> String {
    format!("{}-{}-{:03}", kind.prefix(), year, sequence)
}

/// Extraer el sufijo numérico de un número de documento existente
pub fn parse_sequence(number: &str) -> Option<u32> {
    number.rsplit('-').next()?.parse().ok()
}

/// Derivación pura del siguiente número a partir del último asignado.
/// Es el algoritmo leer-luego-incrementar del sistema original: correcto en
/// aislamiento pero con carrera bajo creación concurrente, por eso la
/// asignación real pasa por [`allocate`].
pub fn next_sequence(latest: Option<&str>) -> u32 {
    match latest.and_then(parse_sequence) {
        Some(last) => last + 1,
        None => 1,
    }
}

/// Asignar atómicamente el siguiente número de documento para (tipo, año).
///
/// Una sola sentencia upsert incrementa el contador; al primer uso de un
/// (tipo, año) el contador se siembra desde el máximo ya presente en la
/// tabla destino, de modo que los datos anteriores al contador continúan la
/// secuencia en lugar de colisionar. Debe ejecutarse dentro de la
/// transacción que inserta el documento para que el número no se pierda si
/// el insert falla.
pub async fn allocate(
    tx: &mut Transaction<'_, Postgres>,
    kind: DocumentKind,
    year: i32,
) -> Result<String, sqlx::Error> {
    let (table, column) = kind.number_source();
    let sql = format!(
        r#"
        INSERT INTO document_counters (doc_type, year, last_value)
        VALUES ($1, $2, COALESCE((
            SELECT MAX(split_part({column}, '-', 3)::int)
            FROM {table}
            WHERE {column} LIKE $3
        ), 0) + 1)
        ON CONFLICT (doc_type, year)
        DO UPDATE SET last_value = document_counters.last_value + 1
        RETURNING last_value
        "#
    );

    let sequence: i32 = sqlx::query_scalar(&sql)
        .bind(kind.prefix())
        .bind(year)
        .bind(format!("{}-{}-%", kind.prefix(), year))
        .fetch_one(&mut **tx)
        .await?;

    Ok(format_number(kind, year, sequence as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_zero_padded() {
        assert_eq!(format_number(DocumentKind::Job, 2025, 1), "JOB-2025-001");
        assert_eq!(format_number(DocumentKind::Job, 2025, 14), "JOB-2025-014");
        assert_eq!(format_number(DocumentKind::Invoice, 2025, 999), "INV-2025-999");
    }

    #[test]
    fn test_format_number_grows_past_three_digits() {
        // al llegar al cuarto dígito el campo crece, no se trunca
        assert_eq!(format_number(DocumentKind::Job, 2025, 1000), "JOB-2025-1000");
        assert_eq!(format_number(DocumentKind::Invoice, 2026, 12345), "INV-2026-12345");
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("JOB-2025-014"), Some(14));
        assert_eq!(parse_sequence("INV-2025-1000"), Some(1000));
        assert_eq!(parse_sequence("sin-numero-xx"), None);
    }

    #[test]
    fn test_next_sequence_increments_latest() {
        assert_eq!(next_sequence(Some("JOB-2025-001")), 2);
        assert_eq!(next_sequence(Some("JOB-2025-042")), 43);
        assert_eq!(next_sequence(Some("INV-2025-999")), 1000);
    }

    #[test]
    fn test_next_sequence_empty_year_starts_at_one() {
        assert_eq!(next_sequence(None), 1);
        assert_eq!(
            format_number(DocumentKind::Invoice, 2026, next_sequence(None)),
            "INV-2026-001"
        );
    }
}
