//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a datetime
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
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

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de color hexadecimal (#RRGGBB)
pub fn validate_color_hex(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        let mut error = ValidationError::new("color_hex");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"#RRGGBB".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un intervalo de tiempo no esté invertido
pub fn validate_time_interval(
    start: &DateTime<Utc>,
    end: &DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end < start {
        let mut error = ValidationError::new("time_interval");
        error.add_param("start".into(), &start.to_rfc3339());
        error.add_param("end".into(), &end.to_rfc3339());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_datetime() {
        let valid = "2026-03-10T08:00:00Z";
        assert!(validate_datetime(valid).is_ok());

        let invalid = "2026-03-10 08:00";
        assert!(validate_datetime(invalid).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("turning").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(90).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-30).is_err());
    }

    #[test]
    fn test_validate_color_hex() {
        assert!(validate_color_hex("#93C5FD").is_ok());
        assert!(validate_color_hex("#fbbf24").is_ok());
        assert!(validate_color_hex("93C5FD").is_err());
        assert!(validate_color_hex("#93C5F").is_err());
        assert!(validate_color_hex("#93C5FG").is_err());
    }

    #[test]
    fn test_validate_time_interval() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap();
        assert!(validate_time_interval(&start, &end).is_ok());
        assert!(validate_time_interval(&end, &start).is_err());
        // Un intervalo de duración cero es válido
        assert!(validate_time_interval(&start, &start).is_ok());
    }
}
