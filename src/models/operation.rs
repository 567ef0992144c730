//! Modelo de Operation
//!
//! Una operación es una plantilla reutilizable de trabajo con duración por
//! defecto. Se crea vía API y nunca se actualiza ni se elimina.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Plantilla de operación
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: i64,
    pub department_id: i64,
    pub section_id: i64,
    pub operation_type: String,
    pub operation_number: String,
    pub technology: String,
    pub default_duration_min: i32,
    pub color_hex: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request para crear una nueva plantilla de operación
///
/// No se valida unicidad de `operation_number`: el sistema permite
/// códigos duplicados.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperationRequest {
    pub department_id: i64,
    pub section_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub operation_type: String,

    #[validate(length(min = 1, max = 50))]
    pub operation_number: String,

    #[validate(length(min = 1, max = 500))]
    pub technology: String,

    #[validate(range(min = 1))]
    pub default_duration_min: i32,

    #[validate(custom = "crate::utils::validation::validate_color_hex")]
    pub color_hex: String,
}
