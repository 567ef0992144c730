//! Modelos de Analytics
//!
//! Resumen agregado sobre el estado actual del store. Se recalcula desde
//! cero en cada petición; no se persiste nada.

use serde::{Deserialize, Serialize};

/// Carga planificada de una sección como porcentaje de un turno de 8 horas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionLoad {
    pub section_id: i64,
    pub section_name: String,
    pub load_percent: i32,
}

/// Resumen de analytics para el dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_cards: i64,
    pub draft_cards: i64,
    pub approved_cards: i64,
    pub scheduled_cards: i64,
    pub average_duration: i32,
    pub sections_load: Vec<SectionLoad>,
}
