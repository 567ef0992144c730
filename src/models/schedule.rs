//! Modelos de Schedule
//!
//! Un schedule item es una asignación con ventana de tiempo de un paso de
//! tarjeta de ruta a una sección. Los items solo se crean o reemplazan a
//! través de la operación de planificación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Asignación de un paso a una sección en una ventana de tiempo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: i64,
    pub route_card_id: i64,
    pub route_card_step_id: i64,
    pub section_id: i64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

/// Asignación individual dentro de un request de planificación
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAssignment {
    pub step_id: i64,
    pub section_id: i64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

/// Request para (re)planificar una tarjeta de ruta completa
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRouteCardRequest {
    pub id: i64,
    pub items: Vec<StepAssignment>,
}

/// Filtros del calendario sobre schedule items
///
/// El rango usa semántica de solapamiento de intervalos: un item queda
/// excluido solo si termina antes de `from` o empieza después de `to`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleFilters {
    pub section_id: Option<i64>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
