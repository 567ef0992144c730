//! Servicio de analytics
//!
//! Calcula el resumen agregado sobre el estado actual del store: conteos de
//! tarjetas, duración media de las plantillas de operación y carga
//! planificada por sección contra un turno de 8 horas. Cada llamada
//! recalcula todo desde cero.

use crate::models::analytics::{AnalyticsSummary, SectionLoad};
use crate::models::route_card::RouteCardStatus;
use crate::store::ProductionStore;

/// Horas de un turno estándar de trabajo
const SHIFT_HOURS: f64 = 8.0;

/// Agregador de analytics sobre un store prestado en lectura
pub struct AnalyticsService<'a> {
    store: &'a ProductionStore,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(store: &'a ProductionStore) -> Self {
        Self { store }
    }

    /// Calcular el resumen completo
    pub fn summary(&self) -> AnalyticsSummary {
        let cards = self.store.route_cards();

        let total_cards = cards.len() as i64;
        let draft_cards = cards
            .iter()
            .filter(|card| card.status == RouteCardStatus::Draft)
            .count() as i64;
        let approved_cards = cards
            .iter()
            .filter(|card| card.status == RouteCardStatus::Approved)
            .count() as i64;
        let scheduled_cards = cards.iter().filter(|card| card.scheduled).count() as i64;

        AnalyticsSummary {
            total_cards,
            draft_cards,
            approved_cards,
            scheduled_cards,
            average_duration: self.average_operation_duration(),
            sections_load: self.sections_load(),
        }
    }

    /// Media aritmética de la duración por defecto de las operaciones
    ///
    /// Con cero operaciones el resultado es 0, no una división por cero.
    fn average_operation_duration(&self) -> i32 {
        let operations = self.store.operations();
        if operations.is_empty() {
            return 0;
        }
        let total: i64 = operations
            .iter()
            .map(|operation| i64::from(operation.default_duration_min))
            .sum();
        (total as f64 / operations.len() as f64).round() as i32
    }

    /// Carga por sección como porcentaje de turno, acotada a [0, 100]
    fn sections_load(&self) -> Vec<SectionLoad> {
        self.store
            .sections()
            .iter()
            .map(|section| {
                let total_minutes: i64 = self
                    .store
                    .schedule_items()
                    .iter()
                    .filter(|item| item.section_id == section.id)
                    .map(|item| (item.end_date_time - item.start_date_time).num_minutes())
                    .sum();

                let hours = total_minutes as f64 / 60.0;
                let load_percent = ((hours / SHIFT_HOURS) * 100.0).round() as i32;

                SectionLoad {
                    section_id: section.id,
                    section_name: section.name.clone(),
                    load_percent: load_percent.clamp(0, 100),
                }
            })
            .collect()
    }
}
