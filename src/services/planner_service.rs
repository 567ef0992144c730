//! Servicio de planificación
//!
//! Reemplaza de forma atómica el plan completo de una tarjeta de ruta:
//! elimina todos sus schedule items anteriores, inserta los nuevos y marca
//! la tarjeta como aprobada y planificada. El llamador debe ejecutar la
//! operación entera bajo un único write lock del store para que ningún
//! observador externo vea un estado parcial.

use crate::models::route_card::RouteCardStatus;
use crate::models::schedule::StepAssignment;
use crate::store::ProductionStore;
use crate::utils::errors::{not_found_error, validation_error, AppResult};
use crate::utils::validation::validate_time_interval;

/// Planificador de tarjetas de ruta sobre un store prestado
pub struct SchedulePlanner<'a> {
    store: &'a mut ProductionStore,
}

impl<'a> SchedulePlanner<'a> {
    pub fn new(store: &'a mut ProductionStore) -> Self {
        Self { store }
    }

    /// Reemplazar el plan de una tarjeta con un nuevo conjunto de asignaciones
    ///
    /// Una tarjeta desconocida produce NotFound; un intervalo invertido
    /// produce un error de validación antes de aplicar mutación alguna.
    /// No se valida que los pasos pertenezcan a la tarjeta, que la sección
    /// coincida con la del paso, ni que las ventanas no se solapen.
    /// Replanificar con una lista vacía limpia el plan pero igualmente deja
    /// la tarjeta aprobada y planificada.
    pub fn plan_route_card(
        &mut self,
        card_id: i64,
        assignments: &[StepAssignment],
    ) -> AppResult<()> {
        if self.store.route_card(card_id).is_none() {
            return Err(not_found_error("Route card", &card_id.to_string()));
        }

        for assignment in assignments {
            validate_time_interval(&assignment.start_date_time, &assignment.end_date_time)
                .map_err(|_| {
                    validation_error(
                        "endDateTime",
                        "endDateTime must not be earlier than startDateTime",
                    )
                })?;
        }

        let removed = self.store.remove_schedule_for_card(card_id);
        for assignment in assignments {
            self.store.add_schedule_item(
                card_id,
                assignment.step_id,
                assignment.section_id,
                assignment.start_date_time,
                assignment.end_date_time,
            );
        }

        self.store
            .update_route_card_status(card_id, RouteCardStatus::Approved, Some(true));

        tracing::info!(
            "📅 Tarjeta {} replanificada: {} items eliminados, {} insertados",
            card_id,
            removed,
            assignments.len()
        );

        Ok(())
    }
}
