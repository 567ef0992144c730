//! Domain store en memoria
//!
//! Este módulo es el dueño de las colecciones canónicas del sistema y
//! expone los únicos puntos de entrada de mutación. Los identificadores se
//! asignan con un contador monotónico por tipo de entidad y nunca se
//! reutilizan. Las búsquedas por id que fallan devuelven `None`; el boundary
//! HTTP las convierte en respuestas 404.

mod seed;

use chrono::Utc;

use crate::models::department::{Department, Section};
use crate::models::operation::{CreateOperationRequest, Operation};
use crate::models::route_card::{
    CreateRouteCardRequest, RouteCard, RouteCardStatus, RouteCardStep,
};
use crate::models::schedule::{ScheduleFilters, ScheduleItem};
use crate::models::user::User;

/// Colecciones canónicas del sistema de planificación de producción
#[derive(Debug, Default)]
pub struct ProductionStore {
    departments: Vec<Department>,
    sections: Vec<Section>,
    users: Vec<User>,
    operations: Vec<Operation>,
    route_cards: Vec<RouteCard>,
    schedule_items: Vec<ScheduleItem>,

    operation_seq: i64,
    route_card_seq: i64,
    route_card_step_seq: i64,
    schedule_item_seq: i64,
}

impl ProductionStore {
    /// Crear un store vacío (sin datos de referencia)
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear un store con los datos de demostración del taller
    pub fn seeded() -> Self {
        let mut store = Self::new();
        seed::populate(&mut store);
        store
    }

    // --- Accesores de lectura -------------------------------------------

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn route_cards(&self) -> &[RouteCard] {
        &self.route_cards
    }

    pub fn schedule_items(&self) -> &[ScheduleItem] {
        &self.schedule_items
    }

    /// Buscar una tarjeta de ruta por id
    pub fn route_card(&self, id: i64) -> Option<&RouteCard> {
        self.route_cards.iter().find(|card| card.id == id)
    }

    // --- Mutaciones ------------------------------------------------------

    /// Crear una plantilla de operación con id y timestamps asignados
    pub fn create_operation(&mut self, request: CreateOperationRequest) -> Operation {
        let now = Utc::now();
        self.operation_seq += 1;

        let operation = Operation {
            id: self.operation_seq,
            department_id: request.department_id,
            section_id: request.section_id,
            operation_type: request.operation_type,
            operation_number: request.operation_number,
            technology: request.technology,
            default_duration_min: request.default_duration_min,
            color_hex: request.color_hex,
            created_at: now,
            updated_at: now,
        };

        log::info!(
            "💾 Operación {} creada: {} ({})",
            operation.id,
            operation.operation_number,
            operation.operation_type
        );

        self.operations.push(operation.clone());
        operation
    }

    /// Crear una tarjeta de ruta junto con todos sus pasos
    ///
    /// Cada paso recibe un id propio y el id de la tarjeta como
    /// back-reference. Los pasos nunca se comparten ni se re-asignan.
    pub fn create_route_card(&mut self, request: CreateRouteCardRequest) -> RouteCard {
        let now = Utc::now();
        self.route_card_seq += 1;
        let card_id = self.route_card_seq;

        let steps: Vec<RouteCardStep> = request
            .steps
            .into_iter()
            .map(|draft| {
                self.route_card_step_seq += 1;
                RouteCardStep {
                    id: self.route_card_step_seq,
                    route_card_id: card_id,
                    department_id: draft.department_id,
                    section_id: draft.section_id,
                    operation_type: draft.operation_type,
                    operation_number: draft.operation_number,
                    technology: draft.technology,
                    required_duration_min: draft.required_duration_min,
                }
            })
            .collect();

        let card = RouteCard {
            id: card_id,
            order_number: request.order_number,
            route_card_number: request.route_card_number,
            responsible_engineer: request.responsible_engineer,
            status: request.status,
            scheduled: request.scheduled,
            created_at: now,
            updated_at: now,
            steps,
        };

        log::info!(
            "💾 Tarjeta de ruta {} creada: {} con {} pasos",
            card.id,
            card.route_card_number,
            card.steps.len()
        );

        self.route_cards.push(card.clone());
        card
    }

    /// Actualizar estado (y opcionalmente el flag de planificación)
    ///
    /// Devuelve `None` si el id no existe; ninguna otra tarjeta se modifica.
    pub fn update_route_card_status(
        &mut self,
        id: i64,
        status: RouteCardStatus,
        scheduled: Option<bool>,
    ) -> Option<RouteCard> {
        let card = self.route_cards.iter_mut().find(|card| card.id == id)?;
        card.status = status;
        if let Some(scheduled) = scheduled {
            card.scheduled = scheduled;
        }
        card.updated_at = Utc::now();
        Some(card.clone())
    }

    /// Eliminar todos los schedule items de una tarjeta
    ///
    /// Devuelve cuántos items se eliminaron.
    pub fn remove_schedule_for_card(&mut self, route_card_id: i64) -> usize {
        let before = self.schedule_items.len();
        self.schedule_items
            .retain(|item| item.route_card_id != route_card_id);
        before - self.schedule_items.len()
    }

    /// Insertar un schedule item con id fresco
    pub fn add_schedule_item(
        &mut self,
        route_card_id: i64,
        route_card_step_id: i64,
        section_id: i64,
        start_date_time: chrono::DateTime<Utc>,
        end_date_time: chrono::DateTime<Utc>,
    ) -> ScheduleItem {
        self.schedule_item_seq += 1;
        let item = ScheduleItem {
            id: self.schedule_item_seq,
            route_card_id,
            route_card_step_id,
            section_id,
            start_date_time,
            end_date_time,
        };
        self.schedule_items.push(item.clone());
        item
    }

    /// Filtro puro del calendario sobre schedule items
    pub fn filter_schedule(&self, filters: &ScheduleFilters) -> Vec<ScheduleItem> {
        self.schedule_items
            .iter()
            .filter(|item| {
                if let Some(section_id) = filters.section_id {
                    if item.section_id != section_id {
                        return false;
                    }
                }
                if let Some(from) = filters.from {
                    if item.end_date_time < from {
                        return false;
                    }
                }
                if let Some(to) = filters.to {
                    if item.start_date_time > to {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}
