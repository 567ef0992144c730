//! Datos de demostración del taller
//!
//! Equivalente a los datos de referencia con los que arranca el sistema:
//! tres departamentos, cinco secciones, cuatro usuarios, cinco plantillas de
//! operación, dos tarjetas de ruta y el plan de la tarjeta aprobada a partir
//! de las 08:00 del día actual.

use chrono::{Duration, Utc};

use super::ProductionStore;
use crate::models::department::{Department, Section};
use crate::models::operation::Operation;
use crate::models::route_card::{RouteCard, RouteCardStatus, RouteCardStep};
use crate::models::user::{User, UserRole};

pub(super) fn populate(store: &mut ProductionStore) {
    let now = Utc::now();
    let shift_start = now
        .date_naive()
        .and_hms_opt(8, 0, 0)
        .expect("valid shift start time")
        .and_utc();

    store.departments = vec![
        Department {
            id: 1,
            name: "Machining Shop".to_string(),
        },
        Department {
            id: 2,
            name: "Assembly Shop".to_string(),
        },
        Department {
            id: 3,
            name: "Testing Center".to_string(),
        },
    ];

    store.sections = vec![
        Section {
            id: 1,
            department_id: 1,
            name: "Turning Section".to_string(),
        },
        Section {
            id: 2,
            department_id: 1,
            name: "Milling Section".to_string(),
        },
        Section {
            id: 3,
            department_id: 2,
            name: "Housing Assembly".to_string(),
        },
        Section {
            id: 4,
            department_id: 2,
            name: "Electrical Wiring".to_string(),
        },
        Section {
            id: 5,
            department_id: 3,
            name: "Testing".to_string(),
        },
    ];

    store.users = vec![
        User {
            id: 1,
            name: "Anna Petrova".to_string(),
            role: UserRole::Technologist,
            email: "anna@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Igor Sokolov".to_string(),
            role: UserRole::Planner,
            email: "igor@example.com".to_string(),
        },
        User {
            id: 3,
            name: "Maria Ivanova".to_string(),
            role: UserRole::Foreman,
            email: "maria@example.com".to_string(),
        },
        User {
            id: 4,
            name: "Admin".to_string(),
            role: UserRole::Administrator,
            email: "admin@example.com".to_string(),
        },
    ];

    let operations = [
        (1, 1, 1, "Turning", "TOK-101", "Surface machining", 90, "#93C5FD"),
        (2, 1, 2, "Milling", "FRZ-205", "Slot milling", 120, "#FBBF24"),
        (3, 2, 3, "Assembly", "SB-310", "Complex assembly", 180, "#34D399"),
        (4, 2, 4, "Wiring", "EL-120", "Wiring hookup", 150, "#F472B6"),
        (5, 3, 5, "Testing", "TEST-005", "Leak testing", 200, "#F87171"),
    ];
    store.operations = operations
        .into_iter()
        .map(
            |(id, department_id, section_id, op_type, number, technology, duration, color)| {
                Operation {
                    id,
                    department_id,
                    section_id,
                    operation_type: op_type.to_string(),
                    operation_number: number.to_string(),
                    technology: technology.to_string(),
                    default_duration_min: duration,
                    color_hex: color.to_string(),
                    created_at: now,
                    updated_at: now,
                }
            },
        )
        .collect();

    let step = |id: i64,
                route_card_id: i64,
                department_id: i64,
                section_id: i64,
                op_type: &str,
                number: &str,
                technology: &str,
                duration: i32| RouteCardStep {
        id,
        route_card_id,
        department_id,
        section_id,
        operation_type: op_type.to_string(),
        operation_number: number.to_string(),
        technology: technology.to_string(),
        required_duration_min: duration,
    };

    store.route_cards = vec![
        RouteCard {
            id: 1,
            order_number: "ORD-1001".to_string(),
            route_card_number: "RC-5001".to_string(),
            responsible_engineer: 1,
            status: RouteCardStatus::Approved,
            scheduled: true,
            created_at: now,
            updated_at: now,
            steps: vec![
                step(1, 1, 1, 1, "Turning", "TOK-101", "Surface machining", 90),
                step(2, 1, 1, 2, "Milling", "FRZ-205", "Slot milling", 120),
                step(3, 1, 2, 3, "Assembly", "SB-310", "Complex assembly", 180),
            ],
        },
        RouteCard {
            id: 2,
            order_number: "ORD-1002".to_string(),
            route_card_number: "RC-5002".to_string(),
            responsible_engineer: 1,
            status: RouteCardStatus::Draft,
            scheduled: false,
            created_at: now,
            updated_at: now,
            steps: vec![
                step(4, 2, 1, 1, "Turning", "TOK-101", "Surface machining", 60),
                step(5, 2, 2, 4, "Wiring", "EL-120", "Wiring hookup", 150),
                step(6, 2, 3, 5, "Testing", "TEST-005", "Leak testing", 210),
            ],
        },
    ];

    // Plan de la tarjeta 1: tres ventanas consecutivas desde las 08:00
    store.schedule_items.clear();
    store.add_schedule_item(1, 1, 1, shift_start, shift_start + Duration::hours(2));
    store.add_schedule_item(
        1,
        2,
        2,
        shift_start + Duration::hours(2),
        shift_start + Duration::hours(5),
    );
    store.add_schedule_item(
        1,
        3,
        3,
        shift_start + Duration::hours(5),
        shift_start + Duration::hours(9),
    );

    store.operation_seq = store.operations.len() as i64;
    store.route_card_seq = store.route_cards.len() as i64;
    store.route_card_step_seq = store
        .route_cards
        .iter()
        .map(|card| card.steps.len() as i64)
        .sum();
}
