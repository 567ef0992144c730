//! Production Scheduling Backend
//!
//! API REST de planificación de producción para un taller de fabricación:
//! departamentos, secciones, plantillas de operación, tarjetas de ruta y
//! calendario de asignaciones, con analytics agregados. Todo el estado vive
//! en memoria de proceso.

pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;
