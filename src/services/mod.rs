//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: la
//! planificación de tarjetas de ruta y la agregación de analytics.

pub mod analytics_service;
pub mod planner_service;

pub use analytics_service::*;
pub use planner_service::*;
