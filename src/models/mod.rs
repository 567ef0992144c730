//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que expone la API
//! y sus requests de creación/actualización.

pub mod analytics;
pub mod department;
pub mod operation;
pub mod route_card;
pub mod schedule;
pub mod user;
