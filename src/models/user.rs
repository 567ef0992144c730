//! Modelo de User
//!
//! Los usuarios son datos de referencia de solo lectura en este sistema.

use serde::{Deserialize, Serialize};

/// Rol de usuario dentro del taller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Technologist,
    Planner,
    Foreman,
    Administrator,
}

/// Usuario del sistema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
    pub email: String,
}
