//! Modelos de Department y Section
//!
//! Departamentos y secciones de trabajo son datos de referencia:
//! se cargan al arrancar y no tienen operaciones de escritura.

use serde::{Deserialize, Serialize};

/// Unidad organizativa de primer nivel del taller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Sección de trabajo dentro de un departamento
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: i64,
    pub department_id: i64,
    pub name: String,
}
