//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo el dominio vive en memoria detrás de
//! un único RwLock: las mutaciones toman el write lock durante la operación
//! completa, lo que preserva la semántica de una-operación-a-la-vez del
//! diseño.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::store::ProductionStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProductionStore>>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: ProductionStore, config: EnvironmentConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }
}
