use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use production_scheduling::api::create_app;
use production_scheduling::config::environment::EnvironmentConfig;
use production_scheduling::state::AppState;
use production_scheduling::store::ProductionStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏭 Production Scheduling - API de planificación de taller");
    info!("=========================================================");

    let config = EnvironmentConfig::default();
    let app_state = AppState::new(ProductionStore::seeded(), config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🏢 Datos de referencia:");
    info!("   GET  /api/departments - Listar departamentos");
    info!("   GET  /api/sections - Listar secciones de trabajo");
    info!("   GET  /api/users - Listar usuarios");
    info!("⚙️ Plantillas de operación:");
    info!("   GET  /api/operations - Listar operaciones");
    info!("   POST /api/operations - Crear operación");
    info!("🗂 Tarjetas de ruta:");
    info!("   GET  /api/route-cards - Listar tarjetas con pasos");
    info!("   POST /api/route-cards - Crear tarjeta");
    info!("   PATCH /api/route-cards/:id - Actualizar estado");
    info!("   GET  /api/route-cards/analytics - Resumen de analytics");
    info!("📅 Calendario:");
    info!("   GET  /api/schedule - Listar schedule items (filtros opcionales)");
    info!("   POST /api/schedule - Planificar tarjeta de ruta");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
