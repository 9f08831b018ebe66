use anyhow::Result;
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use metro_fleet_planner::config::EnvironmentConfig;
use metro_fleet_planner::create_app;
use metro_fleet_planner::services::line_simulation::run_line_simulation;
use metro_fleet_planner::services::scheduler::TokioScheduler;
use metro_fleet_planner::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚇 Metro Fleet Planner - Dashboard API");
    info!("======================================");

    let config = EnvironmentConfig::from_env()?;
    if config.is_development() {
        info!("🛠️ Entorno de desarrollo (usuario demo: {})", config.demo_username);
    }
    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = AppState::seeded(config, Utc::now().date_naive(), Arc::new(TokioScheduler));
    info!(
        "✅ Flota cargada: {} trenes, {} job cards",
        app_state.fleet.read().await.trains().len(),
        app_state.fleet.read().await.job_cards().len()
    );

    // Simulación de línea en background
    tokio::spawn(run_line_simulation(
        app_state.line.clone(),
        app_state.scheduler.clone(),
        app_state.line_timing(),
    ));

    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("   POST /api/login - Credenciales demo");
    info!("🎛️ Modo de operación:");
    info!("   GET  /api/mode - Modo actual");
    info!("   PUT  /api/mode - Fijar modo");
    info!("   POST /api/mode/toggle - Alternar modo festival");
    info!("🚆 Flota:");
    info!("   GET  /api/trains - Listar trenes");
    info!("   GET  /api/trains/:train_id - Obtener tren");
    info!("   GET  /api/job-cards - Listar job cards");
    info!("   POST /api/job-cards - Crear job card");
    info!("   DELETE /api/job-cards/:id - Eliminar job card");
    info!("🧠 Planificador:");
    info!("   GET  /api/planner/recommendations - Recomendaciones");
    info!("   GET  /api/what-if - Vista del simulador");
    info!("   POST /api/what-if - Aplicar escenario");
    info!("   POST /api/what-if/reset - Descartar escenario");
    info!("📊 Dashboard y reportes:");
    info!("   GET  /api/dashboard/summary - Tarjetas de resumen");
    info!("   GET  /api/dashboard/charts - Series de gráficos");
    info!("   GET  /api/reports/timeline - Timeline de job cards");
    info!("   GET  /api/reports/export/csv - Exportar CSV");
    info!("   GET  /api/reports/export/html - Reporte imprimible");
    info!("   GET  /api/line - Simulación de línea");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
