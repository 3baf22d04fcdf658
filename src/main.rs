use motor_repair_ops::{
    config::environment::EnvironmentConfig, create_app, database::connection::DatabaseConnection,
    state::AppState,
};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 Iniciando Motor Repair Ops API...");

    let config = EnvironmentConfig::from_env();
    let database = DatabaseConnection::new_default().await?;
    info!("✅ Conexión a PostgreSQL establecida");

    let app_state = AppState::new(database.pool().clone(), config.clone());

    let app = create_app(app_state);

    debug!("📋 Endpoints disponibles:");
    debug!("   GET  /health");
    debug!("   /api/company   - empresas cliente");
    debug!("   /api/motor     - motores en servicio");
    debug!("   /api/job       - trabajos de reparación");
    debug!("   /api/invoice   - facturas");
    debug!("   /api/warranty  - garantías");
    debug!("   /api/user      - usuarios del taller");

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Servidor escuchando en http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("no se pudo instalar el handler de Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("no se pudo instalar el handler de SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Señal de apagado recibida, cerrando servidor...");
}
