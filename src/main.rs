use std::net::SocketAddr;
use std::sync::Arc;

use mikrotik_poe_exporter::{
    AppState, Config, MetricsRegistry, PoeStatusService, Result, SshTransport, create_router,
};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Инициализация логирования
    setup_tracing();

    // Загружаем конфигурацию (power.env / .env / окружение)
    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!(
        "Polling PoE on {} as {} (port {})",
        config.ssh.host,
        config.ssh.user,
        config.ssh.port
    );

    let metrics = MetricsRegistry::new();
    let transport = Arc::new(SshTransport::new(config.ssh.clone()));

    // Первичный опрос всех групп портов: заполняет кэш и проверяет связь
    let service = PoeStatusService::startup(&config.interfaces, transport, metrics.clone())
        .await
        .map_err(|e| {
            tracing::error!("Startup poll failed: {}", e);
            e
        })?;
    for group in service.registry().groups() {
        tracing::info!("  - group {}", group);
    }
    tracing::info!("Ready.");

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let state = Arc::new(AppState {
        config,
        service,
        metrics,
    });

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    // Ожидание Ctrl+C
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("MikroTik PoE Exporter starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /health       - Health check");
    tracing::info!("  - GET /ports        - PoE status of all ports");
    tracing::info!("  - GET /ports/{{name}} - PoE status of one port");
    tracing::info!("  - GET /metrics      - Prometheus metrics");

    // Запуск сервера с graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG, по умолчанию "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
