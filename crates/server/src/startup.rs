use std::future::Future;

use axum::Router;
use configs::AppConfig;
use models::RecordKind;
use service::StoreGateway;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolves on Ctrl+C or, on unix, SIGTERM. A handler that cannot be
/// installed never resolves.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(event = "shutdown_signal", "shutdown requested");
}

/// Public entry: build the app and serve until a shutdown signal arrives.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, shutdown_signal()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests and
/// release the store.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    RecordKind::verify_collections()?;

    let store = StoreGateway::connect(&cfg.database).await?;
    match store.ping().await {
        None => warn!(event = "store_unconfigured", "DATABASE_URL not set; running without persistence"),
        Some(Ok(())) => info!(event = "store_ready", database = store.database_name().unwrap_or_default(), "document store reachable"),
        Some(Err(e)) => warn!(event = "store_unreachable", error = %e, "document store not reachable; reads fall back, writes fail"),
    }

    let state = ServerState::new(store.clone());
    let app: Router = routes::build_router(state, build_cors(), cfg.server.request_timeout());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "starting server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    store.shutdown().await;
    info!(event = "stopped", "server stopped");
    Ok(())
}
