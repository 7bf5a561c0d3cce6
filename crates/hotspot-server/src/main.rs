//! hotspot server
//!
//! Serves the inefficient and optimized top-N-by-genre queries side by side
//! and reports how they compare:
//! - GET  /recommendations?genre=..&limit=..&mode=inefficient|optimized
//! - GET  /profiling-report, POST /profiling-reset
//! - GET  /health, /readyz, /metrics

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

use hotspot_core::error::{HotspotError, Result};
use hotspot_server::{app_state, config, router};

const CONFIG_PATH: &str = "hotspot.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let mut cfg = config::load_or_default(CONFIG_PATH)?;
    cfg.apply_listen_overrides(
        env::var("HOTSPOT_HOST").ok().as_deref(),
        env::var("HOTSPOT_PORT").ok().as_deref(),
    )?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    tracing::info!(
        records = state.catalog().len(),
        genres = ?state.catalog().genres(),
        variants = ?state.dispatcher().registered_variants(),
        "catalog loaded"
    );

    let app = router::build_router(state.clone());

    tracing::info!(%listen, "hotspot-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| HotspotError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| HotspotError::Internal(format!("server failed: {e}")))?;

    tracing::info!("hotspot-server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM; flips readiness to draining first.
async fn shutdown_signal(state: app_state::AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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

    state.metrics().set_draining();
    tracing::info!("shutdown requested, draining");
}
