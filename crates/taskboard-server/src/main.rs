#![forbid(unsafe_code)]

use std::error::Error;
use std::sync::Arc;

use taskboard_core::{InMemoryTaskStore, TaskStore};
use taskboard_server::{AppState, ServerConfig, build_router};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("signal handlers unavailable, falling back to ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;
    init_tracing(config.log_json);

    let store: Arc<dyn TaskStore> = if config.seed_demo {
        Arc::new(InMemoryTaskStore::seeded())
    } else {
        Arc::new(InMemoryTaskStore::new())
    };
    let state = AppState::new(store).with_max_body_bytes(config.max_body_bytes);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await.map_err(|e| {
        error!(addr = %config.bind_addr, "bind failed: {e}");
        e
    })?;
    info!(
        addr = %listener.local_addr()?,
        seed_demo = config.seed_demo,
        "{} listening",
        taskboard_server::CRATE_NAME
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    info!("shutdown complete");
    Ok(())
}
