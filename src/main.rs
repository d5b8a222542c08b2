//! Eureka HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use eureka::config::Config;
use eureka::fetch::HttpFetcher;
use eureka::gateway::{AppState, create_router_with_state};
use eureka::judge::{JudgeConfig, LlmJudge};
use eureka::store::Store;
use eureka::validation::Validator;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        db_path = %config.db_path.display(),
        judge_model = %config.judge_model,
        "Eureka starting"
    );

    let store = Arc::new(Store::open_local(&config.db_path).await?);

    let judge = LlmJudge::with_config(JudgeConfig {
        model: config.judge_model.clone(),
    });
    let fetcher = HttpFetcher::new(Duration::from_secs(config.fetch_timeout_secs))?;

    let validator = Arc::new(Validator::new(store, judge, fetcher));
    let app = create_router_with_state(AppState::new(validator));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Eureka shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
