//! Simcheck HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use simcheck::config::Config;
use simcheck::corpus::{CorpusStore, FsCorpusStore};
use simcheck::engine::{CheckSettings, PlagiarismChecker};
use simcheck::gateway::{HandlerState, create_router_with_state};
use simcheck::remote::{CachedRemoteSearch, GithubConfig, GithubSearch};
use simcheck::session::UserDirectory;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        flag_threshold = config.flag_threshold,
        remote = config.remote_enabled(),
        "Simcheck starting"
    );

    let store = FsCorpusStore::new(config.corpus_path.clone(), config.corpus_extensions.clone());
    store.ensure_root()?;
    tracing::info!(
        corpus_path = %config.corpus_path.display(),
        entries = store.len()?,
        "Local corpus ready"
    );

    let remote = match &config.github_token {
        Some(token) => {
            let github = GithubSearch::new(
                GithubConfig::new(config.github_api_url.as_str(), token.as_str())
                    .max_files(config.remote_max_files)
                    .request_timeout(config.remote_timeout),
            )?;
            Some(CachedRemoteSearch::new(
                github,
                config.remote_cache_capacity,
                config.remote_cache_ttl,
            ))
        }
        None => {
            tracing::warn!("No SIMCHECK_GITHUB_TOKEN configured, remote search disabled");
            None
        }
    };

    let users = UserDirectory::from_path(&config.users_path)?;
    if users.is_empty() {
        tracing::warn!(path = %config.users_path.display(), "User directory is empty; every request will be rejected");
    }

    let checker = PlagiarismChecker::new(store, remote, CheckSettings::from(&config));
    let state = HandlerState::new(Arc::new(checker), Arc::new(users));
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Simcheck shutdown complete");
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
