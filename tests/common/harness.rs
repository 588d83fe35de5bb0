//! Test server harness.

use simcheck::corpus::FsCorpusStore;
use simcheck::engine::{CheckSettings, PlagiarismChecker};
use simcheck::gateway::{HandlerState, create_router_with_state};
use simcheck::remote::MockRemoteSearch;
use simcheck::session::{Role, UserDirectory};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub const ADMIN: (&str, &str) = ("alice", "secret");
pub const JURY: (&str, &str) = ("bob", "hunter2");

pub struct TestServerConfig {
    /// `(name, text)` files written into the corpus directory before start.
    pub corpus: Vec<(String, String)>,
    pub remote: Option<MockRemoteSearch>,
    pub settings: CheckSettings,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            corpus: Vec::new(),
            remote: None,
            settings: CheckSettings {
                remote_timeout: Duration::from_millis(300),
                ..Default::default()
            },
        }
    }
}

impl TestServerConfig {
    pub fn with_corpus_file(mut self, name: &str, text: &str) -> Self {
        self.corpus.push((name.to_string(), text.to_string()));
        self
    }

    pub fn with_remote(mut self, remote: MockRemoteSearch) -> Self {
        self.remote = Some(remote);
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    corpus_dir: TempDir,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn corpus_path(&self) -> &Path {
        self.corpus_dir.path()
    }

    pub fn read_corpus_file(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.corpus_dir.path().join(name)).ok()
    }

    pub fn corpus_file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.corpus_dir.path())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| e.file_name().into_string().ok())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

fn test_users() -> UserDirectory {
    UserDirectory::default()
        .with_user(ADMIN.0, ADMIN.1, Role::Admin)
        .with_user(JURY.0, JURY.1, Role::Jury)
}

/// Spawns a server over a temp-dir corpus store, two fixed users and an
/// optional scripted remote search.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    let corpus_dir = TempDir::new()?;
    for (name, text) in &config.corpus {
        std::fs::write(corpus_dir.path().join(name), text)?;
    }

    let store = FsCorpusStore::new(
        corpus_dir.path().to_path_buf(),
        vec!["py".to_string(), "txt".to_string()],
    );
    let checker = PlagiarismChecker::new(store, config.remote, config.settings);
    let state = HandlerState::new(Arc::new(checker), Arc::new(test_users()));
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .ok();
    });

    wait_for_server_ready(
        addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        corpus_dir,
    })
}
