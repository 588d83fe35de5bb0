use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::error::RemoteSearchError;
use super::model::{
    ApiErrorResponse, CodeSearchItem, CodeSearchResponse, FileContentResponse, RemoteDocument,
    RemoteStatus,
};

/// Retrieves candidate texts for a query from an external index.
pub trait RemoteSearch: Send + Sync {
    /// Returns matching documents in provider order.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RemoteDocument>, RemoteSearchError>> + Send;

    /// Reports whether searches can currently succeed.
    fn status(&self) -> impl std::future::Future<Output = RemoteStatus> + Send;
}

const USER_AGENT: &str = concat!("simcheck/", env!("CARGO_PKG_VERSION"));

/// Language qualifier appended to every code search query.
const SEARCH_QUALIFIERS: &str = "in:file language:python";

#[derive(Debug, Clone)]
/// Settings for [`GithubSearch`].
pub struct GithubConfig {
    /// API base URL, without trailing slash.
    pub api_url: String,
    /// Personal access token.
    pub token: String,
    /// Max search results to download.
    pub max_files: u32,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
}

impl GithubConfig {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into().trim().to_string(),
            max_files: 5,
            request_timeout: Duration::from_secs(10),
        }
    }

    pub fn max_files(mut self, max_files: u32) -> Self {
        self.max_files = max_files;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
/// GitHub code search client.
pub struct GithubSearch {
    http: reqwest::Client,
    config: GithubConfig,
}

impl GithubSearch {
    /// Builds a client with the configured timeout and user agent.
    pub fn new(config: GithubConfig) -> Result<Self, RemoteSearchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GithubConfig {
        &self.config
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", "application/vnd.github+json")
    }

    async fn error_message(response: reqwest::Response) -> String {
        response
            .json::<ApiErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }

    async fn fetch_file(&self, item: &CodeSearchItem) -> Result<Option<String>, RemoteSearchError> {
        let response = self.get(&item.url).send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(RemoteSearchError::Status {
                status,
                message: Self::error_message(response).await,
            });
        }

        let file: FileContentResponse = response.json().await?;
        if file
            .encoding
            .as_deref()
            .is_some_and(|encoding| encoding != "base64")
        {
            return Ok(None);
        }

        Ok(file.content.and_then(|content| decode_content(&content)))
    }
}

/// Decodes GitHub's line-wrapped base64 file content as UTF-8.
pub fn decode_content(encoded: &str) -> Option<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64_STANDARD.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

impl RemoteSearch for GithubSearch {
    async fn search(&self, query: &str) -> Result<Vec<RemoteDocument>, RemoteSearchError> {
        let url = format!("{}/search/code", self.config.api_url);
        let q = format!("{} {}", query, SEARCH_QUALIFIERS);
        let per_page = self.config.max_files.to_string();

        let response = self
            .get(&url)
            .query(&[("q", q.as_str()), ("per_page", per_page.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(RemoteSearchError::Status {
                status,
                message: Self::error_message(response).await,
            });
        }

        let results: CodeSearchResponse = response.json().await?;
        debug!(query, items = results.items.len(), "Code search returned");

        let mut documents = Vec::with_capacity(results.items.len());
        for item in &results.items {
            match self.fetch_file(item).await {
                Ok(Some(content)) => documents.push(RemoteDocument::new(item.name.as_str(), content)),
                Ok(None) => debug!(file = %item.name, "Skipping file without decodable content"),
                Err(e) => warn!(file = %item.name, error = %e, "Failed to download search result"),
            }
        }

        Ok(documents)
    }

    async fn status(&self) -> RemoteStatus {
        let url = format!("{}/user", self.config.api_url);
        match self.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                RemoteStatus::available("Token is valid.")
            }
            Ok(response) => RemoteStatus::unavailable(format!(
                "Invalid token: {}",
                Self::error_message(response).await
            )),
            Err(e) => RemoteStatus::unavailable(format!("Token check failed: {}", e)),
        }
    }
}
