//! HTTP client helpers for tests.

use serde_json::{Value, json};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            credentials: None,
        }
    }

    pub fn as_user(mut self, (user, password): (&str, &str)) -> Self {
        self.credentials = Some((user.to_string(), password.to_string()));
        self
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Some((user, password)) => builder.basic_auth(user, Some(password)),
            None => builder,
        }
    }

    /// POSTs JSON and returns status plus raw response.
    pub async fn post(&self, path: &str, body: &Value) -> Result<reqwest::Response, TestClientError> {
        let builder = self.authorize(self.client.post(self.url(path)));
        Ok(builder.json(body).send().await?)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, TestClientError> {
        let builder = self.authorize(self.client.get(self.url(path)));
        Ok(builder.send().await?)
    }

    /// POSTs JSON and expects a 200 JSON body.
    pub async fn post_ok(&self, path: &str, body: &Value) -> Result<Value, TestClientError> {
        let resp = self.post(path, body).await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn check(&self, files: &[(&str, &str)]) -> Result<Value, TestClientError> {
        self.post_ok("/v1/check", &files_body(files)).await
    }

    pub async fn archive(&self, files: &[(&str, &str)]) -> Result<Value, TestClientError> {
        self.post_ok("/v1/archive", &files_body(files)).await
    }
}

pub fn files_body(files: &[(&str, &str)]) -> Value {
    let files: Vec<Value> = files
        .iter()
        .map(|(name, text)| json!({ "name": name, "text": text }))
        .collect();
    json!({ "files": files })
}
