//! Cache Client
//!
//! Typed HTTPS client for the get, put and del remote calls.

use reqwest::StatusCode;
use thiserror::Error;

use crate::cache::Entry;

/// Errors returned by [`CacheClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server has no entry for the key
    #[error("Key not found: {0}")]
    NotFound(String),

    /// The server answered with an unexpected status
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Connection, TLS or decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for a remote cache server.
#[derive(Debug, Clone)]
pub struct CacheClient {
    http: reqwest::Client,
    base_url: String,
}

impl CacheClient {
    /// Creates a client for the server at `base_url`, e.g. `https://127.0.0.1:8888`.
    ///
    /// `accept_invalid_certs` allows self-signed development certificates.
    pub fn new(base_url: impl Into<String>, accept_invalid_certs: bool) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the entry stored under `key`.
    pub async fn get(&self, key: &str) -> Result<Entry, ClientError> {
        self.call("get", &Entry::keyed(key)).await
    }

    /// Stores `entry`, returning it with status OK.
    pub async fn put(&self, entry: &Entry) -> Result<Entry, ClientError> {
        self.call("put", entry).await
    }

    /// Deletes `key`, returning the echoed request.
    pub async fn del(&self, key: &str) -> Result<Entry, ClientError> {
        self.call("del", &Entry::keyed(key)).await
    }

    async fn call(&self, method: &str, entry: &Entry) -> Result<Entry, ClientError> {
        let url = format!("{}/cache/{}", self.base_url, method);
        let response = self.http.post(url).json(entry).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(entry.key.clone())),
            status => Err(ClientError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
