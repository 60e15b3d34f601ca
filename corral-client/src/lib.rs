//! Corral HTTP Client
//!
//! A type-safe HTTP client for the unicorn registry REST API.
//!
//! The view layer never talks to [`RegistryClient`] directly; it goes
//! through the [`Registry`] trait so tests can substitute an in-memory
//! implementation.
//!
//! # Example
//!
//! ```no_run
//! use corral_client::{Registry, RegistryClient};
//! use corral_core::RecordDraft;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = RegistryClient::new("http://localhost:8080");
//!
//!     let created = client
//!         .create(&RecordDraft::new("Spark", 3, "Pink"))
//!         .await?;
//!
//!     println!("Created unicorn: {}", created.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod records;

pub use error::{ClientError, Result};

use async_trait::async_trait;
use corral_core::{Record, RecordDraft};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// The remote operations the view layer depends on
///
/// Implemented over HTTP by [`RegistryClient`]; tests implement it with
/// an in-memory fake to drive store-synchronization scenarios without
/// a server.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Fetch every record in the registry
    async fn list(&self) -> Result<Vec<Record>>;

    /// Fetch one record by id
    async fn get(&self, id: &str) -> Result<Record>;

    /// Create a record from a draft; the server assigns the id
    async fn create(&self, draft: &RecordDraft) -> Result<Record>;

    /// Overwrite the record with the given id
    async fn update(&self, id: &str, draft: &RecordDraft) -> Result<Record>;

    /// Delete the record with the given id
    async fn delete(&self, id: &str) -> Result<()>;
}

/// HTTP client for the unicorn registry API
///
/// All record endpoints live under `{base_url}/unicorns`.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Base URL of the registry (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl RegistryClient {
    /// Create a new registry client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the registry API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new registry client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use corral_client::RegistryClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = RegistryClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the registry
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Reject non-success responses, carrying the error body along
    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ClientError::api_error(status.as_u16(), message))
    }

    /// Handle an API response and deserialize the JSON body
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let response = self.check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no useful body (DELETE)
    pub(crate) async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        self.check_status(response).await.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RegistryClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = RegistryClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = RegistryClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        http::Response::builder()
            .status(status)
            .body(body)
            .unwrap()
            .into()
    }

    #[tokio::test]
    async fn test_handle_response_parses_record_body() {
        let client = RegistryClient::new("http://localhost:8080");

        let records: Vec<Record> = client
            .handle_response(response(
                200,
                r#"[{"_id":"9","name":"Spark","age":3,"colour":"Pink"}]"#,
            ))
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "9");
        assert_eq!(records[0].name, "Spark");
    }

    #[tokio::test]
    async fn test_handle_response_maps_error_status() {
        let client = RegistryClient::new("http://localhost:8080");

        let err = client
            .handle_response::<Vec<Record>>(response(500, "registry down"))
            .await
            .unwrap_err();

        assert!(err.is_server_error());
        assert!(err.to_string().contains("registry down"));
    }

    #[tokio::test]
    async fn test_handle_response_flags_bad_body() {
        let client = RegistryClient::new("http://localhost:8080");

        let err = client
            .handle_response::<Vec<Record>>(response(200, "not json"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[tokio::test]
    async fn test_handle_empty_response_checks_status() {
        let client = RegistryClient::new("http://localhost:8080");

        assert!(client.handle_empty_response(response(200, "")).await.is_ok());

        let err = client
            .handle_empty_response(response(404, "no such unicorn"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
