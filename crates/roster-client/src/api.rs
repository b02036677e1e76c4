//! Async HTTP client for the roster REST API.
//!
//! [`ApiClient`] wraps a `reqwest::Client` with the four record operations.
//! Non-2xx responses are decoded into [`ClientError::Api`] using the
//! `{"error"}` body the server emits.

use serde::Deserialize;

use roster_core::{RecordId, Student, StudentFields, StudentPatch};

use crate::error::ClientError;

/// Error body shape the server emits on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the record API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for a server at `base_url`, e.g.
    /// `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        ApiClient {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches all records.
    pub async fn list(&self) -> Result<Vec<Student>, ClientError> {
        let response = self.http.get(self.url("/students")).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Creates a record, returning it with its assigned id.
    pub async fn create(&self, fields: &StudentFields) -> Result<Student, ClientError> {
        let response = self
            .http
            .post(self.url("/students"))
            .json(fields)
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Merges a patch into the record with the given id.
    pub async fn update(&self, id: RecordId, patch: &StudentPatch) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/students/{}", id)))
            .json(patch)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Deletes the record with the given id.
    pub async fn delete(&self, id: RecordId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/students/{}", id)))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into [`ClientError::Api`], decoding the
/// `{"error"}` body when present.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    tracing::warn!(status = status.as_u16(), %message, "api request failed");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
