//! REST API client for the project registry endpoints, using [`reqwest`].

use investtrack_core::dashboard::DashboardStats;
use investtrack_core::metadata::Metadata;
use investtrack_core::project::{Project, ProjectInput};
use investtrack_core::types::DbId;
use investtrack_core::validation::rules::ValidationReport;
use serde::Deserialize;

/// HTTP client for one registry server.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiClientError {
    /// HTTP status of an API error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

impl ProjectsApi {
    /// Create a client for a server at `base_url`, e.g. `http://host:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/projects`: every record, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiClientError> {
        let response = self.client.get(self.url("/api/projects")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/projects/{id}`.
    pub async fn get_project(&self, id: DbId) -> Result<Project, ApiClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/metadata`.
    pub async fn metadata(&self) -> Result<Metadata, ApiClientError> {
        let response = self.client.get(self.url("/api/metadata")).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /api/projects`. Returns the stored record.
    pub async fn create_project(&self, input: &ProjectInput) -> Result<Project, ApiClientError> {
        let response = self
            .client
            .post(self.url("/api/projects"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /api/projects/{id}`. Overwrites every field of the record.
    pub async fn update_project(
        &self,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<Project, ApiClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/projects/{id}")))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /api/projects/{id}`. Returns the server's confirmation message.
    pub async fn delete_project(&self, id: DbId) -> Result<String, ApiClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/projects/{id}")))
            .send()
            .await?;
        let body: MessageBody = Self::parse_response(response).await?;
        Ok(body.message)
    }

    /// `POST /api/projects/validate`: server-side advisory validation.
    pub async fn validate_project(
        &self,
        input: &ProjectInput,
        editing_id: Option<DbId>,
    ) -> Result<ValidationReport, ApiClientError> {
        let body = serde_json::json!({
            "project": input,
            "editingId": editing_id,
        });
        let response = self
            .client
            .post(self.url("/api/projects/validate"))
            .json(&body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /api/dashboard/stats`.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiClientError> {
        let response = self
            .client
            .get(self.url("/api/dashboard/stats"))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Return the response unchanged on a success status, or an
    /// [`ApiClientError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
