//! REST client for the admin backend.
//!
//! Wraps the `/rabbis` and `/series` collections using [`reqwest`]. One
//! attempt per call, no retry, no client-side timeout. The client holds no
//! state besides its connection pool.

use kol_torah_core::types::DbId;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AdminConfig;
use crate::models::{Rabbi, RabbiCreate, RabbiUpdate, Series, SeriesCreate, SeriesUpdate};

/// Errors from the admin REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The addressed record does not exist.
    #[error("{resource} with id {id} not found")]
    NotFound {
        resource: &'static str,
        id: DbId,
    },

    /// The backend returned any other non-2xx status (validation failures
    /// arrive here as 400/422).
    #[error("Admin API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// HTTP client for the admin backend.
#[derive(Debug, Clone)]
pub struct AdminApi {
    client: reqwest::Client,
    base_url: String,
}

impl AdminApi {
    /// Create a client for the backend at `base_url`, e.g. `http://localhost:8000`.
    ///
    /// Every request carries `Content-Type: application/json`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &AdminConfig) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.clone())
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sub-client for the `/rabbis` collection.
    pub fn rabbis(&self) -> RabbiApi<'_> {
        RabbiApi { api: self }
    }

    /// Sub-client for the `/series` collection.
    pub fn series(&self) -> SeriesApi<'_> {
        SeriesApi { api: self }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- private helpers ----

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        subject: Option<(&'static str, DbId)>,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::parse_response(response, subject).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::parse_response(response, None).await
    }

    async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        subject: (&'static str, DbId),
    ) -> Result<T, ApiError> {
        tracing::debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::parse_response(response, Some(subject)).await
    }

    async fn delete(&self, path: &str, subject: (&'static str, DbId)) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        Self::ensure_success(response, Some(subject)).await?;
        Ok(())
    }

    /// Ensure the response has a success status code. A 404 on a request
    /// addressing `subject` becomes [`ApiError::NotFound`]; any other failure
    /// becomes [`ApiError::Api`] with the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
        subject: Option<(&'static str, DbId)>,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if let (StatusCode::NOT_FOUND, Some((resource, id))) = (status, subject) {
            return Err(ApiError::NotFound { resource, id });
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(ApiError::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
        subject: Option<(&'static str, DbId)>,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response, subject).await?;
        Ok(response.json::<T>().await?)
    }
}

const RABBI: &str = kol_torah_core::rabbi::ENTITY;
const SERIES: &str = kol_torah_core::series::ENTITY;

/// Operations on the `/rabbis` collection.
#[derive(Debug, Clone, Copy)]
pub struct RabbiApi<'a> {
    api: &'a AdminApi,
}

impl RabbiApi<'_> {
    /// `GET /rabbis/` -- the whole collection, in backend order.
    pub async fn list_all(&self) -> Result<Vec<Rabbi>, ApiError> {
        self.api.get("/rabbis/", None).await
    }

    /// `GET /rabbis/{id}`
    pub async fn get_by_id(&self, id: DbId) -> Result<Rabbi, ApiError> {
        self.api.get(&format!("/rabbis/{id}"), Some((RABBI, id))).await
    }

    /// `POST /rabbis/` -- returns the server-assigned record.
    pub async fn create(&self, payload: &RabbiCreate) -> Result<Rabbi, ApiError> {
        self.api.post("/rabbis/", payload).await
    }

    /// `PUT /rabbis/{id}` with a sparse payload.
    pub async fn update(&self, id: DbId, payload: &RabbiUpdate) -> Result<Rabbi, ApiError> {
        self.api
            .put(&format!("/rabbis/{id}"), payload, (RABBI, id))
            .await
    }

    /// `DELETE /rabbis/{id}` -- the backend also deletes the rabbi's series.
    pub async fn delete_by_id(&self, id: DbId) -> Result<(), ApiError> {
        self.api.delete(&format!("/rabbis/{id}"), (RABBI, id)).await
    }
}

/// Operations on the `/series` collection.
#[derive(Debug, Clone, Copy)]
pub struct SeriesApi<'a> {
    api: &'a AdminApi,
}

impl SeriesApi<'_> {
    /// `GET /series/`
    pub async fn list_all(&self) -> Result<Vec<Series>, ApiError> {
        self.api.get("/series/", None).await
    }

    /// `GET /series/by-rabbi/{rabbi_id}`. Fails with `NotFound` naming the
    /// rabbi when the parent does not exist.
    pub async fn list_by_rabbi(&self, rabbi_id: DbId) -> Result<Vec<Series>, ApiError> {
        self.api
            .get(&format!("/series/by-rabbi/{rabbi_id}"), Some((RABBI, rabbi_id)))
            .await
    }

    /// `GET /series/{id}`
    pub async fn get_by_id(&self, id: DbId) -> Result<Series, ApiError> {
        self.api.get(&format!("/series/{id}"), Some((SERIES, id))).await
    }

    /// `POST /series/`
    pub async fn create(&self, payload: &SeriesCreate) -> Result<Series, ApiError> {
        self.api.post("/series/", payload).await
    }

    /// `PUT /series/{id}` with a sparse payload.
    pub async fn update(&self, id: DbId, payload: &SeriesUpdate) -> Result<Series, ApiError> {
        self.api
            .put(&format!("/series/{id}"), payload, (SERIES, id))
            .await
    }

    /// `DELETE /series/{id}`
    pub async fn delete_by_id(&self, id: DbId) -> Result<(), ApiError> {
        self.api.delete(&format!("/series/{id}"), (SERIES, id)).await
    }
}
