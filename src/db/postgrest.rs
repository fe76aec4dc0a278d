//! PostgREST client for the hosted store
//!
//! The hosted Postgres is reached over HTTP through its PostgREST
//! layer; this client owns the connection handle and the credential
//! headers. It is constructed once at startup and handed to handlers
//! through `web::Data`.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_RANGE, RANGE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::StoreConfig;
use crate::error::{AppError, Result};

#[derive(Clone)]
pub struct PostgrestClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostgrestClient {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&config.service_key)
            .map_err(|e| AppError::Internal(format!("invalid service key: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.service_key))
            .map_err(|e| AppError::Internal(format!("invalid service key: {}", e)))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Fetch rows matching the given PostgREST query parameters
    pub async fn select<T>(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        debug!(table, ?query, "store select");

        let response = self
            .http
            .get(self.table_url(table))
            .query(query)
            .send()
            .await?;

        Self::rows(response).await
    }

    /// Insert a row and return the stored representation
    pub async fn insert<T>(&self, table: &str, body: &impl Serialize) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        debug!(table, "store insert");

        let response = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        Self::rows(response).await
    }

    /// Patch rows matching the query and return the stored representations
    pub async fn update<T>(
        &self,
        table: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        debug!(table, ?query, "store update");

        let response = self
            .http
            .patch(self.table_url(table))
            .query(query)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;

        Self::rows(response).await
    }

    /// Delete rows matching the query
    pub async fn delete(&self, table: &str, query: &[(&str, String)]) -> Result<()> {
        debug!(table, ?query, "store delete");

        let response = self
            .http
            .delete(self.table_url(table))
            .query(query)
            .send()
            .await?;

        Self::ensure_success(response).await.map(|_| ())
    }

    /// Count rows in a table without fetching them
    ///
    /// Uses `Prefer: count=exact` with a zero-width `Range`; PostgREST
    /// reports the total after the slash in `Content-Range`.
    pub async fn count(&self, table: &str) -> Result<i64> {
        debug!(table, "store count");

        let response = self
            .http
            .get(self.table_url(table))
            .query(&[("select", "id")])
            .header("Prefer", "count=exact")
            .header(RANGE, "0-0")
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;

        let content_range = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Store("store count response missing Content-Range".into()))?;

        content_range
            .rsplit('/')
            .next()
            .and_then(|total| total.parse().ok())
            .ok_or_else(|| {
                AppError::Store(format!("unparseable Content-Range: {}", content_range))
            })
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        error!(%status, "store request failed: {}", body);

        Err(AppError::Store(format!("store responded with {}", status)))
    }

    async fn rows<T>(response: reqwest::Response) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = Self::ensure_success(response).await?;

        response.json::<Vec<T>>().await.map_err(|e| {
            error!("store returned malformed rows: {}", e);
            AppError::Store(format!("malformed store response: {}", e))
        })
    }
}
