//! Remote row-store adapter.
//!
//! Pass-through request/response calls to a hosted tabular API
//! (PostgREST-style: tables addressed by name, rows filtered with
//! `id=eq.{n}`, list reads ordered ascending by id). Errors propagate to
//! the caller once - no retries.
//!
//! List and single-row reads are cached with `moka` (5-minute TTL) and
//! invalidated per table on any mutation.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde_json::Value;
use tracing::debug;

use async_trait::async_trait;

use crate::backend::RecordStore;
use crate::config::RemoteConfig;
use crate::error::StoreError;
use crate::record::Record;

/// Accept header that makes the row-store return a bare object for
/// single-row requests, and report "no row" instead of an empty list.
const ACCEPT_SINGLE: &str = "application/vnd.pgrst.object+json";

/// Prefer header asking mutations to echo the stored row back.
const PREFER_REPRESENTATION: &str = "return=representation";

/// How long cached reads stay fresh.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Client for the hosted row-store.
///
/// One instance serves every record type; the collection is picked per
/// call from [`Record::TABLE`].
#[derive(Clone)]
pub struct RemoteStore {
    inner: Arc<RemoteInner>,
}

struct RemoteInner {
    client: reqwest::Client,
    base: String,
    cache: Cache<String, Value>,
}

impl RemoteStore {
    /// Create a client for the configured row-store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Backend` if the access key cannot be encoded
    /// into request headers.
    pub fn new(config: &RemoteConfig) -> Result<Self, StoreError> {
        let key = config.key.expose_secret();
        let mut headers = HeaderMap::new();
        let api_key = HeaderValue::from_str(key)
            .map_err(|_| StoreError::Backend("remote access key is not header-safe".to_owned()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| StoreError::Backend("remote access key is not header-safe".to_owned()))?;
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(RemoteInner {
                client,
                base: format!("{}/rest/v1", config.url.as_str().trim_end_matches('/')),
                cache,
            }),
        })
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/{table}", self.inner.base)
    }

    /// Send a request and surface the row-store's own failure signals.
    ///
    /// `single` marks requests issued with the single-object Accept
    /// header, where a "no row" response maps to `NotFound`.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        single: Option<(&'static str, i64)>,
    ) -> Result<String, StoreError> {
        let response = request.send().await?;
        let status = response.status();
        // Body first for diagnostics; error payloads carry the store's message.
        let body = response.text().await?;

        if let Some((entity, id)) = single
            && status == StatusCode::NOT_ACCEPTABLE
        {
            return Err(StoreError::not_found(entity, id));
        }

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "remote store returned non-success status"
            );
            return Err(StoreError::Backend(format!(
                "HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        Ok(body)
    }

    async fn invalidate(&self, table: &str, id: i64) {
        self.inner.cache.invalidate(&table.to_owned()).await;
        self.inner.cache.invalidate(&format!("{table}:{id}")).await;
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for RemoteStore {
    async fn get_all(&self) -> Result<Vec<R>, StoreError> {
        let cache_key = R::TABLE.to_owned();
        if let Some(cached) = self.inner.cache.get(&cache_key).await {
            debug!(table = R::TABLE, "list served from cache");
            return Ok(serde_json::from_value(cached)?);
        }

        let request = self
            .inner
            .client
            .get(self.endpoint(R::TABLE))
            .query(&[("select", "*"), ("order", "id.asc")]);
        let body = self.send(request, None).await?;

        let value: Value = serde_json::from_str(&body)?;
        let records: Vec<R> = serde_json::from_value(value.clone())?;
        self.inner.cache.insert(cache_key, value).await;
        Ok(records)
    }

    async fn get_by_id(&self, id: R::Id) -> Result<R, StoreError> {
        let raw: i64 = id.into();
        let cache_key = format!("{}:{raw}", R::TABLE);
        if let Some(cached) = self.inner.cache.get(&cache_key).await {
            debug!(table = R::TABLE, id = raw, "row served from cache");
            return Ok(serde_json::from_value(cached)?);
        }

        let filter = format!("eq.{raw}");
        let request = self
            .inner
            .client
            .get(self.endpoint(R::TABLE))
            .query(&[("select", "*"), ("id", filter.as_str())])
            .header(reqwest::header::ACCEPT, ACCEPT_SINGLE);
        let body = self.send(request, Some((R::ENTITY, raw))).await?;

        let value: Value = serde_json::from_str(&body)?;
        let record: R = serde_json::from_value(value.clone())?;
        self.inner.cache.insert(cache_key, value).await;
        Ok(record)
    }

    async fn create(&self, draft: R::Draft) -> Result<R, StoreError> {
        let request = self
            .inner
            .client
            .post(self.endpoint(R::TABLE))
            .header(reqwest::header::ACCEPT, ACCEPT_SINGLE)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&draft);
        let body = self.send(request, None).await?;

        let record: R = serde_json::from_str(&body)?;
        self.invalidate(R::TABLE, record.id().into()).await;
        debug!(table = R::TABLE, id = %record.id(), "row created");
        Ok(record)
    }

    async fn update(&self, id: R::Id, patch: R::Patch) -> Result<R, StoreError> {
        let raw: i64 = id.into();
        let request = self
            .inner
            .client
            .patch(self.endpoint(R::TABLE))
            .query(&[("id", format!("eq.{raw}"))])
            .header(reqwest::header::ACCEPT, ACCEPT_SINGLE)
            .header("Prefer", PREFER_REPRESENTATION)
            .json(&patch);
        let body = self.send(request, Some((R::ENTITY, raw))).await?;

        let record: R = serde_json::from_str(&body)?;
        self.invalidate(R::TABLE, raw).await;
        debug!(table = R::TABLE, id = raw, "row updated");
        Ok(record)
    }

    async fn delete(&self, id: R::Id) -> Result<(), StoreError> {
        let raw: i64 = id.into();
        let request = self
            .inner
            .client
            .delete(self.endpoint(R::TABLE))
            .query(&[("id", format!("eq.{raw}"))]);
        // Row-filtered deletes succeed whether or not the row existed;
        // removal is idempotent in both modes.
        self.send(request, None).await?;

        self.invalidate(R::TABLE, raw).await;
        debug!(table = R::TABLE, id = raw, "row deleted");
        Ok(())
    }
}
