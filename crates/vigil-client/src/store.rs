//! Fetch-through-cache wiring for the console's views
//!
//! Reads consult the cache before the network; mutations write through
//! to the backend and invalidate the affected entries so the next read
//! refetches. Concurrent edits to the same resource resolve
//! last-write-wins — the backend is the source of truth and any
//! staleness heals on the next fetch after invalidation.

use tracing::debug;
use vigil_api::{
    Camera, CameraUpdate, DemographicsConfig, DemographicsConfigCreate, DemographicsConfigUpdate,
    DemographicsResult, Page,
};

use crate::{
    cache::ConsoleCache,
    client::ConsoleClient,
    error::ClientError,
    query::{CameraListQuery, ResultsQuery},
};

/// Cached read/write access to cameras and demographics.
pub struct CameraStore {
    client: ConsoleClient,
    cache: ConsoleCache,
}

impl CameraStore {
    /// Create a store with its own empty cache.
    pub fn new(client: ConsoleClient) -> Self {
        Self {
            client,
            cache: ConsoleCache::new(),
        }
    }

    /// Create a store around an injected cache.
    pub fn with_cache(client: ConsoleClient, cache: ConsoleCache) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &ConsoleCache {
        &self.cache
    }

    /// List cameras, serving repeated queries from the cache.
    pub async fn cameras(&self, query: &CameraListQuery) -> Result<Page<Camera>, ClientError> {
        if let Some(page) = self.cache.get_camera_page(query) {
            debug!("Camera list page served from cache");
            return Ok(page);
        }

        let page = self.client.camera_list(query).await?;
        self.cache.put_camera_page(query, page.clone());
        Ok(page)
    }

    /// Fetch one camera, serving repeats from the cache.
    pub async fn camera(&self, id: &str) -> Result<Camera, ClientError> {
        if let Some(camera) = self.cache.get_camera(id) {
            debug!("Camera {} served from cache", id);
            return Ok(camera);
        }

        let camera = self.client.camera_get(id).await?;
        self.cache.put_camera(camera.clone());
        Ok(camera)
    }

    /// Update a camera, then drop every cache entry the edit could have
    /// changed. The server's response is the fresh detail, so it goes
    /// straight back into the cache.
    pub async fn update_camera(
        &self,
        id: &str,
        update: &CameraUpdate,
    ) -> Result<Camera, ClientError> {
        let camera = self.client.camera_update(id, update).await?;

        self.cache.invalidate_camera(id);
        self.cache.invalidate_camera_lists();
        self.cache.put_camera(camera.clone());
        Ok(camera)
    }

    /// Fetch detection results for a camera, serving repeated queries
    /// from the cache. A query with no camera selected short-circuits
    /// to an empty result set without touching the network.
    pub async fn results(
        &self,
        query: &ResultsQuery,
    ) -> Result<Vec<DemographicsResult>, ClientError> {
        if query.camera_id().is_empty() {
            return Ok(Vec::new());
        }

        if let Some(results) = self.cache.get_results(query) {
            debug!("Results for camera {} served from cache", query.camera_id());
            return Ok(results);
        }

        let results = self.client.demographics_results(query).await?;
        self.cache.put_results(query, results.clone());
        Ok(results)
    }

    /// Create a demographics config; the owning camera's cached detail
    /// embeds the config, so it is invalidated.
    pub async fn create_config(
        &self,
        payload: &DemographicsConfigCreate,
    ) -> Result<DemographicsConfig, ClientError> {
        let config = self.client.demographics_config_create(payload).await?;
        self.cache.invalidate_camera(&config.camera_id);
        Ok(config)
    }

    /// Update a demographics config; invalidates the owning camera's
    /// cached detail.
    pub async fn update_config(
        &self,
        id: &str,
        payload: &DemographicsConfigUpdate,
    ) -> Result<DemographicsConfig, ClientError> {
        let config = self.client.demographics_config_update(id, payload).await?;
        self.cache.invalidate_camera(&config.camera_id);
        Ok(config)
    }
}
