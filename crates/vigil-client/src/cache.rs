//! Keyed response cache with explicit invalidation
//!
//! A constructed component, never a global: the caller creates one cache,
//! reads go through it keyed by the canonical query string (or record
//! id), and mutations invalidate the affected scopes. Entries have no
//! TTL — the backend stays the source of truth, so staleness heals on
//! the next fetch after invalidation.

use dashmap::DashMap;
use tracing::debug;
use vigil_api::{Camera, DemographicsResult, Page};

use crate::query::{CameraListQuery, ResultsQuery};

/// Build the cache key for a camera list page.
pub fn camera_list_key(query: &CameraListQuery) -> String {
    query.to_query_string()
}

/// Build the cache key for a results query.
///
/// `camera_id` is always the leading parameter, which is what lets
/// per-camera invalidation match by prefix.
pub fn results_key(query: &ResultsQuery) -> String {
    query.to_query_string()
}

/// Response cache for the console's read paths.
pub struct ConsoleCache {
    camera_pages: DashMap<String, Page<Camera>>,
    cameras: DashMap<String, Camera>,
    results: DashMap<String, Vec<DemographicsResult>>,
}

impl ConsoleCache {
    pub fn new() -> Self {
        Self {
            camera_pages: DashMap::new(),
            cameras: DashMap::new(),
            results: DashMap::new(),
        }
    }

    /// Get a cached camera list page.
    pub fn get_camera_page(&self, query: &CameraListQuery) -> Option<Page<Camera>> {
        self.camera_pages
            .get(&camera_list_key(query))
            .map(|entry| entry.clone())
    }

    /// Cache a camera list page.
    pub fn put_camera_page(&self, query: &CameraListQuery, page: Page<Camera>) {
        self.camera_pages.insert(camera_list_key(query), page);
    }

    /// Drop every cached list page. Any camera mutation can reorder or
    /// re-filter every page, so list invalidation is all-or-nothing.
    pub fn invalidate_camera_lists(&self) {
        debug!("Invalidating {} cached camera list pages", self.camera_pages.len());
        self.camera_pages.clear();
    }

    /// Get a cached camera by id.
    pub fn get_camera(&self, id: &str) -> Option<Camera> {
        self.cameras.get(id).map(|entry| entry.clone())
    }

    /// Cache a camera under its own id.
    pub fn put_camera(&self, camera: Camera) {
        self.cameras.insert(camera.id.clone(), camera);
    }

    /// Drop one camera's cached detail.
    pub fn invalidate_camera(&self, id: &str) {
        self.cameras.remove(id);
    }

    /// Get a cached result set.
    pub fn get_results(&self, query: &ResultsQuery) -> Option<Vec<DemographicsResult>> {
        self.results.get(&results_key(query)).map(|entry| entry.clone())
    }

    /// Cache a result set.
    pub fn put_results(&self, query: &ResultsQuery, results: Vec<DemographicsResult>) {
        self.results.insert(results_key(query), results);
    }

    /// Drop every cached result set belonging to one camera, whatever
    /// filters were applied.
    pub fn invalidate_results(&self, camera_id: &str) {
        let prefix = ResultsQuery::new(camera_id).to_query_string();
        let scoped = format!("{prefix}&");
        self.results
            .retain(|key, _| key != &prefix && !key.starts_with(&scoped));
    }

    /// Drop everything.
    pub fn clear(&self) {
        self.camera_pages.clear();
        self.cameras.clear();
        self.results.clear();
    }
}

impl Default for ConsoleCache {
    fn default() -> Self {
        Self::new()
    }
}
