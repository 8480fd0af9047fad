// ConsoleClient - typed facade over the console REST API

use vigil_api::{
    Camera, CameraUpdate, DemographicsConfig, DemographicsConfigCreate, DemographicsConfigUpdate,
    DemographicsResult, Page, Tag,
};

use crate::{
    config::ConsoleClientConfig,
    constants::api_path,
    error::ClientError,
    http::{HttpClient, HttpClientConfig},
    query::{CameraListQuery, ResultsQuery},
};

/// HTTP client for the camera console backend
pub struct ConsoleClient {
    http: HttpClient,
}

impl ConsoleClient {
    /// Create a new ConsoleClient with the given configuration
    pub fn new(config: ConsoleClientConfig) -> Result<Self, ClientError> {
        let http_config = HttpClientConfig::new(&config.base_url)
            .with_timeouts(config.connect_timeout_ms, config.read_timeout_ms)
            .with_retries(config.max_retries, config.retry_delay_ms);

        Ok(Self {
            http: HttpClient::new(http_config)?,
        })
    }

    /// Create a new ConsoleClient from a base URL with default tuning
    pub fn from_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::new(ConsoleClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    // ============================================================================
    // Camera APIs
    // ============================================================================

    /// List cameras, paginated and optionally filtered by name
    pub async fn camera_list(&self, query: &CameraListQuery) -> Result<Page<Camera>, ClientError> {
        self.http
            .get_with_query(api_path::CAMERAS, &query.params())
            .await
    }

    /// Fetch one camera, embedding its tags and demographics config
    /// when present
    pub async fn camera_get(&self, id: &str) -> Result<Camera, ClientError> {
        self.http.get(&format!("{}{}", api_path::CAMERAS, id)).await
    }

    /// Update a camera's settings
    pub async fn camera_update(
        &self,
        id: &str,
        update: &CameraUpdate,
    ) -> Result<Camera, ClientError> {
        self.http
            .put_json(&format!("{}{}", api_path::CAMERAS, id), update)
            .await
    }

    // ============================================================================
    // Tag APIs
    // ============================================================================

    /// List every tag
    pub async fn tag_list(&self) -> Result<Vec<Tag>, ClientError> {
        self.http.get(api_path::TAGS).await
    }

    // ============================================================================
    // Demographics APIs
    // ============================================================================

    /// Create a demographics config for a camera
    pub async fn demographics_config_create(
        &self,
        payload: &DemographicsConfigCreate,
    ) -> Result<DemographicsConfig, ClientError> {
        self.http
            .post_json(api_path::DEMOGRAPHICS_CONFIG, payload)
            .await
    }

    /// Update an existing demographics config
    pub async fn demographics_config_update(
        &self,
        id: &str,
        payload: &DemographicsConfigUpdate,
    ) -> Result<DemographicsConfig, ClientError> {
        self.http
            .put_json(&format!("{}/{}", api_path::DEMOGRAPHICS_CONFIG, id), payload)
            .await
    }

    /// Fetch detection results for a camera. The backend answers an
    /// empty array, not 404, when nothing matches.
    pub async fn demographics_results(
        &self,
        query: &ResultsQuery,
    ) -> Result<Vec<DemographicsResult>, ClientError> {
        self.http
            .get_with_query(api_path::DEMOGRAPHICS_RESULTS, &query.params())
            .await
    }
}
