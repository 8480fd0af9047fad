//! Wire records for cameras, tags, and demographics
//!
//! These mirror the backend's JSON shapes exactly. Optional fields are
//! skipped when absent so partial update payloads never send nulls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::demographics::{AgeGroup, Emotion, Ethnicity, Gender};

/// Label attached to cameras; many-to-many.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// A managed camera as the backend serves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub rtsp_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_frame_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_frame_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_quality: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_fps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_skip_frames: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics_config: Option<DemographicsConfig>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial camera update payload (PUT /cameras/{id}).
///
/// Tags are referenced by id; the server resolves them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraUpdate {
    pub name: String,
    pub rtsp_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_frame_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_frame_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_quality: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_fps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_skip_frames: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Optional tuning parameters of a demographics detection pipeline.
///
/// An absent field means "use the server default", never zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DemographicsTuning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_history_max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_track_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_confidence_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demographics_confidence_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_track_updates: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_area_threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_skip_interval: Option<f64>,
}

/// Per-camera demographics pipeline configuration, one-to-one with a
/// camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemographicsConfig {
    pub id: String,
    pub camera_id: String,
    #[serde(flatten)]
    pub tuning: DemographicsTuning,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload (POST /demographics/config); requires the owning
/// camera.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemographicsConfigCreate {
    pub camera_id: String,
    #[serde(flatten)]
    pub tuning: DemographicsTuning,
}

/// Update payload (PUT /demographics/config/{id}); the owning camera is
/// fixed and never part of the payload.
pub type DemographicsConfigUpdate = DemographicsTuning;

/// One demographic detection event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DemographicsResult {
    pub id: String,
    pub camera_id: String,
    pub gender: Gender,
    pub age: AgeGroup,
    pub emotion: Emotion,
    pub ethnicity: Ethnicity,
    /// Detection confidence in [0, 1]; absent values decode as 0.
    #[serde(default)]
    pub confidence: f64,
    /// When the detection occurred.
    pub timestamp: DateTime<Utc>,
    /// When the record was ingested.
    pub created_at: DateTime<Utc>,
}
