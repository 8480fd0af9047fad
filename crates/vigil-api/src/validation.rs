//! Range validation for outgoing payloads
//!
//! The backend rejects out-of-range tuning values; validating before the
//! request keeps form feedback immediate and error messages local.

use validator::ValidationError;

use crate::model::{CameraUpdate, DemographicsConfigCreate, DemographicsTuning};

/// Minimum stream frame dimension in pixels
pub const MIN_FRAME_DIMENSION: u32 = 1;
/// Maximum stream frame dimension in pixels
pub const MAX_FRAME_DIMENSION: u32 = 2560;
/// Maximum stream segment length in seconds
pub const MAX_STREAM_LENGTH: u32 = 10000;
/// Minimum stream quality percentage
pub const MIN_STREAM_QUALITY: u32 = 80;
/// Maximum stream quality percentage
pub const MAX_STREAM_QUALITY: u32 = 100;
/// Minimum stream frame rate
pub const MIN_STREAM_FPS: u32 = 1;
/// Maximum stream frame rate
pub const MAX_STREAM_FPS: u32 = 120;
/// Maximum frames skipped between processed frames
pub const MAX_SKIP_FRAMES: u32 = 100;

/// Track history length bounds
pub const MIN_TRACK_HISTORY: u32 = 1;
pub const MAX_TRACK_HISTORY: u32 = 100;
/// Exit threshold bounds in frames
pub const MIN_EXIT_THRESHOLD: u32 = 1;
pub const MAX_EXIT_THRESHOLD: u32 = 300;
/// Minimum track duration bounds in seconds
pub const MIN_TRACK_DURATION: u32 = 1;
pub const MAX_TRACK_DURATION: u32 = 60;
/// Confidence threshold bounds (applies to both thresholds)
pub const MIN_CONFIDENCE_THRESHOLD: f64 = 0.1;
pub const MAX_CONFIDENCE_THRESHOLD: f64 = 1.0;
/// Minimum track updates bounds
pub const MIN_TRACK_UPDATES: u32 = 1;
pub const MAX_TRACK_UPDATES: u32 = 100;
/// Box area threshold bounds
pub const MIN_BOX_AREA: f64 = 0.05;
pub const MAX_BOX_AREA: f64 = 1.0;
/// Save interval bounds in seconds
pub const MIN_SAVE_INTERVAL: u32 = 300;
pub const MAX_SAVE_INTERVAL: u32 = 1800;
/// Frame skip interval bounds
pub const MIN_FRAME_SKIP: f64 = 0.1;
pub const MAX_FRAME_SKIP: f64 = 5.0;

fn check_u32(
    value: Option<u32>,
    min: u32,
    max: u32,
    code: &'static str,
) -> Result<(), ValidationError> {
    if value.is_some_and(|v| !(min..=max).contains(&v)) {
        return Err(ValidationError::new(code));
    }
    Ok(())
}

fn check_f64(
    value: Option<f64>,
    min: f64,
    max: f64,
    code: &'static str,
) -> Result<(), ValidationError> {
    if value.is_some_and(|v| !(min..=max).contains(&v)) {
        return Err(ValidationError::new(code));
    }
    Ok(())
}

/// Validate a camera name
///
/// The name must not be empty.
pub fn validate_camera_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    Ok(())
}

/// Validate an RTSP URL
///
/// The URL must be non-empty and carry an explicit scheme.
pub fn validate_rtsp_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::new("rtsp_url_required"));
    }
    if !url.contains("://") {
        return Err(ValidationError::new("rtsp_url_invalid"));
    }
    Ok(())
}

/// Validate a full camera update payload.
pub fn validate_camera_update(update: &CameraUpdate) -> Result<(), ValidationError> {
    validate_camera_name(&update.name)?;
    validate_rtsp_url(&update.rtsp_url)?;
    check_u32(
        update.stream_frame_width,
        MIN_FRAME_DIMENSION,
        MAX_FRAME_DIMENSION,
        "stream_frame_width_out_of_range",
    )?;
    check_u32(
        update.stream_frame_height,
        MIN_FRAME_DIMENSION,
        MAX_FRAME_DIMENSION,
        "stream_frame_height_out_of_range",
    )?;
    check_u32(
        update.stream_max_length,
        0,
        MAX_STREAM_LENGTH,
        "stream_max_length_out_of_range",
    )?;
    check_u32(
        update.stream_quality,
        MIN_STREAM_QUALITY,
        MAX_STREAM_QUALITY,
        "stream_quality_out_of_range",
    )?;
    check_u32(
        update.stream_fps,
        MIN_STREAM_FPS,
        MAX_STREAM_FPS,
        "stream_fps_out_of_range",
    )?;
    check_u32(
        update.stream_skip_frames,
        0,
        MAX_SKIP_FRAMES,
        "stream_skip_frames_out_of_range",
    )?;
    Ok(())
}

/// Validate demographics tuning parameters.
///
/// Absent fields pass; they mean "use the server default".
pub fn validate_tuning(tuning: &DemographicsTuning) -> Result<(), ValidationError> {
    check_u32(
        tuning.track_history_max_length,
        MIN_TRACK_HISTORY,
        MAX_TRACK_HISTORY,
        "track_history_max_length_out_of_range",
    )?;
    check_u32(
        tuning.exit_threshold,
        MIN_EXIT_THRESHOLD,
        MAX_EXIT_THRESHOLD,
        "exit_threshold_out_of_range",
    )?;
    check_u32(
        tuning.min_track_duration,
        MIN_TRACK_DURATION,
        MAX_TRACK_DURATION,
        "min_track_duration_out_of_range",
    )?;
    check_f64(
        tuning.detection_confidence_threshold,
        MIN_CONFIDENCE_THRESHOLD,
        MAX_CONFIDENCE_THRESHOLD,
        "detection_confidence_threshold_out_of_range",
    )?;
    check_f64(
        tuning.demographics_confidence_threshold,
        MIN_CONFIDENCE_THRESHOLD,
        MAX_CONFIDENCE_THRESHOLD,
        "demographics_confidence_threshold_out_of_range",
    )?;
    check_u32(
        tuning.min_track_updates,
        MIN_TRACK_UPDATES,
        MAX_TRACK_UPDATES,
        "min_track_updates_out_of_range",
    )?;
    check_f64(
        tuning.box_area_threshold,
        MIN_BOX_AREA,
        MAX_BOX_AREA,
        "box_area_threshold_out_of_range",
    )?;
    check_u32(
        tuning.save_interval,
        MIN_SAVE_INTERVAL,
        MAX_SAVE_INTERVAL,
        "save_interval_out_of_range",
    )?;
    check_f64(
        tuning.frame_skip_interval,
        MIN_FRAME_SKIP,
        MAX_FRAME_SKIP,
        "frame_skip_interval_out_of_range",
    )?;
    Ok(())
}

/// Validate a config creation payload.
pub fn validate_config_create(payload: &DemographicsConfigCreate) -> Result<(), ValidationError> {
    if payload.camera_id.is_empty() {
        return Err(ValidationError::new("camera_id_required"));
    }
    validate_tuning(&payload.tuning)
}
