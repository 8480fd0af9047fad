//! Vigil API - Wire types for the camera console backend
//!
//! This crate provides the domain types shared by the Vigil client and
//! analytics crates:
//! - Camera, tag, and demographics records as the backend serves them
//! - The closed demographic enumerations produced by the detection pipeline
//! - The paginated list envelope
//! - Display formatting for tuning values
//! - Range validation for outgoing payloads

pub mod demographics;
pub mod format;
pub mod model;
pub mod page;
pub mod validation;

pub use demographics::{AgeGroup, Emotion, Ethnicity, Gender, UnknownEnumValue};
pub use model::{
    Camera, CameraUpdate, DemographicsConfig, DemographicsConfigCreate, DemographicsConfigUpdate,
    DemographicsResult, DemographicsTuning, Tag,
};
pub use page::Page;
