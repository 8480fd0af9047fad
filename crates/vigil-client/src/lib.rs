//! Vigil Client - HTTP client and query state for the camera console API
//!
//! This crate provides everything between the console's UI layer and the
//! backend:
//! - `HttpClient`: JSON request plumbing with bounded retry for
//!   transient failures
//! - `CameraListQuery` / `ResultsQuery`: canonical, round-trippable
//!   list-view state
//! - `ConsoleClient`: typed facade over the REST endpoints
//! - `ConsoleCache` / `CameraStore`: keyed response caching with
//!   explicit invalidation on mutation
//! - `FetchState` / `FetchGuard`: the fetch lifecycle as an explicit
//!   state machine that disregards stale in-flight responses

pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod http;
pub mod query;
pub mod store;

pub use cache::ConsoleCache;
pub use client::ConsoleClient;
pub use config::ConsoleClientConfig;
pub use error::ClientError;
pub use fetch::{FetchGuard, FetchState};
pub use http::{HttpClient, HttpClientConfig};
pub use query::{CameraListQuery, DEFAULT_PAGE_SIZE, PAGE_SIZES, ResultsQuery};
pub use store::CameraStore;
