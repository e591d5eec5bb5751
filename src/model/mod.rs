//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (sections, UI state)
//! - `search`: Search state container and dispatch state machine
//! - `payload`: Serde model of the raw catalog search payload
//! - `projection`: Pure projection from raw records to display tracks
//! - `catalog_client`: Catalog search API client
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog_client;
pub mod payload;
mod projection;
mod search;
mod types;

// Re-export all public types for convenient access
pub use types::{ActiveSection, UiState};

pub use search::{SearchSession, SearchState, FETCH_ERROR_MESSAGE};

pub use projection::{project_track, TrackResult, UNKNOWN_ARTIST, UNKNOWN_TRACK};

pub use catalog_client::{CatalogClient, SearchApi, SearchError};

pub use app_model::AppModel;
