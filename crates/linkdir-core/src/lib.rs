// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Client logic for the link directory
//
// This crate provides:
// - Category, Link and error types
// - ApiConfig and ApiClient for the REST API
// - CategoryStore and LinkStore, observable lists synced with the API
// - The route table and the category-grouped directory
// - AppState, which creates and owns all of the above
//
// Rendering lives with whatever frontend embeds this crate.

pub mod app;
pub mod client;
pub mod config;
pub mod directory;
pub mod logging;
pub mod routes;
pub mod stores;
pub mod types;

// Re-export commonly used items
pub use app::AppState;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use directory::{group_by_category, CategorySection};
pub use logging::init_logging;
pub use routes::{Route, Router};
pub use stores::{CategoryStore, LinkStore};
pub use types::{Category, CategoryId, ConfigError, FetchError, Link, LinkId, NewLink};
