// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Category store
//
// Holds the category list and keeps it in sync with the API.

use super::collection::Collection;
use crate::client::ApiClient;
use crate::types::{Category, CategoryId, FetchError};
use tokio::sync::watch;

const CATEGORIES_PATH: &str = "categories";

/// In-memory list of categories, replaced wholesale on every fetch
pub struct CategoryStore {
    client: ApiClient,
    categories: Collection<Category>,
}

impl CategoryStore {
    /// Create an empty store
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            categories: Collection::new(),
        }
    }

    /// Fetch the category list and replace the local copy.
    ///
    /// On failure the previous list is kept and the error is returned.
    pub async fn fetch_categories(&self) -> Result<(), FetchError> {
        match self.client.get_json::<Vec<Category>>(CATEGORIES_PATH).await {
            Ok(categories) => {
                tracing::info!("Fetched {} categories", categories.len());
                self.categories.replace(categories);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching categories: {}", e);
                Err(e)
            }
        }
    }

    /// Get all categories
    pub fn categories(&self) -> Vec<Category> {
        self.categories.snapshot()
    }

    /// Subscribe to list changes
    pub fn subscribe(&self) -> watch::Receiver<Vec<Category>> {
        self.categories.subscribe()
    }

    pub fn find(&self, id: CategoryId) -> Option<Category> {
        self.categories.find(|c| c.id == id)
    }

    pub fn count(&self) -> usize {
        self.categories.len()
    }
}
