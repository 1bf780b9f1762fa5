// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Application state
//
// The single place where the API client and both stores are created.
// Views receive the stores from here instead of reaching for globals.

use crate::client::ApiClient;
use crate::config::{self, ApiConfig};
use crate::directory::{group_by_category, CategorySection};
use crate::routes::{Route, Router};
use crate::stores::{CategoryStore, LinkStore};
use crate::types::{ConfigError, FetchError, Link, LinkId};
use std::sync::Arc;

/// Client, stores and router for one running session
pub struct AppState {
    pub categories: Arc<CategoryStore>,
    pub links: Arc<LinkStore>,
    pub router: Router,
}

impl AppState {
    /// Create application state with empty stores
    pub fn new(config: &ApiConfig, router: Router) -> Result<Self, ConfigError> {
        let client = ApiClient::new(config)?;

        Ok(Self {
            categories: Arc::new(CategoryStore::new(client.clone())),
            links: Arc::new(LinkStore::new(client)),
            router,
        })
    }

    /// Create application state from environment configuration
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ApiConfig::from_env()?;
        let router = Router::new(&config::base_path_from_env());
        Self::new(&config, router)
    }

    /// Load the data a view needs when it is mounted.
    ///
    /// Fetches for the same view run concurrently. Each store keeps its
    /// previous list if its own fetch fails; the first error is returned.
    pub async fn mount(&self, route: Route) -> Result<(), FetchError> {
        tracing::debug!("Mounting view {}", route.name());

        match route {
            Route::Home | Route::ManageLinks => {
                let (categories, links) = tokio::join!(
                    self.categories.fetch_categories(),
                    self.links.fetch_links()
                );
                categories.and(links)
            }
            Route::ManageCategories => self.categories.fetch_categories().await,
            Route::Login => Ok(()),
        }
    }

    /// Resolve a URL path and mount its view. `Ok(None)` for unknown paths.
    pub async fn navigate(&self, url_path: &str) -> Result<Option<Route>, FetchError> {
        let Some(route) = self.router.resolve(url_path) else {
            tracing::warn!("Unknown route: {}", url_path);
            return Ok(None);
        };

        self.mount(route).await?;
        Ok(Some(route))
    }

    /// Current links grouped under the current categories
    pub fn directory(&self) -> Vec<CategorySection> {
        group_by_category(&self.categories.categories(), &self.links.links())
    }

    /// Record a visit to a link and return its updated local record, if any
    pub async fn visit(&self, link_id: LinkId) -> Result<Option<Link>, FetchError> {
        self.links.increment_visit_count(link_id).await?;
        Ok(self.links.find(link_id))
    }
}
