// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Link store
//
// Holds the link list, keeps it in sync with the API and mirrors visit
// counts after the server has acknowledged them.

use super::collection::Collection;
use crate::client::ApiClient;
use crate::types::{CreatedLink, FetchError, Link, LinkId, NewLink};
use tokio::sync::watch;

const LINKS_PATH: &str = "links";

fn visit_path(link_id: LinkId) -> String {
    format!("{}/{}/visit", LINKS_PATH, link_id)
}

/// In-memory list of links, replaced wholesale on every fetch
pub struct LinkStore {
    client: ApiClient,
    links: Collection<Link>,
}

impl LinkStore {
    /// Create an empty store
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            links: Collection::new(),
        }
    }

    /// Fetch the link list and replace the local copy.
    ///
    /// On failure the previous list is kept and the error is returned.
    pub async fn fetch_links(&self) -> Result<(), FetchError> {
        match self.client.get_json::<Vec<Link>>(LINKS_PATH).await {
            Ok(links) => {
                tracing::info!("Fetched {} links", links.len());
                self.links.replace(links);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error fetching links: {}", e);
                Err(e)
            }
        }
    }

    /// Record a visit on the server, then bump the local counter by one.
    ///
    /// Returns the new local count, or `None` when the link is not in the
    /// local list (nothing is mutated in that case and it is not an error).
    /// The local count is never touched unless the server accepted the visit.
    pub async fn increment_visit_count(&self, link_id: LinkId) -> Result<Option<u64>, FetchError> {
        if let Err(e) = self.client.post_empty(&visit_path(link_id)).await {
            tracing::error!("Error incrementing visit count for link {}: {}", link_id, e);
            return Err(e);
        }

        let updated = self.links.update_first(
            |l| l.id == link_id,
            |l| {
                l.visit_count = l.visit_count.saturating_add(1);
                l.visit_count
            },
        );

        match updated {
            Some(count) => tracing::debug!("Link {} visit count is now {}", link_id, count),
            None => tracing::debug!("Link {} not in local list, visit not mirrored", link_id),
        }
        Ok(updated)
    }

    /// Create a link on the server and append the stored record locally
    pub async fn add_link(&self, new_link: &NewLink) -> Result<Link, FetchError> {
        match self
            .client
            .post_json::<_, CreatedLink>(LINKS_PATH, new_link)
            .await
        {
            Ok(CreatedLink { link }) => {
                tracing::info!("Added link {} ({})", link.id, link.url);
                self.links.push(link.clone());
                Ok(link)
            }
            Err(e) => {
                tracing::error!("Error adding link {}: {}", new_link.url, e);
                Err(e)
            }
        }
    }

    /// Get all links
    pub fn links(&self) -> Vec<Link> {
        self.links.snapshot()
    }

    /// Subscribe to list changes, including visit count updates
    pub fn subscribe(&self) -> watch::Receiver<Vec<Link>> {
        self.links.subscribe()
    }

    pub fn find(&self, id: LinkId) -> Option<Link> {
        self.links.find(|l| l.id == id)
    }

    pub fn count(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn store_for(server: &MockServer) -> LinkStore {
        let config = ApiConfig::new(&server.uri()).unwrap();
        LinkStore::new(ApiClient::new(&config).unwrap())
    }

    fn link(id: LinkId, visit_count: u64) -> Link {
        Link {
            id,
            name: format!("Link {}", id),
            url: format!("https://example.com/{}", id),
            description: String::new(),
            image: String::new(),
            category_id: Some(1),
            visit_count,
        }
    }

    async fn mount_visit(server: &MockServer, link_id: LinkId, status: u16) {
        Mock::given(method("POST"))
            .and(path(format!("/links/{}/visit", link_id)))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(server)
            .await;
    }

    #[test]
    fn test_visit_path() {
        assert_eq!(visit_path(5), "links/5/visit");
    }

    #[tokio::test]
    async fn test_fetch_links_replaces_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 5,
                    "name": "Link 5",
                    "url": "https://example.com/5",
                    "description": "",
                    "categoryId": 1,
                    "visitCount": 3
                }
            ])))
            .mount(&server)
            .await;

        let store = store_for(&server);
        store.links.replace(vec![link(1, 0), link(2, 0)]);

        store.fetch_links().await.unwrap();
        assert_eq!(store.links(), vec![link(5, 3)]);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let store = store_for(&server);
        store.links.replace(vec![link(1, 7)]);

        let err = store.fetch_links().await.unwrap_err();
        assert!(matches!(err, FetchError::HttpStatus { status: 503 }));
        assert_eq!(store.links(), vec![link(1, 7)]);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_list() {
        let config = ApiConfig::new("http://127.0.0.1:9").unwrap();
        let store = LinkStore::new(ApiClient::new(&config).unwrap());
        store.links.replace(vec![link(1, 7)]);

        let err = store.fetch_links().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(store.links(), vec![link(1, 7)]);

        let err = store.increment_visit_count(1).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
        assert_eq!(store.links(), vec![link(1, 7)]);
    }

    #[tokio::test]
    async fn test_malformed_body_keeps_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"links\": oops"))
            .mount(&server)
            .await;

        let store = store_for(&server);
        store.links.replace(vec![link(1, 7)]);

        let err = store.fetch_links().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
        assert_eq!(store.links(), vec![link(1, 7)]);
    }

    #[tokio::test]
    async fn test_backend_records_without_name_or_category() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "image": "", "description": "d", "url": "https://x" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Link added successfully",
                "link": { "id": 2, "image": "logo.png", "description": "e", "url": "https://y" }
            })))
            .mount(&server)
            .await;

        let store = store_for(&server);
        store.fetch_links().await.unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.find(1).unwrap().url, "https://x");
        assert_eq!(store.find(1).unwrap().category_id, None);

        let new_link = NewLink {
            name: String::new(),
            url: "https://y".to_string(),
            description: "e".to_string(),
            image: "logo.png".to_string(),
            category_id: None,
        };
        let created = store.add_link(&new_link).await.unwrap();
        assert_eq!(created.image, "logo.png");
        assert_eq!(created.visit_count, 0);
        assert_eq!(store.count(), 2);
        assert_eq!(store.find(2), Some(created));
    }

    #[tokio::test]
    async fn test_increment_visit_count() {
        let server = MockServer::start().await;
        mount_visit(&server, 5, 200).await;

        let store = store_for(&server);
        store.links.replace(vec![link(5, 3)]);

        assert_eq!(store.increment_visit_count(5).await.unwrap(), Some(4));
        assert_eq!(store.find(5).unwrap().visit_count, 4);
    }

    #[tokio::test]
    async fn test_increment_leaves_other_links_alone() {
        let server = MockServer::start().await;
        mount_visit(&server, 2, 200).await;

        let store = store_for(&server);
        store.links.replace(vec![link(1, 10), link(2, 0), link(3, 5)]);

        store.increment_visit_count(2).await.unwrap();
        assert_eq!(store.links(), vec![link(1, 10), link(2, 1), link(3, 5)]);
    }

    #[tokio::test]
    async fn test_increment_unknown_link_is_silent() {
        let server = MockServer::start().await;
        mount_visit(&server, 42, 200).await;

        let store = store_for(&server);
        store.links.replace(vec![link(1, 10)]);
        let rx = store.subscribe();

        assert_eq!(store.increment_visit_count(42).await.unwrap(), None);
        assert_eq!(store.links(), vec![link(1, 10)]);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_failed_increment_mutates_nothing() {
        let server = MockServer::start().await;
        mount_visit(&server, 5, 500).await;

        let store = store_for(&server);
        store.links.replace(vec![link(5, 3)]);

        let err = store.increment_visit_count(5).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(store.find(5).unwrap().visit_count, 3);
    }

    #[tokio::test]
    async fn test_add_link_appends_server_record() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .and(body_json(json!({
                "name": "Link 9",
                "url": "https://example.com/9",
                "description": "",
                "image": "",
                "categoryId": 1
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Link added successfully",
                "link": {
                    "id": 9,
                    "name": "Link 9",
                    "url": "https://example.com/9",
                    "description": "",
                    "categoryId": 1,
                    "visitCount": 0
                }
            })))
            .mount(&server)
            .await;

        let store = store_for(&server);
        store.links.replace(vec![link(1, 2)]);

        let new_link = NewLink {
            name: "Link 9".to_string(),
            url: "https://example.com/9".to_string(),
            description: String::new(),
            image: String::new(),
            category_id: Some(1),
        };
        let created = store.add_link(&new_link).await.unwrap();

        assert_eq!(created, link(9, 0));
        assert_eq!(store.links(), vec![link(1, 2), link(9, 0)]);
    }

    #[tokio::test]
    async fn test_failed_add_link_mutates_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/links"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "Invalid input" })))
            .mount(&server)
            .await;

        let store = store_for(&server);
        let new_link = NewLink {
            name: String::new(),
            url: String::new(),
            description: String::new(),
            image: String::new(),
            category_id: None,
        };

        let err = store.add_link(&new_link).await.unwrap_err();
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(store.count(), 0);
    }
}
