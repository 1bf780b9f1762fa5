// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Type definitions

use serde::{Deserialize, Serialize};

/// Server-assigned category identifier
pub type CategoryId = u64;

/// Server-assigned link identifier
pub type LinkId = u64;

/// A named group of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A bookmarked link as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: LinkId,
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Image reference stored alongside the link, empty when there is none
    #[serde(default)]
    pub image: String,
    /// Category this link is filed under. Not checked against the category list.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Local mirror of the server's counter
    #[serde(default)]
    pub visit_count: u64,
}

/// Body of a create-link request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category_id: Option<CategoryId>,
}

/// Response envelope returned when a link is created
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedLink {
    pub link: Link,
}

/// Failure of a single request against the API
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No response was received: unreachable host, DNS failure or timeout
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The response succeeded but its body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FetchError {
    /// HTTP status code, if a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::InvalidUrl(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Errors raised while building the client configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL is not configured (set {0})")]
    MissingBaseUrl(&'static str),

    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid timeout {0:?}: expected milliseconds")]
    InvalidTimeout(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
