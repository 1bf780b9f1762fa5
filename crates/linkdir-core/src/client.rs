// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - HTTP client for the link directory API
//
// One configured client per application state. Every request carries the
// configured timeout; POST requests are sent as JSON.

use crate::config::ApiConfig;
use crate::types::{ConfigError, FetchError};
use reqwest::{header, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// Client bound to the API base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// Resolve an endpoint path relative to the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// GET an endpoint and decode its JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(url).send().await?;
        decode(check_status(response)?).await
    }

    /// POST with an empty body, ignoring whatever the server answers
    pub async fn post_empty(&self, path: &str) -> Result<(), FetchError> {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        check_status(response)?;
        Ok(())
    }

    /// POST a JSON body and decode the JSON answer
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);

        // .json() sets the content type
        let response = self.http_client.post(url).json(body).send().await?;
        decode(check_status(response)?).await
    }
}

fn check_status(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::HttpStatus {
            status: status.as_u16(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let body = response.bytes().await.map_err(FetchError::Transport)?;
    Ok(serde_json::from_slice(&body)?)
}
