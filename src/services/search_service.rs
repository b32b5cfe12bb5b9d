use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::models::{ProviderResponse, SearchItem};

/// Page size sent with every request.
pub const RESULT_COUNT: u8 = 5;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search API error: {status} - {body}")]
    Provider { status: u16, body: String },
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct SearchService {
    client: reqwest::Client,
    settings: SearchConfig,
}

impl SearchService {
    pub fn new(settings: SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    /// Sends `query` to the provider verbatim and returns the items in provider order.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        info!("Dispatching search for {:?}", query);

        let num = RESULT_COUNT.to_string();
        let response = self
            .client
            .get(&self.settings.api_url)
            .query(&[
                ("key", self.settings.api_key.as_str()),
                ("cx", self.settings.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            warn!("Search provider answered {}", status);
            return Err(SearchError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ProviderResponse = serde_json::from_str(&body)?;
        Ok(parsed.items)
    }
}
