use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::errors::LookupError;
use crate::utilities::constants::{SCRYFALL_API_URL, SCRYFALL_SEARCH_PATH};

/// Something that can turn a card name into an image url.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardImageSource: Send + Sync {
    async fn image_url(&self, card_name: &str) -> Result<String, LookupError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    image_uris: Option<ImageUris>,
}

#[derive(Debug, Deserialize)]
struct ImageUris {
    png: Option<String>,
}

/// Looks cards up through the Scryfall search endpoint.
pub struct ScryfallClient {
    client: Client,
    base_url: String,
}

impl ScryfallClient {
    pub fn new(base_url: Option<&str>, client: Client) -> Self {
        ScryfallClient {
            client,
            base_url: base_url.unwrap_or(SCRYFALL_API_URL).to_string(),
        }
    }

    fn setup_http_headers() -> reqwest::header::HeaderMap {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json;q=0.9,*/*;q=0.8"),
        );
        header_map.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        header_map
    }

    fn search_url(&self, card_name: &str) -> Result<Url, LookupError> {
        Url::parse_with_params(
            &format!("{}{}", self.base_url, SCRYFALL_SEARCH_PATH),
            &[("q", card_name)],
        )
        .map_err(|e| LookupError::MalformedResponse {
            card: card_name.to_string(),
            reason: format!("invalid search url: {}", e),
        })
    }
}

#[async_trait]
impl CardImageSource for ScryfallClient {
    /// Returns the png url of the first search result for the name.
    async fn image_url(&self, card_name: &str) -> Result<String, LookupError> {
        let url = self.search_url(card_name)?;
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .headers(Self::setup_http_headers())
            .send()
            .await
            .map_err(|source| LookupError::Request {
                card: card_name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::BadStatus {
                card: card_name.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Request {
                card: card_name.to_string(),
                source,
            })?;
        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::MalformedResponse {
                card: card_name.to_string(),
                reason: e.to_string(),
            })?;

        let png = search
            .data
            .into_iter()
            .next()
            .and_then(|result| result.image_uris)
            .and_then(|uris| uris.png)
            .ok_or_else(|| LookupError::NoImage {
                card: card_name.to_string(),
            })?;

        info!("Request for {} successful", card_name);
        Ok(png)
    }
}
