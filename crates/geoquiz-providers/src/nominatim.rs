//! Nominatim (OpenStreetMap) reverse geocoder.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::instrument;

use geoquiz_core::model::{Address, Coordinates};
use geoquiz_core::traits::ReverseGeocoder;
use geoquiz_core::ResolveError;

use crate::error::ProviderError;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = concat!("geoquiz/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Reverse geocoder backed by a Nominatim `/reverse` endpoint.
pub struct NominatimGeocoder {
    base_url: String,
    endpoint: Url,
    accept_language: Option<String>,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl NominatimGeocoder {
    /// Build a geocoder. Nominatim's usage policy requires an identifying
    /// `User-Agent`, so an empty one falls back to the crate default.
    pub fn new(base_url: &str, user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        let agent = if user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            user_agent
        };

        let base_url = base.trim_end_matches('/').to_string();
        let endpoint = Url::parse(&format!("{base_url}/reverse"))
            .with_context(|| format!("invalid geocoder URL: {base}"))?;

        let client = reqwest::Client::builder()
            .user_agent(agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url,
            endpoint,
            accept_language: None,
            timeout_secs,
            client,
        })
    }

    /// Ask Nominatim for names in the given language(s), e.g. `"en"`.
    pub fn with_accept_language(mut self, language: Option<String>) -> Self {
        self.accept_language = language.filter(|l| !l.trim().is_empty());
        self
    }

    fn reverse_url(&self, coords: Coordinates) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("lat", &coords.latitude.to_string())
                .append_pair("lon", &coords.longitude.to_string())
                .append_pair("format", "json");
            if let Some(language) = &self.accept_language {
                query.append_pair("accept-language", language);
            }
        }
        url
    }
}

#[derive(Deserialize)]
struct NominatimResponse {
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    fn name(&self) -> &str {
        "nominatim"
    }

    #[instrument(skip(self), fields(lat = coords.latitude, lon = coords.longitude))]
    async fn reverse(&self, coords: Coordinates) -> Result<Address, ResolveError> {
        let response = self
            .client
            .get(self.reverse_url(coords))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    ProviderError::NetworkError(format!(
                        "geocoder not reachable at {}",
                        self.base_url
                    ))
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let body: NominatimResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout(self.timeout_secs)
            } else {
                ProviderError::InvalidResponse(format!("failed to parse response: {e}"))
            }
        })?;

        match body.address {
            Some(address) => {
                tracing::debug!(country = ?address.country, "reverse geocoded");
                Ok(address)
            }
            None => {
                if let Some(reason) = body.error {
                    tracing::debug!("geocoder returned no address: {reason}");
                }
                Err(ResolveError::NoAddressFound)
            }
        }
    }
}
