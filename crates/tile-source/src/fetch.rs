//! Single tile retrieval.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, info};

use himawari_common::{SatError, SatResult};

use crate::tile::Tile;

/// Something that can turn a tile URL into a decoded [`Tile`].
#[async_trait]
pub trait TileFetcher: Send + Sync {
    /// Retrieve and decode the tile at `url`.
    ///
    /// Fails with `Transport` if the body cannot be retrieved and with
    /// `Decode` if it is not a PNG.
    async fn fetch(&self, url: &str) -> SatResult<Tile>;
}

#[async_trait]
impl<T: TileFetcher + ?Sized> TileFetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> SatResult<Tile> {
        (**self).fetch(url).await
    }
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(30),
            user_agent: concat!("himawari-mosaic/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches tiles from the Himawari tile server.
pub struct HttpTileFetcher {
    client: Client,
}

impl HttpTileFetcher {
    pub fn new(config: &FetchConfig) -> SatResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SatError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Download the full response body.
    async fn get_bytes(&self, url: &str) -> SatResult<Bytes> {
        let transport = |message: String| SatError::Transport {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(format!("HTTP error: {}", status)));
        }

        response
            .bytes()
            .await
            .map_err(|e| transport(format!("Error reading response body: {}", e)))
    }
}

#[async_trait]
impl TileFetcher for HttpTileFetcher {
    async fn fetch(&self, url: &str) -> SatResult<Tile> {
        info!(url = %url, "Downloading tile");

        let body = self.get_bytes(url).await?;
        let tile = Tile::decode(url, &body)?;

        debug!(
            url = %url,
            size = body.len(),
            digest = %tile.digest(),
            "Decoded tile"
        );
        Ok(tile)
    }
}
