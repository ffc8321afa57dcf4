//! # Search Module
//!
//! Screenshot search on frinkiac.com. The [`SearchClient`] trait is what the
//! dispatcher depends on; [`FrinkiacClient`] is the HTTP implementation.

use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::BotError;

/// A single screenshot returned by a Frinkiac search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Frame {
    /// Frinkiac internal frame id
    #[serde(rename = "Id")]
    pub id: u64,
    /// Episode key, e.g. "S07E21"
    #[serde(rename = "Episode")]
    pub episode: String,
    /// Position of the frame inside the episode, in milliseconds
    #[serde(rename = "Timestamp")]
    pub timestamp: u64,
}

/// Image search service used to answer inline queries
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search frames matching `term`, in relevance order
    async fn search(&self, term: &str) -> Result<Vec<Frame>, BotError>;

    /// URL of the plain frame image
    fn url_for(&self, frame: &Frame) -> String;

    /// URL of the frame rendered with `caption` overlaid
    fn meme_url_for(&self, frame: &Frame, caption: &str) -> String;

    /// URL of a small preview of the frame
    fn thumbnail_url_for(&self, frame: &Frame) -> String;
}

/// HTTP client for the Frinkiac API
#[derive(Debug, Clone)]
pub struct FrinkiacClient {
    http: reqwest::Client,
    base_url: String,
}

impl FrinkiacClient {
    /// Create a client for the Frinkiac instance at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn image_path(&self, frame: &Frame) -> String {
        format!("{}/img/{}/{}", self.base_url, frame.episode, frame.timestamp)
    }
}

#[async_trait]
impl SearchClient for FrinkiacClient {
    async fn search(&self, term: &str) -> Result<Vec<Frame>, BotError> {
        debug!(term = %term, "Searching Frinkiac");

        let frames: Vec<Frame> = self
            .http
            .get(format!("{}/api/search", self.base_url))
            .query(&[("q", term)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(term = %term, frames_found = frames.len(), "Frinkiac search completed");
        Ok(frames)
    }

    fn url_for(&self, frame: &Frame) -> String {
        format!("{}.jpg", self.image_path(frame))
    }

    fn meme_url_for(&self, frame: &Frame, caption: &str) -> String {
        format!(
            "{}/meme/{}/{}.jpg?b64lines={}",
            self.base_url,
            frame.episode,
            frame.timestamp,
            URL_SAFE.encode(caption)
        )
    }

    fn thumbnail_url_for(&self, frame: &Frame) -> String {
        format!("{}/medium.jpg", self.image_path(frame))
    }
}
