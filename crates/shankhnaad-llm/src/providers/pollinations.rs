//! Image synthesis client (Pollinations-style templated GET endpoint).
//!
//! The request URL embeds the URL-encoded prompt, a uniqueness seed and
//! fixed dimension/quality parameters; the response body is raw image bytes.
//! The client tries to fetch and cache those bytes locally and falls back to
//! handing out the remote URL when the fetch itself fails. It reports plain
//! `None` when the endpoint refuses generation; the orchestrator degrades to
//! placeholder art in that case.

use std::path::PathBuf;

use rand::Rng;
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use crate::provider::http_client;
use shankhnaad_core::{ImageLocator, ImageResult, ImageSource};

const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai/prompt";
const IMAGE_WIDTH: u32 = 1024;
const IMAGE_HEIGHT: u32 = 1024;

pub struct PollinationsProvider {
    client: ClientWithMiddleware,
    base_url: String,
    cache_dir: PathBuf,
}

impl PollinationsProvider {
    pub fn new() -> Self {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("shankhnaad")
            .join("images");
        Self {
            client: http_client(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_dir,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    fn request_url(&self, prompt: &str, seed: u32) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.push(prompt);
        url.query_pairs_mut()
            .append_pair("width", &IMAGE_WIDTH.to_string())
            .append_pair("height", &IMAGE_HEIGHT.to_string())
            .append_pair("seed", &seed.to_string())
            .append_pair("nologo", "true");
        Some(url)
    }

    /// Generate an image for an (already enhanced) prompt. `None` means the
    /// endpoint declined; a `Remote` locator means the bytes could not be
    /// fetched or cached but the URL itself is usable.
    pub async fn generate(&self, prompt: &str) -> Option<ImageResult> {
        let seed: u32 = rand::thread_rng().gen_range(0..1_000_000);
        let url = self.request_url(prompt, seed)?;
        let url_string = url.to_string();
        log::debug!("image request: seed={seed}");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                log::warn!("image fetch failed, returning remote URL: {err}");
                return Some(ImageResult {
                    source: ImageSource::Generated,
                    locator: ImageLocator::Remote { url: url_string },
                });
            }
        };

        if !response.status().is_success() {
            log::warn!("image endpoint refused generation: HTTP {}", response.status());
            return None;
        }

        let bytes = match response.bytes().await {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => {
                log::warn!("image endpoint returned an empty body");
                return None;
            }
            Err(err) => {
                log::warn!("image body read failed, returning remote URL: {err}");
                return Some(ImageResult {
                    source: ImageSource::Generated,
                    locator: ImageLocator::Remote { url: url_string },
                });
            }
        };

        match self.cache_bytes(seed, &bytes).await {
            Ok(path) => Some(ImageResult {
                source: ImageSource::Generated,
                locator: ImageLocator::Cached { path },
            }),
            Err(err) => {
                log::warn!("image cache write failed, returning remote URL: {err}");
                Some(ImageResult {
                    source: ImageSource::Generated,
                    locator: ImageLocator::Remote { url: url_string },
                })
            }
        }
    }

    async fn cache_bytes(&self, seed: u32, bytes: &[u8]) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.cache_dir).await?;
        let path = self.cache_dir.join(format!("shankhnaad-{seed}.jpg"));
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

impl Default for PollinationsProvider {
    fn default() -> Self {
        Self::new()
    }
}
