use std::{path::Path, time::Duration};

use anyhow::Context;
use reqwest::{Url, blocking::Client};

use crate::{
    assets::decode::materialize_image,
    composition::model::ImageAsset,
    foundation::error::{DeckError, DeckResult},
    source::{
        ImageSource, TextSource,
        html::{extract_image_urls, extract_paragraphs},
        select_paragraphs,
    },
};

/// Default image search endpoint.
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";
/// Default article base URL; the topic is appended with spaces turned into underscores.
pub const WIKIPEDIA_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

#[derive(Clone, Debug)]
/// Settings shared by the HTTP-backed sources.
pub struct HttpSettings {
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

impl HttpSettings {
    fn client(&self) -> DeckResult<Client> {
        Ok(Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .build()
            .context("build http client")?)
    }
}

fn get_text(client: &Client, url: Url) -> anyhow::Result<String> {
    let resp = client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?;
    resp.text().with_context(|| format!("read body of {url}"))
}

fn get_bytes(client: &Client, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("GET {url}"))?
        .error_for_status()
        .with_context(|| format!("GET {url}"))?;
    Ok(resp
        .bytes()
        .with_context(|| format!("read body of {url}"))?
        .to_vec())
}

/// Image search scraper: reads thumbnail URLs off a search results page and downloads them.
#[derive(Debug)]
pub struct GoogleImageSource {
    client: Client,
    search_url: String,
}

impl GoogleImageSource {
    /// Source querying [`GOOGLE_SEARCH_URL`].
    pub fn new(settings: &HttpSettings) -> DeckResult<Self> {
        Ok(Self {
            client: settings.client()?,
            search_url: GOOGLE_SEARCH_URL.to_string(),
        })
    }

    /// Query a different search endpoint with the same parameters.
    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    fn query_url(&self, topic: &str) -> DeckResult<Url> {
        Ok(Url::parse_with_params(
            &self.search_url,
            &[("q", topic), ("client", "img"), ("udm", "2")],
        )
        .with_context(|| format!("build search url from '{}'", self.search_url))?)
    }
}

impl ImageSource for GoogleImageSource {
    #[tracing::instrument(skip(self, dest_dir))]
    fn acquire(
        &mut self,
        topic: &str,
        count: usize,
        dest_dir: &Path,
    ) -> DeckResult<Vec<ImageAsset>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let url = self.query_url(topic)?;
        let page = get_text(&self.client, url)
            .map_err(|e| DeckError::acquisition(format!("image search failed: {e:#}")))?;
        let urls = extract_image_urls(&page, count);
        tracing::info!(found = urls.len(), "image search results");

        let mut assets = Vec::with_capacity(urls.len());
        for url in &urls {
            let downloaded = get_bytes(&self.client, url)
                .map_err(DeckError::from)
                .and_then(|bytes| materialize_image(&bytes, topic, assets.len(), dest_dir));
            match downloaded {
                Ok(asset) => assets.push(asset),
                Err(err) => tracing::warn!(%url, error = %err, "skipping image"),
            }
        }
        Ok(assets)
    }
}

/// Encyclopedia scraper: takes the leading substantial paragraphs of the topic's article.
#[derive(Debug)]
pub struct WikipediaTextSource {
    client: Client,
    base_url: String,
}

impl WikipediaTextSource {
    /// Source reading from [`WIKIPEDIA_BASE_URL`].
    pub fn new(settings: &HttpSettings) -> DeckResult<Self> {
        Ok(Self {
            client: settings.client()?,
            base_url: WIKIPEDIA_BASE_URL.to_string(),
        })
    }

    /// Read articles from a different base URL (must end with `/`).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Article URL for `topic`.
    pub fn article_url(&self, topic: &str) -> DeckResult<Url> {
        let raw = format!("{}{}", self.base_url, topic.replace(' ', "_"));
        Ok(Url::parse(&raw).with_context(|| format!("build article url '{raw}'"))?)
    }
}

impl TextSource for WikipediaTextSource {
    #[tracing::instrument(skip(self))]
    fn paragraphs(&mut self, topic: &str) -> DeckResult<Vec<String>> {
        let url = self.article_url(topic)?;
        let page = get_text(&self.client, url)
            .map_err(|e| DeckError::acquisition(format!("article fetch failed: {e:#}")))?;
        Ok(select_paragraphs(extract_paragraphs(&page)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/web.rs"]
mod tests;
