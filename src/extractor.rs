use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use scraper::{Html, Selector};
use std::time::Duration;

use crate::error::Result;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

// Create a static selector to avoid recompiling it each time
static TEXT_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("h1, h2, h3, p").expect("Failed to parse text selector")
});

/// Pages whose visible text does not exceed this many characters are
/// treated as having no usable content.
const MIN_TEXT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedContent {
    pub source_url: String,
    pub text: String,
}

/// Transport used to retrieve a page body. Swapped out in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpPageFetcher;

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = CLIENT.get(url).send().await?;
        let html = response.text().await?;
        Ok(html)
    }
}

/// Concatenate the text of all heading and paragraph elements, in
/// document order, and trim the result.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .select(&TEXT_SELECTOR)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Fetch `url` and reduce it to visible text. Transport failures and thin
/// pages both yield `None`; nothing here is retried or surfaced as an error.
pub async fn extract(fetcher: &dyn PageFetcher, url: &str) -> Option<ExtractedContent> {
    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(err) => {
            log::error!("Error fetching page content: {}", err);
            return None;
        }
    };

    let text = visible_text(&html);
    let char_count = text.chars().count();
    if char_count <= MIN_TEXT_CHARS {
        log::info!("Only {} chars of text at {}, rejecting", char_count, url);
        return None;
    }

    Some(ExtractedContent {
        source_url: url.to_string(),
        text,
    })
}
