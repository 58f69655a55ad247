// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the news feed endpoint and article images.

use crate::error::Result;
use crate::feed::article::{Article, FeedResponse};

/// The one endpoint this app talks to. Fixed query, no parameters, no auth.
pub const FEED_URL: &str =
    "https://api.gdeltproject.org/api/v2/doc/doc?query=latestnews&format=json";

/// Fetches and decodes the article feed.
///
/// This runs exactly once per app lifetime; the caller's fetch state only
/// ever advances forward, so there is no retry or refresh path here.
pub async fn fetch_latest() -> Result<Vec<Article>> {
    let response = reqwest::get(FEED_URL).await?;
    let response = response.error_for_status()?;

    // GDELT serves JSON with a text/html content type on some edges, so the
    // body is decoded manually instead of via `Response::json`.
    let body = response.text().await?;
    let feed: FeedResponse = serde_json::from_str(&body)?;
    Ok(feed.articles)
}

/// Fetches raw image bytes for an article card.
///
/// Failures here are recoverable: the caller logs them and renders a
/// placeholder instead of surfacing an error.
pub async fn fetch_image(url: String) -> Result<Vec<u8>> {
    let response = reqwest::get(&url).await?;
    let response = response.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn feed_url_is_the_fixed_gdelt_query() {
        assert!(FEED_URL.starts_with("https://api.gdeltproject.org/"));
        assert!(FEED_URL.contains("query=latestnews"));
        assert!(FEED_URL.contains("format=json"));
    }

    #[test]
    fn feed_body_decodes_into_articles() {
        let body = r#"{"articles": [{"title": "A", "domain": "a.com"}]}"#;
        let feed: FeedResponse = serde_json::from_str(body).expect("decode failed");
        assert_eq!(feed.articles.len(), 1);
        assert_eq!(feed.articles[0].title, "A");
    }

    #[test]
    fn malformed_feed_body_maps_to_decode_error() {
        let err: Error = serde_json::from_str::<FeedResponse>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
