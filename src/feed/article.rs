// SPDX-License-Identifier: MPL-2.0
//! Data model for the GDELT article feed response.

use serde::Deserialize;

/// Fallback text shown when an article carries no description.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description available.";

/// Fallback image used when an article carries no social image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// One news item from the feed.
///
/// Only the fields the reader renders are decoded; everything else in the
/// GDELT payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    /// Headline text.
    #[serde(default)]
    pub title: String,
    /// Source domain (e.g. `example.com`).
    #[serde(default)]
    pub domain: String,
    /// Optional summary text.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional social preview image URL.
    #[serde(default, rename = "socialimage")]
    pub social_image: Option<String>,
}

impl Article {
    /// Description text, falling back to the fixed placeholder when absent
    /// or blank.
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_DESCRIPTION_FALLBACK,
        }
    }

    /// Image URL to load for this article, falling back to the fixed
    /// placeholder when the feed carries none.
    pub fn image_url(&self) -> &str {
        match self.social_image.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE_URL,
        }
    }
}

/// Top-level shape of the feed endpoint's JSON response.
///
/// `articles` defaults to empty when the field is absent, so a missing list
/// decodes as the non-error "no articles" state rather than a failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_article() {
        let json = r#"{
            "title": "Quake hits coast",
            "domain": "example.com",
            "description": "A magnitude 6 earthquake",
            "socialimage": "https://example.com/a.jpg"
        }"#;
        let article: Article = serde_json::from_str(json).expect("decode failed");
        assert_eq!(article.title, "Quake hits coast");
        assert_eq!(article.domain, "example.com");
        assert_eq!(article.description_or_default(), "A magnitude 6 earthquake");
        assert_eq!(article.image_url(), "https://example.com/a.jpg");
    }

    #[test]
    fn missing_optional_fields_fall_back() {
        let json = r#"{"title": "A", "domain": "b.com"}"#;
        let article: Article = serde_json::from_str(json).expect("decode failed");
        assert_eq!(article.description_or_default(), NO_DESCRIPTION_FALLBACK);
        assert_eq!(article.image_url(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn blank_description_falls_back() {
        let json = r#"{"title": "A", "domain": "b.com", "description": "   "}"#;
        let article: Article = serde_json::from_str(json).expect("decode failed");
        assert_eq!(article.description_or_default(), NO_DESCRIPTION_FALLBACK);
    }

    #[test]
    fn response_without_articles_field_decodes_empty() {
        let response: FeedResponse = serde_json::from_str("{}").expect("decode failed");
        assert!(response.articles.is_empty());
    }

    #[test]
    fn response_with_articles_preserves_order() {
        let json = r#"{"articles": [
            {"title": "A", "domain": "a.com"},
            {"title": "B", "domain": "b.com"}
        ]}"#;
        let response: FeedResponse = serde_json::from_str(json).expect("decode failed");
        let titles: Vec<_> = response.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }
}
