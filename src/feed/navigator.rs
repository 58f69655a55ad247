// SPDX-License-Identifier: MPL-2.0
//! Article navigation over the fetched feed.
//!
//! The navigator owns the article list produced by the single successful
//! fetch and the current position in it. It is the one place that moves the
//! index, so the invariant `current < len` holds whenever the list is
//! non-empty.

use crate::feed::article::Article;

/// Bounded navigation over an immutable article list.
///
/// Unlike a gallery, the reader does not wrap around: `next()` at the last
/// article and `previous()` at the first are no-ops, and the corresponding
/// controls render disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleNavigator {
    articles: Vec<Article>,
    current: usize,
}

impl ArticleNavigator {
    /// Creates a navigator positioned at the first article.
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles,
            current: 0,
        }
    }

    /// The article at the current position, or `None` when the list is empty.
    pub fn current(&self) -> Option<&Article> {
        self.articles.get(self.current)
    }

    /// The current position. Meaningful only while the list is non-empty.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Advances by one article. No-op at the last article.
    ///
    /// Returns `true` when the position changed.
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one article. No-op at the first article.
    ///
    /// Returns `true` when the position changed.
    pub fn previous(&mut self) -> bool {
        if self.can_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Whether a next article exists. The Next control is disabled exactly
    /// when this is `false`.
    pub fn can_next(&self) -> bool {
        self.current + 1 < self.articles.len()
    }

    /// Whether a previous article exists. The Previous control is disabled
    /// exactly when this is `false`.
    pub fn can_previous(&self) -> bool {
        self.current > 0
    }

    /// Total number of articles in the feed.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the fetch produced no articles.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
