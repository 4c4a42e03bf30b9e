//! Page URL builders used by the CLI.

use folio::{PageUrl, PaginationError};
use url::Url;

/// Builds page URLs by setting a query string parameter on a base URL.
///
/// Other query parameters of the base URL are kept in order. An un-numbered
/// first page removes the parameter entirely.
#[derive(Debug, Clone)]
pub struct QueryStringUrls {
    base: Url,
    key: String,
}

impl QueryStringUrls {
    /// Creates a builder writing the page number under `key`.
    pub fn new(base: Url, key: &str) -> Self {
        Self {
            base,
            key: key.to_owned(),
        }
    }
}

impl PageUrl for QueryStringUrls {
    fn page_url(&self, page: Option<u64>) -> String {
        let mut url = self.base.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| *name != self.key.as_str())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept);
            if let Some(number) = page {
                pairs.append_pair(&self.key, &number.to_string());
            }
        }

        if url.query().is_some_and(str::is_empty) {
            url.set_query(None);
        }
        url.into()
    }
}

/// Builds page URLs by appending the page number as a trailing path segment.
///
/// `https://example.com/items` becomes `https://example.com/items/3`; the
/// first page without a number is the base path itself.
#[derive(Debug, Clone)]
pub struct PathSegmentUrls {
    base: Url,
}

impl PathSegmentUrls {
    /// Creates a builder rooted at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidUrl`] when `base` cannot carry path
    /// segments (for example `mailto:` URLs).
    pub fn new(base: Url) -> Result<Self, PaginationError> {
        if base.cannot_be_a_base() {
            return Err(PaginationError::InvalidUrl(format!(
                "{base}: URL cannot carry path segments"
            )));
        }
        Ok(Self { base })
    }
}

impl PageUrl for PathSegmentUrls {
    fn page_url(&self, page: Option<u64>) -> String {
        let mut url = self.base.clone();
        if let Some(number) = page
            && let Ok(mut segments) = url.path_segments_mut()
        {
            segments.pop_if_empty().push(&number.to_string());
        }
        url.into()
    }
}
