//! Resolution of the requested page number from request parameters.
//!
//! folio never reads ambient request state. Callers collect the query string
//! and route parameters for the current request into [`RequestParams`] and
//! pass them in explicitly, together with a [`PageSource`] describing where
//! the page number lives.

use std::borrow::Cow;

use url::form_urlencoded;

/// Query and route key used when none is configured.
pub const DEFAULT_PAGE_KEY: &str = "page";

/// Where the requested page number comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// A query string parameter, e.g. `?page=3`.
    QueryString {
        /// Parameter name.
        key: String,
    },
    /// A named route parameter, e.g. `/items/page/3`.
    Route {
        /// Route parameter name.
        key: String,
    },
    /// A page number set manually by the caller.
    Fixed(i64),
}

impl PageSource {
    /// Creates a query string source reading `key`.
    #[must_use]
    pub fn query_string(key: impl Into<String>) -> Self {
        Self::QueryString { key: key.into() }
    }

    /// Creates a route parameter source reading `key`.
    #[must_use]
    pub fn route(key: impl Into<String>) -> Self {
        Self::Route { key: key.into() }
    }

    /// Returns the parameter key, or `None` for a fixed page.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::QueryString { key } | Self::Route { key } => Some(key),
            Self::Fixed(_) => None,
        }
    }
}

impl Default for PageSource {
    fn default() -> Self {
        Self::query_string(DEFAULT_PAGE_KEY)
    }
}

/// Request parameters supplied by the caller for the current request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    query: Vec<(String, String)>,
    route: Vec<(String, String)>,
}

impl RequestParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: Vec::new(),
            route: Vec::new(),
        }
    }

    /// Creates a parameter set from a raw query string such as `page=2&q=x`.
    ///
    /// A leading `?` is ignored and values are percent-decoded.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self {
            query: parse_query(query),
            route: Vec::new(),
        }
    }

    /// Adds a query string parameter.
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a route parameter.
    #[must_use]
    pub fn with_route_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route.push((key.into(), value.into()));
        self
    }

    /// Returns the query string value for `key`. The last occurrence wins.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        last_value(&self.query, key)
    }

    /// Returns the route parameter value for `key`.
    #[must_use]
    pub fn route_value(&self, key: &str) -> Option<&str> {
        last_value(&self.route, key)
    }

    /// Returns all query pairs in their original order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

fn last_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// Decodes a raw query string into `(name, value)` pairs.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let trimmed = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(trimmed.as_bytes())
        .map(|(key, value): (Cow<'_, str>, Cow<'_, str>)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Returns the requested page for the current request.
///
/// A missing parameter means page one. A present parameter is coerced with
/// [`coerce_page`], so garbage becomes zero and is later clamped by the
/// calculator.
#[must_use]
pub fn resolve_requested_page(source: &PageSource, params: &RequestParams) -> i64 {
    let raw = match source {
        PageSource::Fixed(page) => return *page,
        PageSource::QueryString { key } => params.query_value(key),
        PageSource::Route { key } => params.route_value(key),
    };

    raw.map_or(1, coerce_page)
}

/// Coerces loosely formatted text into a page number.
///
/// Leading whitespace and a single sign are accepted, followed by the longest
/// run of ASCII digits. Text without leading digits yields zero and values
/// beyond the `i64` range saturate.
#[must_use]
pub fn coerce_page(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let magnitude = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}
