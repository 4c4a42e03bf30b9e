//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.folio.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `FOLIO_TOTAL_ITEMS`, `FOLIO_PAGE`, ...
//! 4. **Command-line arguments** – `--total-items`/`-t`, `--page`/`-p`, ...
//!
//! # Configuration File
//!
//! ```toml
//! total_items = 95
//! items_per_page = 10
//! page_key = "page"
//! source = "query_string"
//! base_url = "https://example.com/items?sort=name"
//! format = "html"
//! ```

use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::PaginationError;
use crate::paginator::{DEFAULT_ITEMS_PER_PAGE, PaginatorSettings};
use crate::source::{DEFAULT_PAGE_KEY, PageSource, RequestParams};

const DEFAULT_BASE_URL: &str = "https://example.com/items";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Output produced by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable summary.
    Text,
    /// The pagination state and links as a JSON object.
    Json,
    /// The rendered HTML view.
    Html,
}

impl FromStr for OutputFormat {
    type Err = PaginationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            other => Err(PaginationError::Configuration {
                message: format!("unknown output format '{other}' (expected text, json, or html)"),
            }),
        }
    }
}

/// Kind of request parameter the page number is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Read from the query string.
    QueryString,
    /// Read from a route parameter.
    Route,
}

impl FromStr for SourceKind {
    type Err = PaginationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "query_string" => Ok(Self::QueryString),
            "route" => Ok(Self::Route),
            other => Err(PaginationError::Configuration {
                message: format!("unknown page source '{other}' (expected query_string or route)"),
            }),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use folio::FolioConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FolioConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// let settings = config.paginator_settings().expect("valid page source");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FOLIO",
    discovery(
        dotfile_name = ".folio.toml",
        config_file_name = "folio.toml",
        app_name = "folio"
    )
)]
pub struct FolioConfig {
    /// Total number of items being paginated.
    ///
    /// Can be provided via:
    /// - CLI: `--total-items <N>` or `-t <N>`
    /// - Environment: `FOLIO_TOTAL_ITEMS`
    /// - Config file: `total_items = 95`
    #[ortho_config(cli_short = 't')]
    pub total_items: i64,

    /// Number of items per page. Defaults to 10.
    #[ortho_config(cli_short = 'n')]
    pub items_per_page: i64,

    /// Page number set manually, overriding the query string and route.
    /// Zero counts as unset.
    #[ortho_config(cli_short = 'p')]
    pub page: Option<i64>,

    /// Name of the query string or route parameter holding the page number.
    #[ortho_config()]
    pub page_key: String,

    /// Where the page number is read from: `query_string` or `route`.
    #[ortho_config()]
    pub source: String,

    /// Raw query string of the current request, e.g. `page=3&sort=name`.
    #[ortho_config(cli_short = 'q')]
    pub query: Option<String>,

    /// Value of the route parameter for the current request.
    #[ortho_config()]
    pub route_page: Option<String>,

    /// Renders navigation even when there is only one page.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so use the CLI flag or the configuration file.
    #[ortho_config()]
    pub no_auto_hide: bool,

    /// Includes the page number in links to page one.
    #[ortho_config(cli_short = 'f')]
    pub first_page_in_url: bool,

    /// URL that page links are built from. Existing query parameters are
    /// kept; the page parameter is replaced.
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Output format: `text`, `json`, or `html`.
    #[ortho_config(cli_short = 'o')]
    pub format: String,

    /// Log filter used when `RUST_LOG` is unset.
    #[ortho_config()]
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            total_items: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page: None,
            page_key: DEFAULT_PAGE_KEY.to_owned(),
            source: "query_string".to_owned(),
            query: None,
            route_page: None,
            no_auto_hide: false,
            first_page_in_url: false,
            base_url: DEFAULT_BASE_URL.to_owned(),
            format: "text".to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl FolioConfig {
    /// Validates configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Configuration`] for an unknown source or
    /// format, or an empty page key, and [`PaginationError::InvalidUrl`]
    /// when `base_url` cannot be parsed.
    pub fn validate(&self) -> Result<(), PaginationError> {
        self.source_kind()?;
        self.output_format()?;

        if self.page_key.is_empty() {
            return Err(PaginationError::Configuration {
                message: "page key must not be empty".to_owned(),
            });
        }

        self.parsed_base_url()?;
        Ok(())
    }

    /// Returns the configured output format.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Configuration`] for an unknown format.
    pub fn output_format(&self) -> Result<OutputFormat, PaginationError> {
        self.format.parse()
    }

    /// Returns the configured page source kind.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Configuration`] for an unknown source.
    pub fn source_kind(&self) -> Result<SourceKind, PaginationError> {
        self.source.parse()
    }

    /// Returns the page source, preferring a manually set non-zero page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Configuration`] for an unknown source.
    pub fn page_source(&self) -> Result<PageSource, PaginationError> {
        if let Some(page) = self.page.filter(|&page| page != 0) {
            return Ok(PageSource::Fixed(page));
        }

        Ok(match self.source_kind()? {
            SourceKind::QueryString => PageSource::query_string(&self.page_key),
            SourceKind::Route => PageSource::route(&self.page_key),
        })
    }

    /// Builds the request parameters described by `query` and `route_page`.
    #[must_use]
    pub fn request_params(&self) -> RequestParams {
        let params = self
            .query
            .as_deref()
            .map_or_else(RequestParams::new, RequestParams::from_query);

        match &self.route_page {
            Some(value) => params.with_route_param(self.page_key.clone(), value.clone()),
            None => params,
        }
    }

    /// Converts the configuration into paginator settings.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Configuration`] for an unknown source.
    pub fn paginator_settings(&self) -> Result<PaginatorSettings, PaginationError> {
        Ok(PaginatorSettings {
            total_items: self.total_items,
            items_per_page: self.items_per_page,
            source: self.page_source()?,
            auto_hide: !self.no_auto_hide,
            first_page_in_url: self.first_page_in_url,
            ..PaginatorSettings::default()
        })
    }

    /// Parses `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidUrl`] when the URL is malformed.
    pub fn parsed_base_url(&self) -> Result<Url, PaginationError> {
        Url::parse(&self.base_url)
            .map_err(|error| PaginationError::InvalidUrl(format!("{}: {error}", self.base_url)))
    }
}

#[cfg(test)]
mod tests;
