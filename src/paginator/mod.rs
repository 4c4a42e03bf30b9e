//! Settings-backed paginator tying inputs, computed state, and rendering.
//!
//! A [`Paginator`] holds its settings alongside the state computed from them.
//! Changing settings goes through [`Paginator::setup`], which recomputes the
//! state when a pagination input was supplied. Nothing is recomputed behind
//! the caller's back.
//!
//! # Example
//!
//! ```
//! use folio::paginator::{Paginator, PaginatorSettings, SettingsUpdate};
//! use folio::source::RequestParams;
//!
//! let params = RequestParams::from_query("page=3");
//! let mut paginator = Paginator::new(
//!     PaginatorSettings {
//!         total_items: 95,
//!         ..PaginatorSettings::default()
//!     },
//!     &params,
//! );
//! assert_eq!(paginator.state().offset(), 20);
//!
//! paginator.setup(SettingsUpdate::default().items_per_page(50), &params);
//! assert_eq!(paginator.state().current_page(), 2);
//! ```

use crate::error::PaginationError;
use crate::links::{LinkLabels, LinkOptions, PageLink, PageUrl, build_links, url_page};
use crate::pagination::{PaginationInput, PaginationState};
use crate::source::{PageSource, RequestParams, resolve_requested_page};
use crate::view::render_html;

/// Default page size.
pub const DEFAULT_ITEMS_PER_PAGE: i64 = 10;

/// Settings a [`Paginator`] is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatorSettings {
    /// Total number of items; negative values are treated as zero.
    pub total_items: i64,
    /// Page size; values below one are treated as one.
    pub items_per_page: i64,
    /// Where the requested page number comes from.
    pub source: PageSource,
    /// Render nothing when there is at most one page.
    pub auto_hide: bool,
    /// Include the page number in URLs that point at page one.
    pub first_page_in_url: bool,
    /// Labels for the navigation links.
    pub labels: LinkLabels,
}

impl Default for PaginatorSettings {
    fn default() -> Self {
        Self {
            total_items: 0,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            source: PageSource::default(),
            auto_hide: true,
            first_page_in_url: false,
            labels: LinkLabels::default(),
        }
    }
}

/// A partial settings change applied with [`Paginator::setup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    total_items: Option<i64>,
    items_per_page: Option<i64>,
    source: Option<PageSource>,
    auto_hide: Option<bool>,
    first_page_in_url: Option<bool>,
    labels: Option<LinkLabels>,
}

impl SettingsUpdate {
    /// Sets the total item count.
    #[must_use]
    pub const fn total_items(mut self, total_items: i64) -> Self {
        self.total_items = Some(total_items);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn items_per_page(mut self, items_per_page: i64) -> Self {
        self.items_per_page = Some(items_per_page);
        self
    }

    /// Sets the page source.
    #[must_use]
    pub fn source(mut self, source: PageSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets whether single-page output is hidden.
    #[must_use]
    pub const fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = Some(auto_hide);
        self
    }

    /// Sets whether page one URLs carry the page number.
    #[must_use]
    pub const fn first_page_in_url(mut self, first_page_in_url: bool) -> Self {
        self.first_page_in_url = Some(first_page_in_url);
        self
    }

    /// Sets the navigation labels.
    #[must_use]
    pub fn labels(mut self, labels: LinkLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    const fn touches_inputs(&self) -> bool {
        self.total_items.is_some() || self.items_per_page.is_some() || self.source.is_some()
    }
}

/// Pagination settings together with the state computed from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    settings: PaginatorSettings,
    state: PaginationState,
}

impl Paginator {
    /// Creates a paginator, resolving the requested page from `params`.
    #[must_use]
    pub fn new(settings: PaginatorSettings, params: &RequestParams) -> Self {
        let state = compute_state(&settings, params);
        Self { settings, state }
    }

    /// Applies `update` and recomputes the state if a pagination input
    /// (total items, page size, or page source) was supplied.
    pub fn setup(&mut self, update: SettingsUpdate, params: &RequestParams) -> &mut Self {
        let recompute = update.touches_inputs();
        let SettingsUpdate {
            total_items,
            items_per_page,
            source,
            auto_hide,
            first_page_in_url,
            labels,
        } = update;

        if let Some(value) = total_items {
            self.settings.total_items = value;
        }
        if let Some(value) = items_per_page {
            self.settings.items_per_page = value;
        }
        if let Some(value) = source {
            self.settings.source = value;
        }
        if let Some(value) = auto_hide {
            self.settings.auto_hide = value;
        }
        if let Some(value) = first_page_in_url {
            self.settings.first_page_in_url = value;
        }
        if let Some(value) = labels {
            self.settings.labels = value;
        }

        if recompute {
            self.recompute(params);
        } else {
            tracing::trace!("settings updated without pagination inputs; state kept");
        }
        self
    }

    /// Recomputes the state from the current settings and `params`.
    pub fn recompute(&mut self, params: &RequestParams) {
        self.state = compute_state(&self.settings, params);
    }

    /// Returns the computed state.
    #[must_use]
    pub const fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &PaginatorSettings {
        &self.settings
    }

    /// Returns true when rendering would produce no output.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.settings.auto_hide && self.state.total_pages() <= 1
    }

    /// Returns the URL for `page`, raising page numbers below one to one.
    pub fn url<U>(&self, page: i64, urls: &U) -> String
    where
        U: PageUrl + ?Sized,
    {
        let cleaned = u64::try_from(page).unwrap_or(1);
        urls.page_url(url_page(cleaned, self.settings.first_page_in_url))
    }

    /// Returns the navigation links for the current state.
    pub fn links<U>(&self, urls: &U) -> Vec<PageLink>
    where
        U: PageUrl + ?Sized,
    {
        build_links(&self.state, urls, &self.link_options())
    }

    /// Renders the built-in HTML view.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Template`] if rendering fails.
    pub fn render<U>(&self, urls: &U) -> Result<String, PaginationError>
    where
        U: PageUrl + ?Sized,
    {
        self.render_template(urls, None)
    }

    /// Renders a caller-supplied template.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::Template`] if the template is invalid or
    /// fails to render.
    pub fn render_with<U>(&self, urls: &U, template: &str) -> Result<String, PaginationError>
    where
        U: PageUrl + ?Sized,
    {
        self.render_template(urls, Some(template))
    }

    fn render_template<U>(&self, urls: &U, template: Option<&str>) -> Result<String, PaginationError>
    where
        U: PageUrl + ?Sized,
    {
        if self.is_hidden() {
            tracing::debug!(
                total_pages = self.state.total_pages(),
                "pagination hidden"
            );
            return Ok(String::new());
        }

        render_html(&self.links(urls), &self.state, template)
    }

    fn link_options(&self) -> LinkOptions {
        LinkOptions {
            labels: self.settings.labels.clone(),
            first_page_in_url: self.settings.first_page_in_url,
        }
    }
}

fn compute_state(settings: &PaginatorSettings, params: &RequestParams) -> PaginationState {
    let requested_page = resolve_requested_page(&settings.source, params);
    PaginationState::compute(PaginationInput::new(
        settings.total_items,
        settings.items_per_page,
        requested_page,
    ))
}
