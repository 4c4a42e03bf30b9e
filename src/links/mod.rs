//! Navigation link generation from a pagination state.
//!
//! Links are produced in display order: first, previous, one entry per page,
//! next, and last. URLs come from a caller-supplied [`PageUrl`]; this module
//! only decides which pages get a link.

use serde::Serialize;

use crate::pagination::PaginationState;

/// Maps a page number to a link target.
///
/// The page is `None` when the link points at the first page and the page
/// number should be left out of the URL.
#[cfg_attr(test, mockall::automock)]
pub trait PageUrl {
    /// Returns the URL for `page`.
    fn page_url(&self, page: Option<u64>) -> String;
}

impl<F> PageUrl for F
where
    F: Fn(Option<u64>) -> String,
{
    fn page_url(&self, page: Option<u64>) -> String {
        self(page)
    }
}

/// Fixed labels for the four navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkLabels {
    /// Label of the first-page link.
    pub first: String,
    /// Label of the previous-page link.
    pub previous: String,
    /// Label of the next-page link.
    pub next: String,
    /// Label of the last-page link.
    pub last: String,
}

impl Default for LinkLabels {
    fn default() -> Self {
        Self {
            first: "First".to_owned(),
            previous: "Previous".to_owned(),
            next: "Next".to_owned(),
            last: "Last".to_owned(),
        }
    }
}

/// Options controlling link generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Labels for the navigation links.
    pub labels: LinkLabels,
    /// Include the page number in URLs that point at page one.
    pub first_page_in_url: bool,
}

/// What a link navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Jump to page one.
    First,
    /// Step back one page.
    Previous,
    /// A numbered page.
    Page(u64),
    /// Step forward one page.
    Next,
    /// Jump to the last page.
    Last,
}

impl LinkKind {
    /// Returns the `rel` attribute value for this kind of link.
    #[must_use]
    pub const fn rel(self) -> Option<&'static str> {
        match self {
            Self::First => Some("first"),
            Self::Previous => Some("prev"),
            Self::Page(_) => None,
            Self::Next => Some("next"),
            Self::Last => Some("last"),
        }
    }
}

/// A single rendered navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// What the link navigates to.
    pub kind: LinkKind,
    /// Visible text.
    pub label: String,
    /// Target URL, or `None` when the entry is shown without a link.
    pub url: Option<String>,
    /// Relationship hint for the anchor.
    pub rel: Option<&'static str>,
    /// True for the entry naming the current page.
    pub current: bool,
}

impl PageLink {
    fn new(kind: LinkKind, label: String, url: Option<String>) -> Self {
        Self {
            kind,
            label,
            url,
            rel: kind.rel(),
            current: false,
        }
    }
}

/// Returns the page value handed to [`PageUrl`] for `page`.
///
/// Page numbers below one are raised to one. Page one becomes `None` unless
/// `first_page_in_url` is set.
#[must_use]
pub const fn url_page(page: u64, first_page_in_url: bool) -> Option<u64> {
    match page {
        0 | 1 if !first_page_in_url => None,
        0 => Some(1),
        other => Some(other),
    }
}

/// Builds the navigation links for `state`.
pub fn build_links<U>(state: &PaginationState, urls: &U, options: &LinkOptions) -> Vec<PageLink>
where
    U: PageUrl + ?Sized,
{
    let url_for = |page: u64| urls.page_url(url_page(page, options.first_page_in_url));
    let labels = &options.labels;

    let total_pages = state.total_pages();
    let mut links = Vec::new();

    links.push(PageLink::new(
        LinkKind::First,
        labels.first.clone(),
        state.first_page().map(url_for),
    ));
    links.push(PageLink::new(
        LinkKind::Previous,
        labels.previous.clone(),
        state.previous_page().map(url_for),
    ));

    for page in 1..=total_pages {
        let current = page == state.current_page();
        let url = (!current).then(|| url_for(page));
        let mut link = PageLink::new(LinkKind::Page(page), page.to_string(), url);
        link.current = current;
        links.push(link);
    }

    links.push(PageLink::new(
        LinkKind::Next,
        labels.next.clone(),
        state.next_page().map(url_for),
    ));
    links.push(PageLink::new(
        LinkKind::Last,
        labels.last.clone(),
        state.last_page().map(url_for),
    ));

    tracing::trace!(count = links.len(), "built pagination links");
    links
}

#[cfg(test)]
mod tests;
