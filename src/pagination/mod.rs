//! Pagination state calculation.
//!
//! This module derives a consistent [`PaginationState`] from three raw inputs:
//! the total item count, the page size, and the requested page number. Inputs
//! are never rejected. Negative counts become zero, non-positive page sizes
//! become one, and out-of-range page numbers clamp to the nearest valid page.
//!
//! # Example
//!
//! ```
//! use folio::pagination::{PaginationInput, PaginationState};
//!
//! let state = PaginationState::compute(PaginationInput::new(95, 10, 3));
//! assert_eq!(state.total_pages(), 10);
//! assert_eq!(state.first_item(), 21);
//! assert_eq!(state.last_item(), 30);
//! assert_eq!(state.offset(), 20);
//! assert_eq!(state.previous_page(), Some(2));
//! assert_eq!(state.next_page(), Some(4));
//! ```

mod property;

pub use property::Property;

use serde::Serialize;

use crate::error::PaginationError;

/// Raw, unvalidated inputs to the calculator.
///
/// Values are signed so that callers can pass through whatever they received
/// (a database count, a parsed query parameter) without pre-validating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInput {
    /// Total number of items across all pages.
    pub total_items: i64,
    /// Number of items shown on each page.
    pub items_per_page: i64,
    /// Page number the caller asked for (1-based).
    pub requested_page: i64,
}

impl PaginationInput {
    /// Creates a new input triple.
    #[must_use]
    pub const fn new(total_items: i64, items_per_page: i64, requested_page: i64) -> Self {
        Self {
            total_items,
            items_per_page,
            requested_page,
        }
    }
}

/// Fully resolved pagination state.
///
/// Instances are immutable. Any change to the inputs requires computing a new
/// state with [`PaginationState::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    total_items: u64,
    items_per_page: u64,
    current_page: u64,
    total_pages: u64,
    first_item: u64,
    last_item: u64,
    previous_page: Option<u64>,
    next_page: Option<u64>,
    first_page: Option<u64>,
    last_page: Option<u64>,
    offset: u64,
}

impl PaginationState {
    /// Computes the state for the given inputs, clamping anything out of range.
    #[must_use]
    pub fn compute(input: PaginationInput) -> Self {
        let total_items = u64::try_from(input.total_items).unwrap_or(0);
        let items_per_page = u64::try_from(input.items_per_page).unwrap_or(1).max(1);
        let total_pages = total_items.div_ceil(items_per_page);

        let current_page = u64::try_from(input.requested_page)
            .unwrap_or(1)
            .clamp(1, total_pages.max(1));
        if i64::try_from(current_page).ok() != Some(input.requested_page) {
            tracing::debug!(
                requested = input.requested_page,
                current_page,
                "requested page clamped"
            );
        }

        let offset = (current_page - 1) * items_per_page;
        let first_item = (offset + 1).min(total_items);
        let last_item = first_item
            .saturating_add(items_per_page - 1)
            .min(total_items);

        let state = Self {
            total_items,
            items_per_page,
            current_page,
            total_pages,
            first_item,
            last_item,
            previous_page: (current_page > 1).then(|| current_page - 1),
            next_page: (current_page < total_pages).then(|| current_page + 1),
            first_page: (current_page != 1).then_some(1),
            last_page: (current_page < total_pages).then_some(total_pages),
            offset,
        };

        tracing::debug!(
            total_items,
            items_per_page,
            current_page,
            total_pages,
            "computed pagination state"
        );
        state
    }

    /// Returns the total number of items (never negative).
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Returns the page size (at least one).
    #[must_use]
    pub const fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Returns the number of pages; zero when there are no items.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Returns the 1-based position of the first item on the current page,
    /// or zero when there are no items.
    #[must_use]
    pub const fn first_item(&self) -> u64 {
        self.first_item
    }

    /// Returns the 1-based position of the last item on the current page,
    /// or zero when there are no items.
    #[must_use]
    pub const fn last_item(&self) -> u64 {
        self.last_item
    }

    /// Returns the previous page number, if the current page is not the first.
    #[must_use]
    pub const fn previous_page(&self) -> Option<u64> {
        self.previous_page
    }

    /// Returns the next page number, if the current page is not the last.
    #[must_use]
    pub const fn next_page(&self) -> Option<u64> {
        self.next_page
    }

    /// Returns `Some(1)` unless the current page is already the first.
    #[must_use]
    pub const fn first_page(&self) -> Option<u64> {
        self.first_page
    }

    /// Returns the last page number unless the current page is already the last.
    #[must_use]
    pub const fn last_page(&self) -> Option<u64> {
        self.last_page
    }

    /// Returns the 0-based number of items to skip to reach the current page.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns true if `page` is a positive page number within range.
    #[must_use]
    pub const fn valid_page(&self, page: i64) -> bool {
        page > 0 && page.unsigned_abs() <= self.total_pages
    }

    /// Returns true if `text` is a clean run of ASCII digits naming an
    /// existing page.
    ///
    /// Signs, whitespace, and decimal points are rejected, so `"+3"` and
    /// `"3.0"` are not valid even when page three exists.
    #[must_use]
    pub fn valid_page_str(&self, text: &str) -> bool {
        if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
            return false;
        }
        text.parse::<u64>()
            .is_ok_and(|page| page > 0 && page <= self.total_pages)
    }

    /// Returns the value of a single accessor.
    ///
    /// Optional accessors (`previous_page`, `next_page`, `first_page`,
    /// `last_page`) yield `None` when they do not apply; every other
    /// property always yields `Some`.
    #[must_use]
    pub const fn get(&self, property: Property) -> Option<u64> {
        match property {
            Property::CurrentPage => Some(self.current_page),
            Property::TotalItems => Some(self.total_items),
            Property::ItemsPerPage => Some(self.items_per_page),
            Property::TotalPages => Some(self.total_pages),
            Property::CurrentFirstItem => Some(self.first_item),
            Property::CurrentLastItem => Some(self.last_item),
            Property::PreviousPage => self.previous_page,
            Property::NextPage => self.next_page,
            Property::FirstPage => self.first_page,
            Property::LastPage => self.last_page,
            Property::Offset => Some(self.offset),
        }
    }

    /// Looks up an accessor by name.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::UnknownProperty`] when `name` is not one of
    /// the recognised accessor names.
    pub fn property(&self, name: &str) -> Result<Option<u64>, PaginationError> {
        let property: Property = name.parse()?;
        Ok(self.get(property))
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::compute(PaginationInput::new(0, 10, 1))
    }
}
