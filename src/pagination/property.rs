//! Named accessors for [`PaginationState`](super::PaginationState).

use std::fmt;
use std::str::FromStr;

use crate::error::PaginationError;

/// One of the values a pagination state exposes by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// The clamped current page.
    CurrentPage,
    /// The total item count.
    TotalItems,
    /// The page size.
    ItemsPerPage,
    /// The number of pages.
    TotalPages,
    /// First item shown on the current page.
    CurrentFirstItem,
    /// Last item shown on the current page.
    CurrentLastItem,
    /// The page before the current one.
    PreviousPage,
    /// The page after the current one.
    NextPage,
    /// The first page, unless already there.
    FirstPage,
    /// The last page, unless already there.
    LastPage,
    /// Items to skip before the current page.
    Offset,
}

impl Property {
    /// Every property, in display order.
    pub const ALL: [Self; 11] = [
        Self::CurrentPage,
        Self::TotalItems,
        Self::ItemsPerPage,
        Self::TotalPages,
        Self::CurrentFirstItem,
        Self::CurrentLastItem,
        Self::PreviousPage,
        Self::NextPage,
        Self::FirstPage,
        Self::LastPage,
        Self::Offset,
    ];

    /// Returns the canonical accessor name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CurrentPage => "current_page",
            Self::TotalItems => "total_items",
            Self::ItemsPerPage => "items_per_page",
            Self::TotalPages => "total_pages",
            Self::CurrentFirstItem => "current_first_item",
            Self::CurrentLastItem => "current_last_item",
            Self::PreviousPage => "previous_page",
            Self::NextPage => "next_page",
            Self::FirstPage => "first_page",
            Self::LastPage => "last_page",
            Self::Offset => "offset",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = PaginationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let canonical = match name {
            "first_item" => "current_first_item",
            "last_item" => "current_last_item",
            other => other,
        };

        Self::ALL
            .into_iter()
            .find(|property| property.name() == canonical)
            .ok_or_else(|| PaginationError::UnknownProperty {
                name: name.to_owned(),
            })
    }
}
