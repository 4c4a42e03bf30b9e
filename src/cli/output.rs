//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use folio::{PageLink, PageUrl, PaginationError, PaginationState, Paginator, Property};
use serde::Serialize;

/// JSON document written by [`write_json`].
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    state: &'a PaginationState,
    hidden: bool,
    links: Vec<PageLink>,
}

/// Writes one `name: value` line per pagination property.
///
/// Absent neighbour pages are shown as `-`.
pub fn write_text<W: Write>(writer: &mut W, state: &PaginationState) -> Result<(), PaginationError> {
    for property in Property::ALL {
        let value = state
            .get(property)
            .map_or_else(|| "-".to_owned(), |value| value.to_string());
        writeln!(writer, "{property}: {value}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the state and its links as pretty-printed JSON.
pub fn write_json<W, U>(
    writer: &mut W,
    paginator: &Paginator,
    urls: &U,
) -> Result<(), PaginationError>
where
    W: Write,
    U: PageUrl + ?Sized,
{
    let report = JsonReport {
        state: paginator.state(),
        hidden: paginator.is_hidden(),
        links: paginator.links(urls),
    };

    serde_json::to_writer_pretty(&mut *writer, &report).map_err(|error| PaginationError::Io {
        message: format!("failed to serialise pagination report: {error}"),
    })?;
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the rendered HTML view; nothing is written when it is hidden.
pub fn write_html_view<W, U>(
    writer: &mut W,
    paginator: &Paginator,
    urls: &U,
) -> Result<(), PaginationError>
where
    W: Write,
    U: PageUrl + ?Sized,
{
    let html = paginator.render(urls)?;
    if html.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{html}").map_err(|e| io_error(&e))
}

fn io_error(error: &io::Error) -> PaginationError {
    PaginationError::Io {
        message: error.to_string(),
    }
}
