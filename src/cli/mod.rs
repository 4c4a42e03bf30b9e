//! CLI output handlers.
//!
//! - [`page_urls`]: Page URL builders derived from the configured base URL
//! - [`output`]: Text, JSON, and HTML writers

use std::io::Write;

use folio::config::SourceKind;
use folio::{FolioConfig, OutputFormat, PageUrl, PaginationError, Paginator};

pub mod output;
pub mod page_urls;

use page_urls::{PathSegmentUrls, QueryStringUrls};

/// Computes pagination for `config` and writes it in the configured format.
pub fn run<W: Write>(writer: &mut W, config: &FolioConfig) -> Result<(), PaginationError> {
    let paginator = Paginator::new(config.paginator_settings()?, &config.request_params());
    let urls = page_urls_for(config)?;

    match config.output_format()? {
        OutputFormat::Text => output::write_text(writer, paginator.state()),
        OutputFormat::Json => output::write_json(writer, &paginator, urls.as_ref()),
        OutputFormat::Html => output::write_html_view(writer, &paginator, urls.as_ref()),
    }
}

/// Selects the URL builder matching the configured page source.
fn page_urls_for(config: &FolioConfig) -> Result<Box<dyn PageUrl>, PaginationError> {
    let base = config.parsed_base_url()?;

    let urls: Box<dyn PageUrl> = match config.source_kind()? {
        SourceKind::QueryString => Box::new(QueryStringUrls::new(base, &config.page_key)),
        SourceKind::Route => Box::new(PathSegmentUrls::new(base)?),
    };
    Ok(urls)
}
