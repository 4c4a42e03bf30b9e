//! HTML rendering of pagination links using Jinja2-compatible templates.
//!
//! The default view renders a `<p class="pagination">` block with one entry
//! per [`PageLink`]. Callers may supply their own template source; it is
//! compiled with HTML auto-escaping enabled, as is the default view.
//! Escaping covers `&`, `<`, `>`, `"` and `'` only, so URLs keep their `/`.
//!
//! # Available Variables
//!
//! - `links` — list of link objects with `label`, `url`, `rel`, `current`
//! - `state` — the pagination state (`current_page`, `total_pages`,
//!   `first_item`, `last_item`, `offset`, ...)

use std::fmt::Write as _;
use std::io::Write;

use minijinja::{AutoEscape, Environment, Error, Output, State, Value, context, escape_formatter};

use crate::error::PaginationError;
use crate::links::PageLink;
use crate::pagination::PaginationState;

/// Name under which the built-in view is registered.
pub const DEFAULT_VIEW_NAME: &str = "pagination/basic.html";

const CUSTOM_VIEW_NAME: &str = "pagination/custom.html";

/// Built-in view markup.
pub const DEFAULT_VIEW: &str = r#"<p class="pagination">
{%- for link in links %}
{%- if link.url %}
  <a href="{{ link.url }}"{% if link.rel %} rel="{{ link.rel }}"{% endif %}>{{ link.label }}</a>
{%- elif link.current %}
  <strong>{{ link.label }}</strong>
{%- else %}
  {{ link.label }}
{%- endif %}
{%- endfor %}
</p><!-- .pagination -->"#;

/// Writes `value`, escaping markup characters when HTML auto-escaping is on.
fn html_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if state.auto_escape() != AutoEscape::Html || value.is_safe() {
        return escape_formatter(out, state, value);
    }
    let Some(text) = value.as_str() else {
        return escape_formatter(out, state, value);
    };

    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;"),
            '<' => out.write_str("&lt;"),
            '>' => out.write_str("&gt;"),
            '"' => out.write_str("&quot;"),
            '\'' => out.write_str("&#039;"),
            other => out.write_char(other),
        }?;
    }
    Ok(())
}

/// Renders `links` with the built-in view, or with `template` when given.
///
/// # Errors
///
/// Returns [`PaginationError::Template`] if the template has syntax errors or
/// fails to render.
pub fn render_html(
    links: &[PageLink],
    state: &PaginationState,
    template: Option<&str>,
) -> Result<String, PaginationError> {
    let mut env = Environment::new();
    env.set_formatter(html_formatter);

    let name = template.map_or(DEFAULT_VIEW_NAME, |_| CUSTOM_VIEW_NAME);
    env.add_template(name, template.unwrap_or(DEFAULT_VIEW))
        .map_err(|e| PaginationError::Template {
            message: format!("invalid template syntax: {e}"),
        })?;

    let tmpl = env.get_template(name).map_err(|e| PaginationError::Template {
        message: format!("failed to retrieve template: {e}"),
    })?;

    let ctx = context! {
        links => links,
        state => state,
    };

    tmpl.render(ctx).map_err(|e| PaginationError::Template {
        message: format!("template rendering failed: {e}"),
    })
}

/// Renders `links` like [`render_html`] and writes the result to `writer`.
///
/// # Errors
///
/// Returns [`PaginationError::Template`] on template failures and
/// [`PaginationError::Io`] if writing fails.
pub fn write_html<W: Write>(
    writer: &mut W,
    links: &[PageLink],
    state: &PaginationState,
    template: Option<&str>,
) -> Result<(), PaginationError> {
    let output = render_html(links, state, template)?;

    writer
        .write_all(output.as_bytes())
        .map_err(|e| PaginationError::Io {
            message: format!("failed to write pagination output: {e}"),
        })
}
