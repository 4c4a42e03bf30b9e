//! Error types exposed by folio.

use thiserror::Error;

/// Errors surfaced while looking up pagination values or rendering links.
///
/// The calculator itself never fails; malformed inputs are clamped. These
/// variants cover accessor misuse and the presentation and CLI layers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// A named accessor was requested that does not exist.
    #[error("unknown pagination property: {name}")]
    UnknownProperty {
        /// The accessor name supplied by the caller.
        name: String,
    },

    /// A template failed to compile or render.
    #[error("template error: {message}")]
    Template {
        /// Details reported by the template engine.
        message: String,
    },

    /// Writing rendered output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A base URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),
}
