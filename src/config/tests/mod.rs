//! Unit tests for configuration loading and conversion.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `cli_flags`: Command-line flag parsing tests
//! - `precedence`: Layer precedence tests
//! - `conversion`: Paginator settings and request parameter tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
