//! # hc-errors
//!
//! Last-mile rendering of validation, security and compliance errors.
//!
//! Validation layers report failures as `{field, message, code}` data.
//! [`ErrorFormatter`] turns codes into localized, actionable text and
//! renders batches of errors as plain text, escaped HTML, JSON or log lines.

pub mod codes;
pub mod formatter;
pub mod locale;
pub mod messages;
pub mod suggestions;

pub use codes::{ErrorCategory, Severity};
pub use formatter::{escape_html, ErrorFormatter, ValidationError};
pub use locale::{Locale, LocaleError};
