//! Error type for the input-text readers.

use thiserror::Error;

/// Errors produced while decoding the input text formats.
///
/// Only a structural failure is fatal: a block whose braces never balance
/// cannot be tokenized at all. Everything below that level (missing
/// directions, unmatched lines) degrades to omission, not an error.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A `cell(...)` or `pin(...)` block whose brace nesting never closes
    /// before the end of the input.
    #[error("unbalanced block starting at `{header}`: braces never close")]
    UnbalancedBlock { header: String },
}
