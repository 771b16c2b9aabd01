//! Error adapter for converting GategraphError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. None of the
//! pipeline errors carry source spans, so the adapter only supplies codes and
//! help text.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use gategraph::GategraphError;

/// Adapter wrapping a [`GategraphError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a GategraphError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GategraphError::Io(_) => "gategraph::io",
            GategraphError::Parse(_) => "gategraph::parse",
            GategraphError::EmptyLibrary(_) => "gategraph::empty_library",
            GategraphError::EmptyNetlist(_) => "gategraph::empty_netlist",
            GategraphError::DuplicateGate { .. } => "gategraph::duplicate_gate",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            GategraphError::EmptyLibrary(_) => {
                "the library must contain at least one cell(...) block with pin directions"
            }
            GategraphError::EmptyNetlist(_) => {
                "the graph file must contain at least one record-shaped gate declaration"
            }
            GategraphError::DuplicateGate { .. } => {
                "rename one of the instances so their display names differ"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`GategraphError`] into a list of reportable errors.
///
/// Every pipeline error renders as a single diagnostic.
pub fn to_reportables(err: &GategraphError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
