//! Liberty cell-library reader.
//!
//! Extracts pin directions only; timing tables, functions, and every other
//! Liberty attribute are skipped. The scanner is line-oriented: it walks the
//! text looking for `cell(...)` headers, collects each cell's balanced-brace
//! block, and scans inside it for `pin(...)` blocks the same way.
//!
//! Both block levels share one scoped block extractor ([`collect_block`]),
//! which accepts the opening `{` on the header line or on a later line.

use gategraph_core::library::{CellDirectory, PinDirection};
use log::{debug, trace};

use crate::error::ParseError;

/// Parses Liberty text into a [`CellDirectory`].
///
/// # Errors
///
/// Returns [`ParseError::UnbalancedBlock`] when a `cell(...)`/`pin(...)`
/// block's braces never close before the end of the input. A library with no
/// cells at all parses successfully into an empty directory; whether that is
/// fatal is the caller's decision.
pub fn parse_library(text: &str) -> Result<CellDirectory, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut directory = CellDirectory::new();

    let mut i = 0;
    while i < lines.len() {
        let header = lines[i].trim();
        if !header.starts_with("cell(") {
            i += 1;
            continue;
        }

        let (block, next) = collect_block(&lines, i)?;
        let cell = header_name(header, "cell(").to_uppercase();
        directory.declare_cell(&cell);
        scan_pins(&block, &cell, &mut directory)?;
        trace!(cell; "Parsed cell block");
        i = next;
    }

    let cell_count = directory.len();
    debug!(cell_count; "Cell library scanned");
    Ok(directory)
}

/// Scans the inside of one cell block for `pin(...)` blocks.
fn scan_pins(
    block: &str,
    cell: &str,
    directory: &mut CellDirectory,
) -> Result<(), ParseError> {
    let lines: Vec<&str> = block.lines().collect();

    let mut k = 0;
    while k < lines.len() {
        let header = lines[k].trim();
        if !header.starts_with("pin(") {
            k += 1;
            continue;
        }

        let (pin_block, next) = collect_block(&lines, k)?;
        let pin = header_name(header, "pin(");

        // Whitespace-collapsed search keeps single-line and multi-line pin
        // blocks on the same code path. `output` takes precedence.
        let normalized = pin_block.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.contains("direction: output") {
            directory.set_pin(cell, pin, PinDirection::Output);
        } else if normalized.contains("direction: input") {
            directory.set_pin(cell, pin, PinDirection::Input);
        }
        // No direction attribute: the pin is omitted and later lookups
        // resolve to Unknown.

        k = next;
    }

    Ok(())
}

/// Collects a balanced-brace block whose header sits at `start`.
///
/// The opening `{` may sit on the header line itself or on a later line; the
/// scan skips forward to the line carrying it, then tracks brace depth until
/// the block closes. Returns the block text (from the `{` line through the
/// closing line) and the index of the first line after the block.
///
/// A header with no `{` anywhere after it yields an empty block at end of
/// input, mirroring how a truncated trailing header is tolerated.
fn collect_block<'a>(lines: &[&'a str], start: usize) -> Result<(String, usize), ParseError> {
    let mut open = start;
    while open < lines.len() && !lines[open].contains('{') {
        open += 1;
    }
    if open >= lines.len() {
        return Ok((String::new(), lines.len()));
    }

    let mut depth: i64 = 0;
    let mut buf: Vec<&str> = Vec::new();
    let mut i = open;
    while i < lines.len() {
        let line = lines[i];
        buf.push(line);
        depth += brace_delta(line);
        i += 1;
        if depth == 0 {
            return Ok((buf.join("\n"), i));
        }
    }

    Err(ParseError::UnbalancedBlock {
        header: lines[start].trim().to_string(),
    })
}

/// Net brace count of one line: `{` opens minus `}` closes.
fn brace_delta(line: &str) -> i64 {
    let opens = line.matches('{').count() as i64;
    let closes = line.matches('}').count() as i64;
    opens - closes
}

/// Extracts the parenthesized name from a `cell(NAME)`/`pin(NAME)` header.
fn header_name<'a>(header: &'a str, keyword: &str) -> &'a str {
    header[keyword.len()..].split(')').next().unwrap_or("").trim()
}
