//! Standard-cell library directory: pin directions per cell type.
//!
//! The directory is built once from a Liberty description and read-only
//! afterwards. Lookups never fail: a cell type or pin that the library does
//! not declare resolves to [`PinDirection::Unknown`], and the caller applies
//! its conservative default.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Signal direction of a cell pin, as declared in the cell library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    /// The pin consumes a signal.
    Input,
    /// The pin drives a signal.
    Output,
    /// The library declares no usable direction for this pin.
    Unknown,
}

impl PinDirection {
    /// Stable lowercase form, matching the Liberty `direction:` keywords.
    pub fn as_str(&self) -> &'static str {
        match self {
            PinDirection::Input => "input",
            PinDirection::Output => "output",
            PinDirection::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PinDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directory of cell types and their pin directions.
///
/// Cell-type names are normalized to uppercase on insertion and lookup; pin
/// names are case-sensitive as declared in the library. Iteration order is
/// the declaration order of the source text.
///
/// # Examples
///
/// ```
/// use gategraph_core::library::{CellDirectory, PinDirection};
///
/// let mut directory = CellDirectory::new();
/// directory.declare_cell("nor2");
/// directory.set_pin("nor2", "A", PinDirection::Input);
///
/// assert_eq!(directory.direction("NOR2", "A"), PinDirection::Input);
/// assert_eq!(directory.direction("NOR2", "Z"), PinDirection::Unknown);
/// assert_eq!(directory.direction("MISSING", "A"), PinDirection::Unknown);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CellDirectory {
    cells: IndexMap<String, IndexMap<String, PinDirection>>,
}

impl CellDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a cell type, with no pins yet.
    ///
    /// A cell whose pins all lack a `direction:` attribute still counts as
    /// parsed, so it must appear in the directory.
    pub fn declare_cell(&mut self, cell: &str) {
        self.cells.entry(cell.to_uppercase()).or_default();
    }

    /// Records the direction of one pin of a cell type.
    pub fn set_pin(&mut self, cell: &str, pin: &str, direction: PinDirection) {
        self.cells
            .entry(cell.to_uppercase())
            .or_default()
            .insert(pin.to_string(), direction);
    }

    /// Looks up the direction of `pin` on `cell`.
    ///
    /// Returns [`PinDirection::Unknown`] when the cell or the pin is absent.
    pub fn direction(&self, cell: &str, pin: &str) -> PinDirection {
        self.cells
            .get(&cell.to_uppercase())
            .and_then(|pins| pins.get(pin))
            .copied()
            .unwrap_or(PinDirection::Unknown)
    }

    /// Whether the cell type is present in the directory.
    pub fn contains_cell(&self, cell: &str) -> bool {
        self.cells.contains_key(&cell.to_uppercase())
    }

    /// Number of cell types in the directory.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell was parsed at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over cell names in declaration order.
    pub fn cell_names(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_lookup() {
        let mut directory = CellDirectory::new();
        directory.set_pin("NOR2", "A", PinDirection::Input);
        directory.set_pin("NOR2", "Y", PinDirection::Output);

        assert_eq!(directory.direction("NOR2", "A"), PinDirection::Input);
        assert_eq!(directory.direction("NOR2", "Y"), PinDirection::Output);
    }

    #[test]
    fn test_cell_name_case_normalized() {
        let mut directory = CellDirectory::new();
        directory.set_pin("nor2", "A", PinDirection::Input);

        assert!(directory.contains_cell("NOR2"));
        assert!(directory.contains_cell("Nor2"));
        assert_eq!(directory.direction("nOr2", "A"), PinDirection::Input);
    }

    #[test]
    fn test_pin_name_case_sensitive() {
        let mut directory = CellDirectory::new();
        directory.set_pin("INV", "A", PinDirection::Input);

        assert_eq!(directory.direction("INV", "a"), PinDirection::Unknown);
    }

    #[test]
    fn test_missing_cell_is_unknown_not_error() {
        let directory = CellDirectory::new();
        assert_eq!(directory.direction("NAND2", "A"), PinDirection::Unknown);
    }

    #[test]
    fn test_declared_cell_without_pins() {
        let mut directory = CellDirectory::new();
        directory.declare_cell("BUF");

        assert!(!directory.is_empty());
        assert!(directory.contains_cell("BUF"));
        assert_eq!(directory.direction("BUF", "A"), PinDirection::Unknown);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut directory = CellDirectory::new();
        directory.declare_cell("INV");
        directory.declare_cell("NOR2");
        directory.declare_cell("NAND2");

        let names: Vec<&str> = directory.cell_names().collect();
        assert_eq!(names, vec!["INV", "NOR2", "NAND2"]);
    }
}
