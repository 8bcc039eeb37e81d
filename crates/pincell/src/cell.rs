//! Cell state storage.
//!
//! A [`CellRow`] holds the per-slot state of a passcode control: each
//! [`Cell`] stores at most one accepted character plus an editable flag.
//! Cells are addressed by their dense slot index; separators from the
//! layout pattern never appear here.

// ============================================================================
// Cell
// ============================================================================

/// The state of a single passcode cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    index: usize,
    content: Option<char>,
    editable: bool,
}

impl Cell {
    fn new(index: usize) -> Self {
        Self {
            index,
            content: None,
            editable: false,
        }
    }

    /// This cell's slot index within the row.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The accepted character, if any.
    pub fn content(&self) -> Option<char> {
        self.content
    }

    /// True if this cell currently accepts keyboard input.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// True if this cell holds no character.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

// ============================================================================
// CellRow
// ============================================================================

/// A fixed-length row of passcode cells.
///
/// Exactly one cell is editable at a time; a fresh row starts with cell
/// zero editable and all cells empty.
#[derive(Debug, Clone)]
pub struct CellRow {
    cells: Vec<Cell>,
}

impl CellRow {
    /// Creates a row of `count` empty cells with cell zero editable.
    ///
    /// `count` must be at least one; layout patterns guarantee this.
    pub fn new(count: usize) -> Self {
        let mut cells: Vec<Cell> = (0..count).map(Cell::new).collect();
        if let Some(first) = cells.first_mut() {
            first.editable = true;
        }
        Self { cells }
    }

    /// The number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the row has no cells. Never true for rows built from a
    /// valid pattern.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Iterates the cells in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// True if every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// The index of the first empty cell, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_empty)
    }

    /// Sets the content of the cell at `index`. Out-of-range indices are
    /// ignored.
    pub fn set_content(&mut self, index: usize, content: Option<char>) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.content = content;
        }
    }

    /// Clears the content of every cell at or after `index`.
    pub fn clear_from(&mut self, index: usize) {
        for cell in self.cells.iter_mut().skip(index) {
            cell.content = None;
        }
    }

    /// Clears every cell.
    pub fn clear_all(&mut self) {
        self.clear_from(0);
    }

    /// Makes the cell at `index` the only editable cell. Out-of-range
    /// indices leave every cell non-editable.
    pub fn set_editable_only(&mut self, index: usize) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.editable = i == index;
        }
    }

    /// The aggregated value, or `None` if any cell up to the last is
    /// still empty.
    ///
    /// Aggregation walks cells in slot order and stops at the first gap,
    /// so a partially filled row never produces a value.
    pub fn value(&self) -> Option<String> {
        let mut value = String::with_capacity(self.cells.len());
        for cell in &self.cells {
            value.push(cell.content?);
        }
        Some(value)
    }
}
