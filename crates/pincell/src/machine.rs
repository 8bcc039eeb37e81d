//! The focus and edit state machine.
//!
//! Passcode entry is strictly sequential: exactly one cell, the cursor
//! cell, accepts input at any moment. Every edit reduces to one of the
//! [`CellUpdate`] transitions applied at an index, and each transition
//! yields a new cursor plus a [`FocusTarget`] telling the host where
//! keyboard focus should land next.
//!
//! Cells after the cursor are always cleared by a transition, so the row
//! can never contain a gap followed by content.

use pincell_core::logging::targets;

use crate::cell::CellRow;

/// Where keyboard focus should move after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Focus the cell at the given slot index.
    Cell(usize),
    /// All cells are filled; focus should leave the control and move to
    /// the next focusable element in the host.
    Advance,
}

/// An edit transition applied at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellUpdate {
    /// A validated character was accepted at the cursor cell; `stored`
    /// is the character the validator chose to store.
    CharacterAccepted { stored: char },
    /// Backspace: clear the cursor cell and step back.
    DeleteBackward,
    /// Forward delete: clear the cursor cell and everything after it.
    DeleteForward,
    /// Reset every cell.
    ClearAll,
}

// ============================================================================
// EditMachine
// ============================================================================

/// Tracks the cursor and applies edit transitions to a [`CellRow`].
#[derive(Debug, Clone)]
pub struct EditMachine {
    cursor: usize,
}

impl EditMachine {
    /// Creates a machine with the cursor on cell zero.
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// The index of the cell currently accepting input.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to `index` without editing any cell, clamped to
    /// the row. Used when focus re-enters the control.
    pub fn set_cursor(&mut self, index: usize, cells: &mut CellRow) {
        self.cursor = index.min(cells.len().saturating_sub(1));
        cells.set_editable_only(self.cursor);
    }

    /// Applies `update` at the current cursor and returns where focus
    /// should move.
    ///
    /// After every transition, cells past the cursor are empty and the
    /// cursor cell is the only editable one. The cursor cell itself may
    /// retain content after a backward step; the next accepted character
    /// simply overwrites it.
    pub fn apply(&mut self, cells: &mut CellRow, update: CellUpdate) -> FocusTarget {
        let index = self.cursor;
        let last = cells.len().saturating_sub(1);

        let target = match update {
            CellUpdate::CharacterAccepted { stored } => {
                cells.set_content(index, Some(stored));
                self.cursor = (index + 1).min(last);
                cells.clear_from(self.cursor + 1);
                if index == last {
                    FocusTarget::Advance
                } else {
                    FocusTarget::Cell(self.cursor)
                }
            }
            CellUpdate::DeleteBackward => {
                cells.set_content(index, None);
                self.cursor = index.saturating_sub(1);
                cells.clear_from(self.cursor + 1);
                FocusTarget::Cell(self.cursor)
            }
            CellUpdate::DeleteForward => {
                cells.clear_from(index);
                FocusTarget::Cell(self.cursor)
            }
            CellUpdate::ClearAll => {
                cells.clear_all();
                self.cursor = 0;
                FocusTarget::Cell(0)
            }
        };

        cells.set_editable_only(self.cursor);

        tracing::trace!(
            target: targets::MACHINE,
            ?update,
            index,
            cursor = self.cursor,
            ?target,
            "applied edit transition"
        );

        target
    }
}

impl Default for EditMachine {
    fn default() -> Self {
        Self::new()
    }
}
