//! The passcode entry control.
//!
//! [`PasscodeView`] is the public face of the crate: a row of character
//! cells laid out by a [`Pattern`], filled strictly left to right under
//! an [`EditMachine`], with every typed character screened by a
//! [`CharValidator`] or the fallback allow-list.
//!
//! The control is renderer-agnostic. A host feeds it key presses via
//! [`PasscodeView::handle_key_press`], polls
//! [`PasscodeView::take_repaint_flag`] to know when to redraw, and
//! reacts to the public signals for everything else (value changes,
//! rejected characters, focus movement out of the control).
//!
//! # Example
//!
//! ```ignore
//! use pincell::{KeyPressEvent, PasscodeView};
//!
//! let mut view = PasscodeView::with_pattern("###-###")?;
//! view.value_changed.connect(|value| {
//!     if let Some(code) = value {
//!         println!("passcode complete: {code}");
//!     }
//! });
//!
//! let mut event = KeyPressEvent::from_char('1');
//! view.handle_key_press(&mut event);
//! ```

use pincell_core::Signal;
use pincell_core::logging::targets;

use crate::base::ControlBase;
use crate::cell::{Cell, CellRow};
use crate::error::Result;
use crate::events::{Key, KeyPressEvent};
use crate::machine::{CellUpdate, EditMachine, FocusTarget};
use crate::pattern::Pattern;
use crate::validator::{AllowedCharacters, CharValidator};

/// Details of a rejected input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCharacter {
    /// The character that was rejected, or `None` if the key produced no
    /// printable character.
    pub character: Option<char>,
    /// The index of the cell that rejected it.
    pub index: usize,
}

// ============================================================================
// PasscodeView
// ============================================================================

/// A passcode entry control.
///
/// The control owns a fixed row of cells described by its pattern.
/// Exactly one cell accepts input at a time; accepted characters advance
/// the cursor and deletions step it back. The aggregated value is only
/// available once every cell is filled.
pub struct PasscodeView {
    base: ControlBase,
    pattern: Pattern,
    cells: CellRow,
    machine: EditMachine,
    allowed: AllowedCharacters,
    validator: Option<Box<dyn CharValidator>>,
    last_value: Option<String>,
    was_blank: bool,

    /// Signal emitted when the aggregated value changes.
    ///
    /// Carries `Some(value)` when the passcode becomes complete and
    /// `None` when a previously complete passcode becomes incomplete.
    pub value_changed: Signal<Option<String>>,

    /// Signal emitted after any cell content change.
    pub content_changed: Signal<()>,

    /// Signal emitted when a typed character is rejected by validation.
    pub invalid_character: Signal<InvalidCharacter>,

    /// Signal emitted when the control transitions between blank (every
    /// cell empty) and non-blank.
    pub empty_changed: Signal<bool>,

    /// Signal emitted when keyboard focus should move, either to a cell
    /// of this control or out of it entirely.
    pub focus_requested: Signal<FocusTarget>,
}

impl PasscodeView {
    /// Create a control with the default `###-###` pattern.
    pub fn new() -> Self {
        Self::from_pattern(Pattern::default())
    }

    /// Create a control from a pattern string.
    pub fn with_pattern(template: &str) -> Result<Self> {
        Ok(Self::from_pattern(Pattern::parse(template)?))
    }

    fn from_pattern(pattern: Pattern) -> Self {
        let cells = CellRow::new(pattern.slot_count());
        Self {
            base: ControlBase::new(),
            pattern,
            cells,
            machine: EditMachine::new(),
            allowed: AllowedCharacters::default(),
            validator: None,
            last_value: None,
            was_blank: true,
            value_changed: Signal::new(),
            content_changed: Signal::new(),
            invalid_character: Signal::new(),
            empty_changed: Signal::new(),
            focus_requested: Signal::new(),
        }
    }

    /// Set the allow-list of acceptable characters (builder style).
    pub fn with_allowed_characters(mut self, characters: impl Into<String>) -> Self {
        self.set_allowed_characters(characters);
        self
    }

    /// Set the character validator (builder style).
    pub fn with_character_validator(mut self, validator: impl CharValidator + 'static) -> Self {
        self.set_character_validator(validator);
        self
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the cell layout pattern.
    ///
    /// Changing the pattern discards all entered content and moves the
    /// cursor back to the first cell. The current pattern is kept
    /// untouched if `template` fails to parse.
    pub fn set_pattern(&mut self, template: &str) -> Result<()> {
        let pattern = Pattern::parse(template)?;
        tracing::debug!(target: targets::VIEW, %pattern, "pattern changed");
        self.pattern = pattern;
        self.rebuild_cells();
        Ok(())
    }

    /// Replace the allow-list used when no validator is attached.
    ///
    /// Entered content is discarded rather than re-validated against the
    /// new set.
    pub fn set_allowed_characters(&mut self, characters: impl Into<String>) {
        self.allowed = AllowedCharacters::new(characters);
        self.rebuild_cells();
    }

    /// Attach a character validator.
    ///
    /// While a validator is attached it fully replaces the allow-list.
    pub fn set_character_validator(&mut self, validator: impl CharValidator + 'static) {
        self.validator = Some(Box::new(validator));
    }

    /// Detach the character validator, returning to allow-list checking.
    pub fn clear_character_validator(&mut self) {
        self.validator = None;
    }

    /// Enable or disable the control.
    ///
    /// A disabled control ignores all input and gives up keyboard focus,
    /// but keeps its content.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
        if !enabled {
            self.base.set_focused(false);
        }
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// The cell layout pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The cells in slot order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The index of the cell currently accepting input.
    pub fn cursor(&self) -> usize {
        self.machine.cursor()
    }

    /// The aggregated passcode, or `None` while any cell is empty.
    pub fn value(&self) -> Option<String> {
        self.cells.value()
    }

    /// True if every cell is filled.
    pub fn is_valid(&self) -> bool {
        self.cells.value().is_some()
    }

    /// True if every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_blank()
    }

    /// Check if the control is enabled.
    pub fn is_enabled(&self) -> bool {
        self.base.is_enabled()
    }

    /// Check if the control currently has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.base.has_focus()
    }

    /// Signal emitted when the enabled state changes.
    pub fn enabled_changed(&self) -> &Signal<bool> {
        &self.base.enabled_changed
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Request a repaint of the control.
    pub fn update(&mut self) {
        self.base.update();
    }

    /// Return the repaint flag and clear it (called after painting).
    pub fn take_repaint_flag(&mut self) -> bool {
        self.base.take_repaint_flag()
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Discard all entered content and move the cursor to the first cell.
    pub fn clear(&mut self) {
        let target = self.machine.apply(&mut self.cells, CellUpdate::ClearAll);
        self.after_transition(target);
    }

    /// Offer a printable character to the cursor cell.
    ///
    /// The character passes through the attached validator, or the
    /// allow-list when none is attached. Returns true if the character
    /// was accepted. Rejected characters emit `invalid_character` and
    /// leave all state untouched.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.base.is_enabled() {
            return false;
        }

        let stored = match &self.validator {
            Some(validator) => validator.validate(ch),
            None => self.allowed.validate(ch),
        };

        match stored {
            Some(stored) => {
                let target = self
                    .machine
                    .apply(&mut self.cells, CellUpdate::CharacterAccepted { stored });
                self.after_transition(target);
                true
            }
            None => {
                let index = self.machine.cursor();
                tracing::debug!(target: targets::VIEW, %ch, index, "character rejected");
                self.invalid_character.emit(InvalidCharacter {
                    character: Some(ch),
                    index,
                });
                false
            }
        }
    }

    /// Route a key press into the control.
    ///
    /// Returns true and accepts the event if the key was consumed.
    /// Traversal keys (Tab, Escape) are never consumed, so the host can
    /// run its own focus traversal. Keys with modifiers other than Shift
    /// are also left to the host.
    pub fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        if !self.base.is_enabled() || event.key.is_traversal() {
            return false;
        }
        if event.modifiers.control || event.modifiers.alt || event.modifiers.meta {
            return false;
        }

        let handled = match event.key {
            Key::Backspace => {
                let target = self.machine.apply(&mut self.cells, CellUpdate::DeleteBackward);
                self.after_transition(target);
                true
            }
            Key::Delete => {
                let target = self.machine.apply(&mut self.cells, CellUpdate::DeleteForward);
                self.after_transition(target);
                true
            }
            Key::NumpadClear => {
                self.clear();
                true
            }
            _ => match event.text.chars().next().or_else(|| event.key.to_ascii_char()) {
                // A rejected character still consumes the key press.
                Some(ch) => {
                    self.insert_char(ch);
                    true
                }
                None => false,
            },
        };

        if handled {
            event.base.accept();
        }
        handled
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Notify the control that it gained keyboard focus.
    ///
    /// The cursor snaps to the first empty cell so entry always resumes
    /// at the leftmost gap, or stays on the last cell when the passcode
    /// is already complete. A disabled control refuses focus entirely.
    pub fn focus_gained(&mut self) {
        if !self.base.is_enabled() {
            return;
        }
        self.base.set_focused(true);
        let target = self
            .cells
            .first_empty()
            .unwrap_or_else(|| self.cells.len().saturating_sub(1));
        self.machine.set_cursor(target, &mut self.cells);
        tracing::trace!(target: targets::VIEW, cursor = target, "focus gained");
        self.focus_requested.emit(FocusTarget::Cell(target));
    }

    /// Notify the control that it lost keyboard focus.
    pub fn focus_lost(&mut self) {
        self.base.set_focused(false);
        tracing::trace!(target: targets::VIEW, "focus lost");
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn rebuild_cells(&mut self) {
        self.cells = CellRow::new(self.pattern.slot_count());
        self.machine = EditMachine::new();
        self.base.update();
        self.content_changed.emit(());
        self.sync_value_state();
    }

    fn after_transition(&mut self, target: FocusTarget) {
        self.base.update();
        self.content_changed.emit(());
        self.sync_value_state();
        self.focus_requested.emit(target);
    }

    fn sync_value_state(&mut self) {
        let blank = self.cells.is_blank();
        if blank != self.was_blank {
            self.was_blank = blank;
            self.empty_changed.emit(blank);
        }

        let value = self.cells.value();
        if value != self.last_value {
            if value.is_some() {
                tracing::debug!(target: targets::VIEW, "passcode complete");
            }
            self.last_value = value.clone();
            self.value_changed.emit(value);
        }
    }
}

impl Default for PasscodeView {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasscodeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasscodeView")
            .field("pattern", &self.pattern)
            .field("cursor", &self.machine.cursor())
            .field("is_valid", &self.is_valid())
            .field("enabled", &self.base.is_enabled())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(PasscodeView: Send, Sync);
