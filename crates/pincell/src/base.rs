//! Common control state.
//!
//! [`ControlBase`] holds the state every control carries regardless of
//! what it edits: enabled and focus flags plus the repaint flag a host
//! polls to know when to redraw.

use pincell_core::Signal;

/// Base state shared by controls.
pub struct ControlBase {
    /// Whether the control accepts input.
    enabled: bool,

    /// Whether the control currently has keyboard focus.
    focused: bool,

    /// Whether the control needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl ControlBase {
    /// Create a new control base, enabled and unfocused.
    pub fn new() -> Self {
        Self {
            enabled: true,
            focused: false,
            needs_repaint: true,
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the control is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the control is enabled.
    ///
    /// This will emit `enabled_changed` if the state actually changed.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Focus State
    // =========================================================================

    /// Check if the control currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state (used by the host's focus management).
    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the control needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the control.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Return the repaint flag and clear it (called after painting).
    pub fn take_repaint_flag(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }
}

impl Default for ControlBase {
    fn default() -> Self {
        Self::new()
    }
}
