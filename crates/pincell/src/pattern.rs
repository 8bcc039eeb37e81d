//! Cell layout patterns.
//!
//! A pattern string describes the geometry of a passcode control: `#`
//! marks an editable cell slot and `-` marks a visual separator between
//! groups of cells. The default pattern `###-###` lays out two groups
//! of three cells with a single separator between them.

use crate::error::{PatternError, Result};

/// Character marking an editable cell slot within a pattern.
pub const SLOT: char = '#';

/// Character marking a group separator within a pattern.
pub const SEPARATOR: char = '-';

/// The pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "###-###";

// ============================================================================
// Pattern elements
// ============================================================================

/// A single element of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternElement {
    /// An editable cell slot, carrying its slot index (dense, zero-based,
    /// counting slots only).
    Slot(usize),
    /// A visual separator between cell groups.
    Separator,
}

impl PatternElement {
    /// Returns true if this element is an editable slot.
    pub fn is_slot(self) -> bool {
        matches!(self, PatternElement::Slot(_))
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// A parsed, validated cell layout pattern.
///
/// Construction validates the source string; a `Pattern` value always
/// describes at least one cell slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    template: String,
    elements: Vec<PatternElement>,
    slot_count: usize,
}

impl Pattern {
    /// Parses a pattern string.
    ///
    /// Returns an error if the string is empty, contains a character
    /// other than [`SLOT`] or [`SEPARATOR`], or contains no slots.
    pub fn parse(template: &str) -> Result<Self> {
        if template.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let mut elements = Vec::with_capacity(template.len());
        let mut slot_count = 0;
        for (position, symbol) in template.chars().enumerate() {
            match symbol {
                SLOT => {
                    elements.push(PatternElement::Slot(slot_count));
                    slot_count += 1;
                }
                SEPARATOR => elements.push(PatternElement::Separator),
                _ => return Err(PatternError::InvalidPatternSymbol { symbol, position }),
            }
        }

        if slot_count == 0 {
            return Err(PatternError::NoSlots);
        }

        Ok(Self {
            template: template.to_string(),
            elements,
            slot_count,
        })
    }

    /// The source string this pattern was parsed from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The parsed elements in layout order.
    pub fn elements(&self) -> &[PatternElement] {
        &self.elements
    }

    /// The number of editable cell slots.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// The sizes of consecutive slot groups, split at separators.
    ///
    /// `###-###` yields `[3, 3]`. Runs of separators do not produce
    /// empty groups.
    pub fn groups(&self) -> Vec<usize> {
        let mut groups = Vec::new();
        let mut run = 0;
        for element in &self.elements {
            match element {
                PatternElement::Slot(_) => run += 1,
                PatternElement::Separator => {
                    if run > 0 {
                        groups.push(run);
                        run = 0;
                    }
                }
            }
        }
        if run > 0 {
            groups.push(run);
        }
        groups
    }
}

impl Default for Pattern {
    fn default() -> Self {
        // DEFAULT_PATTERN is a valid literal.
        Self::parse(DEFAULT_PATTERN).unwrap_or_else(|_| unreachable!())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.template)
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
