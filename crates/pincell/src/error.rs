//! Error types for the passcode control.

/// Errors produced while parsing a cell pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The pattern string contained no characters at all.
    #[error("passcode pattern is empty")]
    EmptyPattern,

    /// The pattern contained a character other than `#` or `-`.
    #[error("invalid pattern symbol {symbol:?} at position {position}")]
    InvalidPatternSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based character offset within the pattern string.
        position: usize,
    },

    /// The pattern contained separators but no cell slots.
    #[error("passcode pattern contains no cell slots")]
    NoSlots,
}

/// Convenience result alias for pattern operations.
pub type Result<T> = std::result::Result<T, PatternError>;
