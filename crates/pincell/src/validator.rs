//! Per-character input validation.
//!
//! Every character typed into a passcode cell passes through a
//! [`CharValidator`] before it is accepted. The validator either rejects
//! the character or maps it to the character actually stored, which lets
//! a validator normalize input (for example uppercasing hex digits).
//!
//! When no validator is attached, the control falls back to a plain
//! allow-list of characters ([`AllowedCharacters`]); the default accepts
//! the decimal digits.
//!
//! # Example
//!
//! ```ignore
//! use pincell::{PasscodeView, validator::CustomCharValidator};
//!
//! let mut view = PasscodeView::new();
//! view.set_character_validator(CustomCharValidator::new(|ch| {
//!     ch.is_ascii_hexdigit().then(|| ch.to_ascii_uppercase())
//! }));
//! ```

use std::fmt;
use std::sync::Arc;

/// Trait for per-character validators.
///
/// # Thread Safety
///
/// Validators must be `Send + Sync` to work with the signal system.
pub trait CharValidator: Send + Sync {
    /// Validate a single typed character.
    ///
    /// Returns `Some(stored)` to accept the character, where `stored` is
    /// the character to write into the cell (usually `ch` itself, but a
    /// validator may substitute a normalized form). Returns `None` to
    /// reject the character.
    fn validate(&self, ch: char) -> Option<char>;
}

// Allow using Arc<dyn CharValidator> as a CharValidator
impl<V: CharValidator + ?Sized> CharValidator for Arc<V> {
    fn validate(&self, ch: char) -> Option<char> {
        (**self).validate(ch)
    }
}

// Allow using Box<dyn CharValidator> as a CharValidator
impl<V: CharValidator + ?Sized> CharValidator for Box<V> {
    fn validate(&self, ch: char) -> Option<char> {
        (**self).validate(ch)
    }
}

// =========================================================================
// AllowedCharacters
// =========================================================================

/// Fallback allow-list validator.
///
/// Accepts exactly the characters in its set, unchanged. This is the
/// validation a control performs when no [`CharValidator`] is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedCharacters {
    characters: String,
}

impl AllowedCharacters {
    /// The default allow-list: the ASCII decimal digits.
    pub const DIGITS: &'static str = "0123456789";

    /// Create an allow-list accepting exactly the characters of `characters`.
    pub fn new(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
        }
    }

    /// The characters this allow-list accepts.
    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// True if `ch` is in the allow-list.
    pub fn contains(&self, ch: char) -> bool {
        self.characters.contains(ch)
    }
}

impl Default for AllowedCharacters {
    fn default() -> Self {
        Self::new(Self::DIGITS)
    }
}

impl CharValidator for AllowedCharacters {
    fn validate(&self, ch: char) -> Option<char> {
        self.contains(ch).then_some(ch)
    }
}

// =========================================================================
// CustomCharValidator
// =========================================================================

/// A character validator that uses a closure.
///
/// This allows creating validators without implementing the trait manually.
///
/// # Example
///
/// ```ignore
/// use pincell::validator::{CharValidator, CustomCharValidator};
///
/// // Accept only even digits.
/// let validator = CustomCharValidator::new(|ch| {
///     matches!(ch, '0' | '2' | '4' | '6' | '8').then_some(ch)
/// });
/// assert_eq!(validator.validate('4'), Some('4'));
/// assert_eq!(validator.validate('5'), None);
/// ```
pub struct CustomCharValidator<F>
where
    F: Fn(char) -> Option<char> + Send + Sync,
{
    validate_fn: F,
}

impl<F> CustomCharValidator<F>
where
    F: Fn(char) -> Option<char> + Send + Sync,
{
    /// Create a new custom validator with the given validation function.
    pub fn new(validate_fn: F) -> Self {
        Self { validate_fn }
    }
}

impl<F> CharValidator for CustomCharValidator<F>
where
    F: Fn(char) -> Option<char> + Send + Sync,
{
    fn validate(&self, ch: char) -> Option<char> {
        (self.validate_fn)(ch)
    }
}

impl<F> fmt::Debug for CustomCharValidator<F>
where
    F: Fn(char) -> Option<char> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCharValidator").finish()
    }
}
