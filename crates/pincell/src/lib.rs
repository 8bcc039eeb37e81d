//! pincell - a passcode entry control.
//!
//! A renderer-agnostic "enter your code" widget: a row of character
//! cells laid out by a pattern string (`###-###` by default), filled
//! strictly left to right. Typed characters pass through a validator or
//! an allow-list, deletions step the cursor back, and completing the
//! last cell hands focus back to the host.
//!
//! # Example
//!
//! ```
//! use pincell::{KeyPressEvent, PasscodeView};
//!
//! let mut view = PasscodeView::new();
//! view.value_changed.connect(|value| {
//!     if let Some(code) = value {
//!         println!("passcode complete: {code}");
//!     }
//! });
//!
//! for ch in "123456".chars() {
//!     let mut event = KeyPressEvent::from_char(ch);
//!     view.handle_key_press(&mut event);
//! }
//! assert_eq!(view.value().as_deref(), Some("123456"));
//! ```

pub mod base;
pub mod cell;
pub mod error;
pub mod events;
pub mod machine;
pub mod pattern;
pub mod validator;
pub mod view;

pub use pincell_core::{ConnectionGuard, ConnectionId, Signal};

pub use base::ControlBase;
pub use cell::{Cell, CellRow};
pub use error::{PatternError, Result};
pub use events::{EventBase, Key, KeyPressEvent, KeyboardModifiers};
pub use machine::{CellUpdate, EditMachine, FocusTarget};
pub use pattern::{Pattern, PatternElement};
pub use validator::{AllowedCharacters, CharValidator, CustomCharValidator};
pub use view::{InvalidCharacter, PasscodeView};
