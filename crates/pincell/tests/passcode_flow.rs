//! End-to-end entry flows driven entirely through key press events.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pincell::{
    CustomCharValidator, FocusTarget, InvalidCharacter, Key, KeyPressEvent, KeyboardModifiers,
    PasscodeView,
};

fn type_str(view: &mut PasscodeView, s: &str) {
    for ch in s.chars() {
        let mut event = KeyPressEvent::from_char(ch);
        view.handle_key_press(&mut event);
    }
}

fn press(view: &mut PasscodeView, key: Key) -> bool {
    let mut event = KeyPressEvent::new(key, KeyboardModifiers::NONE, "", false);
    view.handle_key_press(&mut event)
}

#[test]
fn six_digit_entry_and_correction() {
    let mut view = PasscodeView::new();

    let completions = Arc::new(Mutex::new(Vec::new()));
    let completions_clone = Arc::clone(&completions);
    view.value_changed.connect(move |value| {
        completions_clone.lock().unwrap().push(value.clone());
    });

    let focus_events = Arc::new(Mutex::new(Vec::new()));
    let focus_clone = Arc::clone(&focus_events);
    view.focus_requested.connect(move |target| {
        focus_clone.lock().unwrap().push(*target);
    });

    type_str(&mut view, "123456");
    assert_eq!(view.value().as_deref(), Some("123456"));
    assert!(view.is_valid());
    assert_eq!(
        focus_events.lock().unwrap().last(),
        Some(&FocusTarget::Advance)
    );

    // Backspace clears the last cell and steps onto cell 4.
    assert!(press(&mut view, Key::Backspace));
    assert_eq!(view.value(), None);
    assert_eq!(view.cursor(), 4);

    // Re-typing from the cursor restores the value.
    type_str(&mut view, "56");
    assert_eq!(view.value().as_deref(), Some("123456"));

    assert_eq!(
        completions.lock().unwrap().as_slice(),
        &[
            Some("123456".to_string()),
            None,
            Some("123456".to_string()),
        ]
    );
}

#[test]
fn rejected_characters_fire_once_and_change_nothing() {
    let mut view = PasscodeView::new();

    let rejections = Arc::new(Mutex::new(Vec::new()));
    let rejections_clone = Arc::clone(&rejections);
    view.invalid_character.connect(move |info| {
        rejections_clone.lock().unwrap().push(*info);
    });

    type_str(&mut view, "12a3");
    assert_eq!(view.cursor(), 3);
    assert_eq!(
        rejections.lock().unwrap().as_slice(),
        &[InvalidCharacter {
            character: Some('a'),
            index: 2
        }]
    );
}

#[test]
fn pattern_change_mid_entry_discards_content() {
    let mut view = PasscodeView::with_pattern("###-###-###").unwrap();
    type_str(&mut view, "12345");
    assert!(!view.is_empty());

    view.set_pattern("####").unwrap();
    assert!(view.is_empty());
    assert_eq!(view.cursor(), 0);
    assert_eq!(view.pattern().groups(), vec![4]);

    type_str(&mut view, "9876");
    assert_eq!(view.value().as_deref(), Some("9876"));
}

#[test]
fn clear_is_idempotent() {
    let mut view = PasscodeView::with_pattern("###").unwrap();
    type_str(&mut view, "123");

    view.clear();
    let after_once: Vec<Option<char>> = view.cells().map(|c| c.content()).collect();
    let cursor_once = view.cursor();

    view.clear();
    let after_twice: Vec<Option<char>> = view.cells().map(|c| c.content()).collect();
    assert_eq!(after_once, after_twice);
    assert_eq!(view.cursor(), cursor_once);
}

#[test]
fn only_one_cell_editable_throughout_a_session() {
    let mut view = PasscodeView::new();

    let check = |view: &PasscodeView| {
        let editable = view.cells().filter(|c| c.is_editable()).count();
        assert_eq!(editable, 1);
    };

    check(&view);
    type_str(&mut view, "12");
    check(&view);
    press(&mut view, Key::Backspace);
    check(&view);
    press(&mut view, Key::Delete);
    check(&view);
    type_str(&mut view, "3456");
    check(&view);
    view.clear();
    check(&view);
}

#[test]
fn hex_validator_normalizes_and_completes() {
    let mut view = PasscodeView::with_pattern("##-##")
        .unwrap()
        .with_character_validator(CustomCharValidator::new(|ch| {
            ch.is_ascii_hexdigit().then(|| ch.to_ascii_uppercase())
        }));

    type_str(&mut view, "deadbeef");
    // Only the first four hex digits fit; the rest overwrite the final
    // cell as the cursor parks there.
    assert_eq!(view.value().as_deref(), Some("DEAF"));
}

#[test]
fn tab_and_escape_are_left_for_the_host() {
    let mut view = PasscodeView::new();
    type_str(&mut view, "12");

    let mut tab = KeyPressEvent::new(Key::Tab, KeyboardModifiers::NONE, "\t", false);
    assert!(!view.handle_key_press(&mut tab));
    assert!(!tab.base.is_accepted());

    let mut esc = KeyPressEvent::new(Key::Escape, KeyboardModifiers::NONE, "", false);
    assert!(!view.handle_key_press(&mut esc));

    // Entry state is untouched by traversal keys.
    assert_eq!(view.cursor(), 2);
}

#[test]
fn disabled_control_passes_keys_through() {
    let mut view = PasscodeView::new();

    let toggles = Arc::new(AtomicUsize::new(0));
    let toggles_clone = Arc::clone(&toggles);
    view.enabled_changed().connect(move |_| {
        toggles_clone.fetch_add(1, Ordering::SeqCst);
    });

    type_str(&mut view, "12");
    view.set_enabled(false);
    assert_eq!(toggles.load(Ordering::SeqCst), 1);

    let mut event = KeyPressEvent::from_char('3');
    assert!(!view.handle_key_press(&mut event));
    assert!(!event.base.is_accepted());

    view.set_enabled(true);
    type_str(&mut view, "3456");
    assert_eq!(view.value().as_deref(), Some("123456"));
}

#[test]
fn focus_roundtrip_resumes_at_first_gap() {
    let mut view = PasscodeView::new();
    type_str(&mut view, "1234");
    view.focus_lost();

    view.focus_gained();
    assert!(view.has_focus());
    assert_eq!(view.cursor(), 4);

    type_str(&mut view, "56");
    assert_eq!(view.value().as_deref(), Some("123456"));
}
