//! Drives a passcode control from lines typed on stdin.
//!
//! Type characters to fill cells, `<` for backspace, `!` to clear.

use std::io::{self, BufRead, Write};

use pincell::{Key, KeyPressEvent, KeyboardModifiers, PasscodeView};

fn render(view: &PasscodeView) -> String {
    use pincell::PatternElement;

    let mut out = String::new();
    let contents: Vec<Option<char>> = view.cells().map(|c| c.content()).collect();
    for element in view.pattern().elements() {
        match element {
            PatternElement::Slot(i) => {
                out.push('[');
                out.push(contents[*i].unwrap_or(' '));
                out.push(']');
            }
            PatternElement::Separator => out.push('-'),
        }
    }
    out
}

fn main() -> io::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut view = PasscodeView::new();
    view.value_changed.connect(|value| match value {
        Some(code) => println!("  -> passcode complete: {code}"),
        None => println!("  -> passcode incomplete again"),
    });
    view.invalid_character.connect(|info| {
        println!("  -> rejected {:?} at cell {}", info.character, info.index);
    });

    println!("pattern: {}", view.pattern());
    println!("{}", render(&view));
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for ch in line?.chars() {
            let mut event = match ch {
                '<' => KeyPressEvent::new(Key::Backspace, KeyboardModifiers::NONE, "", false),
                '!' => KeyPressEvent::new(Key::NumpadClear, KeyboardModifiers::NONE, "", false),
                _ => KeyPressEvent::from_char(ch),
            };
            view.handle_key_press(&mut event);
        }
        println!("{}", render(&view));
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
