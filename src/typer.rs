//! Literal string typing.
//!
//! Some gestures resolve to a literal string rather than a key that stays
//! held down.  This turns each character into a press/release pair, shifted
//! where the character demands it.  Characters with no keycode on a US
//! layout are skipped.

use crate::{ActionQueue, KeyAction, Keyboard, Mods};

/// Type a literal string as individual keypresses.
pub fn type_str(text: &str, actions: &mut dyn ActionQueue) {
    for ch in text.chars() {
        if let Some((code, shifted)) = keycode_for(ch) {
            let mods = if shifted { Mods::SHIFT } else { Mods::empty() };
            actions.push(KeyAction::KeyPress(code, mods));
            actions.push(KeyAction::KeyRelease(code));
        }
    }
}

/// Map one character to its keycode and shift state.
fn keycode_for(ch: char) -> Option<(Keyboard, bool)> {
    let entry = match ch {
        'a'..='z' => (key(Keyboard::A, ch as u8 - b'a'), false),
        'A'..='Z' => (key(Keyboard::A, ch as u8 - b'A'), true),
        '1'..='9' => (key(Keyboard::Keyboard1, ch as u8 - b'1'), false),
        '0' => (Keyboard::Keyboard0, false),
        '!' => (Keyboard::Keyboard1, true),
        '@' => (Keyboard::Keyboard2, true),
        '#' => (Keyboard::Keyboard3, true),
        '$' => (Keyboard::Keyboard4, true),
        '%' => (Keyboard::Keyboard5, true),
        '^' => (Keyboard::Keyboard6, true),
        '&' => (Keyboard::Keyboard7, true),
        '*' => (Keyboard::Keyboard8, true),
        '(' => (Keyboard::Keyboard9, true),
        ')' => (Keyboard::Keyboard0, true),
        '\n' => (Keyboard::ReturnEnter, false),
        '\t' => (Keyboard::Tab, false),
        ' ' => (Keyboard::Space, false),
        '-' => (Keyboard::Minus, false),
        '_' => (Keyboard::Minus, true),
        '=' => (Keyboard::Equal, false),
        '+' => (Keyboard::Equal, true),
        '[' => (Keyboard::LeftBrace, false),
        '{' => (Keyboard::LeftBrace, true),
        ']' => (Keyboard::RightBrace, false),
        '}' => (Keyboard::RightBrace, true),
        '\\' => (Keyboard::Backslash, false),
        '|' => (Keyboard::Backslash, true),
        ';' => (Keyboard::Semicolon, false),
        ':' => (Keyboard::Semicolon, true),
        '\'' => (Keyboard::Apostrophe, false),
        '"' => (Keyboard::Apostrophe, true),
        '`' => (Keyboard::Grave, false),
        '~' => (Keyboard::Grave, true),
        ',' => (Keyboard::Comma, false),
        '<' => (Keyboard::Comma, true),
        '.' => (Keyboard::Dot, false),
        '>' => (Keyboard::Dot, true),
        '/' => (Keyboard::ForwardSlash, false),
        '?' => (Keyboard::ForwardSlash, true),
        _ => return None,
    };
    Some(entry)
}

/// Offset from a base keycode.  The letter and digit pages are contiguous.
fn key(base: Keyboard, offset: u8) -> Keyboard {
    (base as u8 + offset).into()
}
