use core_events::{ControlKey, Direction, KeyInput};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKeyEventKind,
    KeyModifiers as CKeyModifiers,
};

/// Map a crossterm key event into the editor key vocabulary.
///
/// Returns `None` for releases and for key codes the editor has no meaning
/// for (function keys, media keys, Home/End, ...). Ctrl-Q is the immediate
/// quit key and Ctrl-C the cancel key; any other Ctrl chord becomes a control
/// rune, which the dispatcher discards.
pub(crate) fn map_key_event(event: &CKeyEvent) -> Option<KeyInput> {
    if matches!(event.kind, CKeyEventKind::Release) {
        return None;
    }
    let ctrl = event.modifiers.contains(CKeyModifiers::CONTROL);
    let key = match event.code {
        CKeyCode::Char(c) if ctrl => map_ctrl_char(c),
        CKeyCode::Char(c) => KeyInput::rune(c),
        CKeyCode::Enter => ControlKey::Enter.into(),
        CKeyCode::Esc => ControlKey::Esc.into(),
        CKeyCode::Backspace => ControlKey::Backspace.into(),
        CKeyCode::Tab => KeyInput::Rune {
            ch: '\t',
            control: true,
        },
        CKeyCode::Up => Direction::Up.into(),
        CKeyCode::Down => Direction::Down.into(),
        CKeyCode::Left => Direction::Left.into(),
        CKeyCode::Right => Direction::Right.into(),
        _ => return None,
    };
    Some(key)
}

fn map_ctrl_char(c: char) -> KeyInput {
    match c.to_ascii_lowercase() {
        'q' => ControlKey::Quit.into(),
        'c' => ControlKey::Cancel.into(),
        lower if lower.is_ascii_lowercase() => KeyInput::Rune {
            // Ctrl-A..Ctrl-Z map onto C0 codes 0x01..0x1a.
            ch: char::from(lower as u8 & 0x1f),
            control: true,
        },
        other => KeyInput::Rune {
            ch: other,
            control: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState as CKeyEventState;

    fn key_event(code: CKeyCode, modifiers: CKeyModifiers, kind: CKeyEventKind) -> CKeyEvent {
        CKeyEvent {
            code,
            modifiers,
            kind,
            state: CKeyEventState::empty(),
        }
    }

    fn press(code: CKeyCode, modifiers: CKeyModifiers) -> Option<KeyInput> {
        map_key_event(&key_event(code, modifiers, CKeyEventKind::Press))
    }

    #[test]
    fn maps_basic_char() {
        assert_eq!(
            press(CKeyCode::Char('a'), CKeyModifiers::NONE),
            Some(KeyInput::Rune {
                ch: 'a',
                control: false
            })
        );
    }

    #[test]
    fn shifted_char_stays_literal() {
        assert_eq!(
            press(CKeyCode::Char('O'), CKeyModifiers::SHIFT),
            Some(KeyInput::rune('O'))
        );
    }

    #[test]
    fn maps_named_keys() {
        assert_eq!(
            press(CKeyCode::Enter, CKeyModifiers::NONE),
            Some(KeyInput::Control(ControlKey::Enter))
        );
        assert_eq!(
            press(CKeyCode::Left, CKeyModifiers::NONE),
            Some(KeyInput::Directional(Direction::Left))
        );
    }

    #[test]
    fn ctrl_q_and_ctrl_c() {
        assert_eq!(
            press(CKeyCode::Char('q'), CKeyModifiers::CONTROL),
            Some(KeyInput::Control(ControlKey::Quit))
        );
        assert_eq!(
            press(CKeyCode::Char('c'), CKeyModifiers::CONTROL),
            Some(KeyInput::Control(ControlKey::Cancel))
        );
    }

    #[test]
    fn other_ctrl_chords_become_control_runes() {
        assert_eq!(
            press(CKeyCode::Char('a'), CKeyModifiers::CONTROL),
            Some(KeyInput::Rune {
                ch: '\u{1}',
                control: true
            })
        );
        let tab = press(CKeyCode::Tab, CKeyModifiers::NONE).expect("tab maps");
        assert_eq!(tab.literal(), None);
    }

    #[test]
    fn repeat_is_accepted_release_is_not() {
        let repeat = key_event(
            CKeyCode::Char('j'),
            CKeyModifiers::NONE,
            CKeyEventKind::Repeat,
        );
        assert_eq!(map_key_event(&repeat), Some(KeyInput::rune('j')));
        let release = key_event(
            CKeyCode::Char('j'),
            CKeyModifiers::NONE,
            CKeyEventKind::Release,
        );
        assert_eq!(map_key_event(&release), None);
    }

    #[test]
    fn unsupported_keys_return_none() {
        assert!(press(CKeyCode::CapsLock, CKeyModifiers::NONE).is_none());
        assert!(press(CKeyCode::F(5), CKeyModifiers::NONE).is_none());
    }
}
