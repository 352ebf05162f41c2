//! Key naming for terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Case-fold a key identifier.
pub fn normalize(key: &str) -> String {
    key.to_lowercase()
}

/// Map a terminal key event to a normalized key identifier.
///
/// Characters are lower-cased, named keys use lowercase names and
/// Ctrl-modified characters become `ctrl+<c>`. Releases and unmapped keys
/// yield `None`.
pub fn key_name(key: KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            format!("ctrl+{}", c.to_lowercase())
        }
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_char_keys_are_lowercased() {
        assert_eq!(key_name(KeyEvent::from(KeyCode::Char('a'))), Some("a".into()));
        assert_eq!(key_name(KeyEvent::from(KeyCode::Char('W'))), Some("w".into()));
        assert_eq!(key_name(KeyEvent::from(KeyCode::Char('7'))), Some("7".into()));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_name(KeyEvent::from(KeyCode::Up)), Some("up".into()));
        assert_eq!(key_name(KeyEvent::from(KeyCode::Left)), Some("left".into()));
        assert_eq!(key_name(KeyEvent::from(KeyCode::Esc)), Some("esc".into()));
        assert_eq!(
            key_name(KeyEvent::from(KeyCode::Char(' '))),
            Some("space".into())
        );
        assert_eq!(key_name(KeyEvent::from(KeyCode::F(5))), None);
    }

    #[test]
    fn test_ctrl_chords() {
        assert_eq!(
            key_name(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some("ctrl+c".into())
        );
        assert_eq!(
            key_name(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL)),
            Some("ctrl+c".into())
        );
    }

    #[test]
    fn test_release_is_ignored_repeat_is_kept() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert_eq!(key_name(release), None);
        assert_eq!(key_name(repeat), Some("a".into()));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("A"), "a");
        assert_eq!(normalize("Ctrl+C"), "ctrl+c");
    }
}
