//! Key mapping from terminal events to game actions.
//!
//! Letter keys are case-insensitive. Three layouts are bound at once: arrows,
//! vi keys (`h j k l`) and `w a s d`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::Command;
use crate::types::GameAction;

/// Letter bindings, matched after lowercasing.
const LETTER_BINDINGS: [(char, GameAction); 9] = [
    ('h', GameAction::MoveLeft),
    ('a', GameAction::MoveLeft),
    ('l', GameAction::MoveRight),
    ('d', GameAction::MoveRight),
    ('j', GameAction::SoftDrop),
    ('s', GameAction::SoftDrop),
    ('k', GameAction::Rotate),
    ('w', GameAction::Rotate),
    // Reset is only honored after game over.
    ('r', GameAction::Reset),
];

/// Map a key press to the game action it is bound to.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let c = c.to_ascii_lowercase();
            LETTER_BINDINGS
                .iter()
                .find(|(bound, _)| *bound == c)
                .map(|(_, action)| *action)
        }
        _ => None,
    }
}

/// `q`, `Esc` and `Ctrl-C` end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            c.eq_ignore_ascii_case(&'c')
        }
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}

/// Map a key press to a scheduler command. Unbound keys yield `None`.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    handle_key_event(key).map(Command::Action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn arrows_and_letters_share_actions() {
        let cases = [
            (KeyCode::Left, 'h', 'A', GameAction::MoveLeft),
            (KeyCode::Right, 'L', 'd', GameAction::MoveRight),
            (KeyCode::Down, 'j', 'S', GameAction::SoftDrop),
            (KeyCode::Up, 'K', 'w', GameAction::Rotate),
        ];
        for (arrow, vi, wasd, action) in cases {
            assert_eq!(handle_key_event(press(arrow)), Some(action));
            assert_eq!(handle_key_event(press(KeyCode::Char(vi))), Some(action));
            assert_eq!(handle_key_event(press(KeyCode::Char(wasd))), Some(action));
        }
    }

    #[test]
    fn unbound_keys_are_ignored() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Char('z'),
            KeyCode::Char('p'),
            KeyCode::Enter,
            KeyCode::Tab,
        ] {
            assert_eq!(key_to_command(press(code)), None, "{:?}", code);
        }
    }

    #[test]
    fn control_chords_do_not_move() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_a), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(press(KeyCode::Char('q'))));
        assert!(should_quit(press(KeyCode::Char('Q'))));
        assert!(should_quit(press(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(press(KeyCode::Char('c'))));
        assert_eq!(key_to_command(press(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn reset_key() {
        assert_eq!(
            key_to_command(press(KeyCode::Char('R'))),
            Some(Command::Action(GameAction::Reset))
        );
    }
}
