// src/tui/keys.rs - Key names to menu actions.
//
// Named keys are lowercase: `up`, `down`, `left`, `right`, `enter`, `esc`,
// `tab`, `backspace`, `space`, `home`, `end`, `pageup`, `pagedown`. Any other
// single character is taken literally, so `q` and `Q` are different keys.
// `ctrl-` and `alt-` prefixes add modifiers (`ctrl-c`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::infra::config::KeysConfig;
use crate::infra::errors::BrightsideError;

use super::state::MenuKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn parse(name: &str) -> Result<Self, BrightsideError> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = name.trim();

        loop {
            if let Some(r) = rest.strip_prefix("ctrl-") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt-") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => {
                        return Err(BrightsideError::Config(format!(
                            "unknown key name '{name}'"
                        )))
                    }
                }
            }
        };

        Ok(Self { code, modifiers })
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        let mut modifiers = event.modifiers;
        // Shift is already folded into the character itself.
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        self.code == event.code && self.modifiers == modifiers
    }
}

/// Resolved `[dashboard.keys]` table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyChord, MenuKey)>,
}

impl KeyBindings {
    pub fn from_config(keys: &KeysConfig) -> Result<Self, BrightsideError> {
        let groups = [
            (&keys.up, MenuKey::Up),
            (&keys.down, MenuKey::Down),
            (&keys.select, MenuKey::Select),
            (&keys.quit, MenuKey::Quit),
        ];

        let mut bindings = Vec::new();
        for (names, action) in groups {
            for name in names {
                bindings.push((KeyChord::parse(name)?, action));
            }
        }
        Ok(Self { bindings })
    }

    /// First binding wins when a chord is listed under two actions, in the
    /// order up, down, select, quit.
    pub fn resolve(&self, event: &KeyEvent) -> MenuKey {
        self.bindings
            .iter()
            .find(|(chord, _)| chord.matches(event))
            .map(|(_, action)| *action)
            .unwrap_or(MenuKey::Other)
    }
}
