//! Keyboard input types.

use std::ops::Add;

use crossterm::event as cevent;

/// Keyboard modifier state.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Mods {
    /// Shift held.
    pub shift: bool,
    /// Control held.
    pub ctrl: bool,
    /// Alt held.
    pub alt: bool,
}

/// No modifiers.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift alone.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control alone.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt alone.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

impl Add for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, other: KeyCode) -> Key {
        Key {
            mods: self,
            code: other,
        }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Key {
        self + KeyCode::Char(other)
    }
}

impl From<cevent::KeyModifiers> for Mods {
    fn from(m: cevent::KeyModifiers) -> Self {
        Self {
            shift: m.contains(cevent::KeyModifiers::SHIFT),
            ctrl: m.contains(cevent::KeyModifiers::CONTROL),
            alt: m.contains(cevent::KeyModifiers::ALT),
        }
    }
}

/// A key code, without modifier state.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace.
    Backspace,
    /// Enter / return.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab.
    Tab,
    /// Shift + Tab.
    BackTab,
    /// Delete.
    Delete,
    /// Insert.
    Insert,
    /// F key; `F(1)` is F1.
    F(u8),
    /// A printable character.
    Char(char),
    /// The NUL key.
    Null,
    /// Escape.
    Esc,
}

impl KeyCode {
    fn upper(&self) -> Self {
        if let Self::Char(c) = self {
            Self::Char(c.to_ascii_uppercase())
        } else {
            *self
        }
    }
}

/// A keystroke: a key code plus the modifier state it arrived with.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// The key itself.
    pub code: KeyCode,
}

impl Key {
    /// A keystroke with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self { mods: Empty, code }
    }
}

/// Compare a keystroke against a bare key code. Shift is folded into the
/// character for printable keys, so `Shift + 'c'` matches `Char('C')`;
/// any other modifier fails the match.
impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        if self.mods != Empty && self.mods != Shift {
            return false;
        }
        let code = if self.mods == Shift {
            self.code.upper()
        } else {
            self.code
        };
        *c == code
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

/// Translate a crossterm key code, dropping keys the overlay layer does
/// not model (lock keys, media keys, bare modifier presses).
pub(crate) fn translate_code(code: cevent::KeyCode) -> Option<KeyCode> {
    Some(match code {
        cevent::KeyCode::Backspace => KeyCode::Backspace,
        cevent::KeyCode::Enter => KeyCode::Enter,
        cevent::KeyCode::Left => KeyCode::Left,
        cevent::KeyCode::Right => KeyCode::Right,
        cevent::KeyCode::Up => KeyCode::Up,
        cevent::KeyCode::Down => KeyCode::Down,
        cevent::KeyCode::Home => KeyCode::Home,
        cevent::KeyCode::End => KeyCode::End,
        cevent::KeyCode::PageUp => KeyCode::PageUp,
        cevent::KeyCode::PageDown => KeyCode::PageDown,
        cevent::KeyCode::Tab => KeyCode::Tab,
        cevent::KeyCode::BackTab => KeyCode::BackTab,
        cevent::KeyCode::Delete => KeyCode::Delete,
        cevent::KeyCode::Insert => KeyCode::Insert,
        cevent::KeyCode::F(x) => KeyCode::F(x),
        cevent::KeyCode::Char(c) => KeyCode::Char(c),
        cevent::KeyCode::Null => KeyCode::Null,
        cevent::KeyCode::Esc => KeyCode::Esc,
        _ => return None,
    })
}

impl TryFrom<cevent::KeyEvent> for Key {
    type Error = ();

    fn try_from(k: cevent::KeyEvent) -> std::result::Result<Self, ()> {
        Ok(Self {
            mods: k.modifiers.into(),
            code: translate_code(k.code).ok_or(())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_eq() {
        assert_eq!(Shift + 'c', Key { mods: Shift, code: KeyCode::Char('c') });
        assert!(Shift + 'c' == KeyCode::Char('C'));
        assert!(Key::from('c') == 'c');
        assert!(Key::from('c') != 'C');
        assert!(Ctrl + 'c' != KeyCode::Char('c'));
        assert!(Key::new(KeyCode::Enter) == KeyCode::Enter);
        assert!(Shift + KeyCode::Tab != KeyCode::Tab);
    }

    #[test]
    fn mods_compose() {
        assert_eq!(
            Shift + Alt,
            Mods {
                shift: true,
                ctrl: false,
                alt: true
            }
        );
    }

    #[test]
    fn crossterm_keys() {
        let ev = cevent::KeyEvent::new(cevent::KeyCode::Enter, cevent::KeyModifiers::NONE);
        assert_eq!(Key::try_from(ev), Ok(Key::new(KeyCode::Enter)));
        let ev = cevent::KeyEvent::new(cevent::KeyCode::CapsLock, cevent::KeyModifiers::NONE);
        assert!(Key::try_from(ev).is_err());
    }
}
