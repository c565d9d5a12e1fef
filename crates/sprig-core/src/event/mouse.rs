//! Mouse input types.

use crossterm::event as cevent;

use crate::{event::key, geom::Point};

/// Mouse action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
    /// Mouse drag with button held.
    Drag,
    /// Mouse moved without button.
    Moved,
    /// Scroll wheel down.
    ScrollDown,
    /// Scroll wheel up.
    ScrollUp,
    /// Horizontal scroll left.
    ScrollLeft,
    /// Horizontal scroll right.
    ScrollRight,
}

impl Action {
    /// Is this a button-driven action?
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Down | Self::Up | Self::Drag)
    }
}

/// Mouse button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy)]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
    /// No button (for move/scroll).
    None,
}

impl From<cevent::MouseButton> for Button {
    fn from(b: cevent::MouseButton) -> Self {
        match b {
            cevent::MouseButton::Left => Self::Left,
            cevent::MouseButton::Right => Self::Right,
            cevent::MouseButton::Middle => Self::Middle,
        }
    }
}

/// A mouse input event: what happened, with which button, where.
#[derive(Debug, Clone, Copy)]
pub struct MouseEvent {
    /// Mouse action type.
    pub action: Action,
    /// Mouse button.
    pub button: Button,
    /// Keyboard modifiers.
    pub modifiers: key::Mods,
    /// Cursor location in screen space.
    pub location: Point,
}

impl From<cevent::MouseEvent> for MouseEvent {
    fn from(m: cevent::MouseEvent) -> Self {
        let mut button = Button::None;
        let action = match m.kind {
            cevent::MouseEventKind::Down(b) => {
                button = b.into();
                Action::Down
            }
            cevent::MouseEventKind::Up(b) => {
                button = b.into();
                Action::Up
            }
            cevent::MouseEventKind::Drag(b) => {
                button = b.into();
                Action::Drag
            }
            cevent::MouseEventKind::Moved => Action::Moved,
            cevent::MouseEventKind::ScrollDown => Action::ScrollDown,
            cevent::MouseEventKind::ScrollUp => Action::ScrollUp,
            cevent::MouseEventKind::ScrollLeft => Action::ScrollLeft,
            cevent::MouseEventKind::ScrollRight => Action::ScrollRight,
        };
        Self {
            action,
            button,
            modifiers: m.modifiers.into(),
            location: Point {
                x: m.column as u32,
                y: m.row as u32,
            },
        }
    }
}
