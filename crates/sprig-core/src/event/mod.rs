//! Input events delivered to overlay widgets by the host.

pub mod key;
pub mod mouse;

use crossterm::event as cevent;

/// The event classes the overlay layer reacts to.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A keystroke.
    Key(key::Key),
    /// A mouse action.
    Mouse(mouse::MouseEvent),
}

impl Event {
    /// Translate a crossterm event. Returns `None` for event kinds the
    /// overlay layer does not model (resize, focus changes, paste, key
    /// releases, lock/media keys).
    pub fn from_crossterm(e: cevent::Event) -> Option<Self> {
        match e {
            cevent::Event::Key(k) => {
                if k.kind == cevent::KeyEventKind::Release {
                    return None;
                }
                match key::Key::try_from(k) {
                    Ok(key) => Some(Self::Key(key)),
                    Err(()) => {
                        tracing::trace!(?k, "dropping unmodeled key");
                        None
                    }
                }
            }
            cevent::Event::Mouse(m) => Some(Self::Mouse(m.into())),
            _ => None,
        }
    }
}
