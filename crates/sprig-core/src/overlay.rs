//! The capability interface implemented by every overlay widget kind.

use crate::{
    Result,
    context::Context,
    event::{key::Key, mouse::MouseEvent},
};

/// The result of offering an input event to an overlay widget.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// Not consumed; the host should continue normal processing.
    Ignore,
    /// Consumed; propagation stops.
    Handle,
    /// Consumed, and the user committed the current selection. The caller
    /// should read the widget's selection.
    Commit,
}

impl EventOutcome {
    /// Was the event consumed in any way?
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

/// Behavior shared by all overlay widget kinds. Every entry point takes
/// the host [`Context`] so widgets hold no global state and test hosts can
/// stand in for the editor.
pub trait OverlayWidget {
    /// Re-render from scratch so the screen mirrors the widget state.
    fn draw(&mut self, ctx: &mut dyn Context) -> Result<()>;

    /// Offer a keystroke. [`EventOutcome::Commit`] is only ever produced
    /// here: mouse commits are re-routed through a synthesized Enter key.
    fn handle_key(&mut self, ctx: &mut dyn Context, key: Key) -> Result<EventOutcome>;

    /// Offer a mouse event. Never returns [`EventOutcome::Commit`].
    fn handle_mouse(&mut self, ctx: &mut dyn Context, ev: MouseEvent) -> Result<EventOutcome>;

    /// Tear down: release every render handle and stop consuming input.
    /// Idempotent; killing a down widget is a no-op.
    fn kill(&mut self, ctx: &mut dyn Context) -> Result<()>;

    /// Ask the host to repaint the current render handles without
    /// recomputing content.
    fn mark_dirty(&mut self, ctx: &mut dyn Context) -> Result<()>;
}
