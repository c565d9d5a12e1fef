//! The host context: every service an overlay widget needs from the
//! editor, gathered behind one trait object and passed into handlers.

use crate::{
    Result,
    event::key::Key,
    geom::{Point, Rect},
    render::TextHandle,
    style::{Style, Theme},
};

/// Identifies one host editing viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// A rectangular editing viewport managed by the host. Frames are kept in
/// registration order; the host additionally designates one as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Host identifier for the frame.
    pub id: FrameId,
    /// The frame's on-screen footprint.
    pub area: Rect,
}

/// Host services available to overlay widgets. Implemented by the editor
/// for production and by [`crate::tutils::TestHost`] in tests.
pub trait Context {
    /// The active theme.
    fn theme(&self) -> &Theme;

    /// Place one positioned, styled run of text above all frames.
    fn place_text(&mut self, at: Point, style: Style, text: &str) -> Result<TextHandle>;

    /// Remove a previously placed run. The handle is dead afterwards.
    fn remove_text(&mut self, handle: TextHandle) -> Result<()>;

    /// Ask the renderer to repaint a run on its next sweep.
    fn mark_dirty(&mut self, handle: TextHandle) -> Result<()>;

    /// Is a blocking interactive command currently capturing input?
    /// Widgets refuse key input while this holds.
    fn interactive_active(&self) -> bool;

    /// Queue a synthetic keystroke for re-dispatch after the current
    /// event. This is an outbound queue the host drains, not a recursive
    /// dispatch.
    fn feed_key(&mut self, key: Key);

    /// The frame that currently has input focus, if any.
    fn active_frame(&self) -> Option<Frame>;

    /// All frames, in registration order.
    fn frames(&self) -> &[Frame];
}

/// The topmost frame containing `at`: the active frame is checked first,
/// then the remaining frames in reverse registration order. Pure query;
/// used by overlay callers to decide placement.
pub fn frame_at(ctx: &dyn Context, at: Point) -> Option<Frame> {
    if let Some(f) = ctx.active_frame()
        && f.area.contains(at)
    {
        return Some(f);
    }
    ctx.frames().iter().rev().find(|f| f.area.contains(at)).copied()
}
