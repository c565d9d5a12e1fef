//! State common to every overlay widget kind.

use sprig_core::{Point, TextHandle};

/// The fields every overlay kind owns by composition: a fixed screen
/// anchor, a liveness flag, and the render handles for the rows currently
/// on screen.
///
/// Invariant: `handles` is empty whenever the overlay is down, and
/// otherwise mirrors the rendered rows exactly, in row order.
#[derive(Debug, Default)]
pub struct OverlayBase {
    anchor: Point,
    up: bool,
    handles: Vec<TextHandle>,
}

impl OverlayBase {
    /// A down overlay anchored at `anchor` (column, row of the overlay's
    /// top-left corner).
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            up: false,
            handles: Vec::new(),
        }
    }

    /// The overlay's fixed screen origin.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Is the overlay live and consuming input?
    pub fn is_up(&self) -> bool {
        self.up
    }

    /// Flip the liveness flag.
    pub fn set_up(&mut self, up: bool) {
        self.up = up;
    }

    /// The render handles for the rows currently on screen, in row order.
    pub fn handles(&self) -> &[TextHandle] {
        &self.handles
    }

    /// Append a handle for a newly placed row.
    pub fn push(&mut self, handle: TextHandle) {
        self.handles.push(handle);
    }

    /// Take ownership of every handle, leaving none behind. Teardown and
    /// redraw paths use this so stale handles can never be reused.
    pub fn take_handles(&mut self) -> Vec<TextHandle> {
        std::mem::take(&mut self.handles)
    }
}
