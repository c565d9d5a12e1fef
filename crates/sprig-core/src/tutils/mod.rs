//! Test utilities: an in-memory host that records everything widgets do.

use crate::{
    Error, Result,
    context::{Context, Frame},
    event::key::Key,
    geom::Point,
    render::TextHandle,
    style::{Style, Theme},
};

/// One recorded text placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Where the run was placed.
    pub at: Point,
    /// The resolved style it was placed with.
    pub style: Style,
    /// The exact text, including padding.
    pub text: String,
}

/// A recording [`Context`] for tests. Handles are minted sequentially;
/// placements, removals, dirty marks and fed keys are all logged so tests
/// can assert on the widget's externally visible behavior. Using a dead
/// handle is an error, which is how leak and double-free bugs surface.
pub struct TestHost {
    next: u64,
    placements: Vec<(TextHandle, Placement)>,
    /// Every handle ever removed, in removal order.
    pub removed: Vec<TextHandle>,
    /// Every dirty mark, in order.
    pub dirty: Vec<TextHandle>,
    fed: Vec<Key>,
    /// The theme handed to widgets.
    pub theme: Theme,
    /// Simulates a blocking interactive command capturing input.
    pub interactive: bool,
    /// Host frames, in registration order.
    pub frames: Vec<Frame>,
    /// The designated active frame.
    pub active: Option<Frame>,
}

impl TestHost {
    /// A host with a default theme, no frames, and nothing recorded.
    pub fn new() -> Self {
        Self {
            next: 0,
            placements: Vec::new(),
            removed: Vec::new(),
            dirty: Vec::new(),
            fed: Vec::new(),
            theme: Theme::default(),
            interactive: false,
            frames: Vec::new(),
            active: None,
        }
    }

    /// Live placements, in placement order.
    pub fn live(&self) -> Vec<&Placement> {
        self.placements.iter().map(|(_, p)| p).collect()
    }

    /// The placement behind a live handle.
    pub fn placement(&self, handle: TextHandle) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, p)| p)
    }

    /// Drain the synthetic key queue.
    pub fn take_fed(&mut self) -> Vec<Key> {
        std::mem::take(&mut self.fed)
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for TestHost {
    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn place_text(&mut self, at: Point, style: Style, text: &str) -> Result<TextHandle> {
        self.next += 1;
        let handle = TextHandle::new(self.next);
        self.placements.push((
            handle,
            Placement {
                at,
                style,
                text: text.to_string(),
            },
        ));
        Ok(handle)
    }

    fn remove_text(&mut self, handle: TextHandle) -> Result<()> {
        let idx = self
            .placements
            .iter()
            .position(|(h, _)| *h == handle)
            .ok_or_else(|| Error::StaleHandle(format!("remove of dead handle {handle:?}")))?;
        self.placements.remove(idx);
        self.removed.push(handle);
        Ok(())
    }

    fn mark_dirty(&mut self, handle: TextHandle) -> Result<()> {
        if !self.placements.iter().any(|(h, _)| *h == handle) {
            return Err(Error::StaleHandle(format!(
                "dirty mark on dead handle {handle:?}"
            )));
        }
        self.dirty.push(handle);
        Ok(())
    }

    fn interactive_active(&self) -> bool {
        self.interactive
    }

    fn feed_key(&mut self, key: Key) {
        self.fed.push(key);
    }

    fn active_frame(&self) -> Option<Frame> {
        self.active
    }

    fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
