//! Kind-tagged dispatch over the overlay widget variants.

use sprig_core::{
    Context, Event, EventOutcome, OverlayWidget, Result,
    event::{key::Key, mouse::MouseEvent},
};

use crate::menu::ListMenu;

/// The widget kinds an [`Overlay`] can hold.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OverlayKind {
    /// A popup list menu.
    ListMenu,
}

/// A closed sum over the overlay widget kinds. Hosts hold an `Overlay`
/// and call the capability methods without knowing the concrete kind;
/// adding a widget kind means adding a variant arm here, not touching
/// callers.
#[derive(Debug)]
pub enum Overlay {
    /// A popup list menu.
    ListMenu(ListMenu),
}

impl Overlay {
    /// The tag for the contained widget.
    pub fn kind(&self) -> OverlayKind {
        match self {
            Self::ListMenu(_) => OverlayKind::ListMenu,
        }
    }

    fn widget_mut(&mut self) -> &mut dyn OverlayWidget {
        match self {
            Self::ListMenu(menu) => menu,
        }
    }

    /// Re-render the widget.
    pub fn draw(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.widget_mut().draw(ctx)
    }

    /// Offer a keystroke to the widget.
    pub fn handle_key(&mut self, ctx: &mut dyn Context, key: Key) -> Result<EventOutcome> {
        self.widget_mut().handle_key(ctx, key)
    }

    /// Offer a mouse event to the widget.
    pub fn handle_mouse(&mut self, ctx: &mut dyn Context, ev: MouseEvent) -> Result<EventOutcome> {
        self.widget_mut().handle_mouse(ctx, ev)
    }

    /// Tear the widget down. Idempotent.
    pub fn kill(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.widget_mut().kill(ctx)
    }

    /// Ask the host to repaint the widget's rows.
    pub fn mark_dirty(&mut self, ctx: &mut dyn Context) -> Result<()> {
        self.widget_mut().mark_dirty(ctx)
    }

    /// Route a host event to the matching handler.
    pub fn handle_event(&mut self, ctx: &mut dyn Context, event: &Event) -> Result<EventOutcome> {
        match event {
            Event::Key(key) => self.handle_key(ctx, *key),
            Event::Mouse(ev) => self.handle_mouse(ctx, *ev),
        }
    }
}

impl From<ListMenu> for Overlay {
    fn from(menu: ListMenu) -> Self {
        Self::ListMenu(menu)
    }
}
