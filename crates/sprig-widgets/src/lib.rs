//! Overlay widgets for the sprig library.
//!
//! The only widget kind today is the [`ListMenu`] popup; [`Overlay`] is
//! the kind-tagged dispatch layer hosts route events through.

mod base;
mod menu;
mod overlay;
mod palette;

pub use base::OverlayBase;
pub use menu::ListMenu;
pub use overlay::{Overlay, OverlayKind};
pub use palette::MenuStyles;
