//! Core types and host interfaces for the sprig overlay library.
//!
//! Overlay widgets are small floating UI elements layered over a modal
//! editor's frames. This crate holds everything a widget implementation
//! needs that is not widget-specific: input event types and their
//! crossterm translation, screen geometry, the style model, the host
//! [`Context`] trait, and the [`OverlayWidget`] capability interface.

// Core modules
pub mod context;
pub mod error;
pub mod event;
pub mod geom;
pub mod overlay;
pub mod render;
pub mod style;
pub mod tutils;

// Public exports
pub use context::{Context, Frame, FrameId, frame_at};
pub use error::{Error, Result};
pub use event::Event;
pub use geom::{Point, Rect};
pub use overlay::{EventOutcome, OverlayWidget};
pub use render::TextHandle;
