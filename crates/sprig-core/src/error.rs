//! Error types for overlay widgets and the host services they call.

use thiserror::Error;

/// Result alias used throughout sprig.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by host services. The overlay state machines
/// themselves never originate errors; they propagate these with `?`.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The host renderer rejected a text placement.
    #[error("render")]
    Render(String),
    /// A coordinate or rectangle was out of range.
    #[error("geometry")]
    Geometry(String),
    /// A render handle was used after the host discarded it.
    #[error("stale handle")]
    StaleHandle(String),
}
