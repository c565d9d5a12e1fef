//! Render handles.

/// Opaque reference to a single positioned, styled run of text owned and
/// drawn by the host renderer. Widgets store handles and pass them back to
/// the host; they never interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(u64);

impl TextHandle {
    /// Mint a handle. Called by hosts; widgets only receive handles.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw handle id.
    pub fn id(&self) -> u64 {
        self.0
    }
}
