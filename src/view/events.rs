//! Position-change events as delivered by the host's signal layer.

use crate::position::ChapterId;

/// Which view a user-driven change originated from.
///
/// Used solely to pick the propagation target; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOrigin {
    /// The audio-recitation view.
    Reciter,
    /// The textual-reading view.
    Reader,
}

/// One user-driven change to a view's position.
///
/// Range values are routed as-is; the coordinator performs no
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionChange {
    /// A different chapter was selected.
    Chapter(ChapterId),
    /// The displayed/recited verse range changed.
    VerseRange { from: u32, to: u32 },
    /// The highlighted or recited verse moved.
    CurrentVerse(u32),
}
