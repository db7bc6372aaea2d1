//! Collaborator trait contracts for the two position views.
//!
//! The host application supplies the actual widgets; this crate only
//! depends on these traits. One contract matters more than any method
//! signature: the mutators below must NOT re-raise the corresponding
//! change notification when called externally. Only user-driven changes
//! notify, which is what makes echo suppression structural rather than
//! a runtime guard.

use crate::{
    layout::{Rect, Size},
    position::ChapterId,
};

/// Common capability of both the reciter and the reader.
pub trait PositionView {
    /// Adopts a new chapter without notifying.
    fn set_chapter(&mut self, chapter: ChapterId);

    /// Adopts a new inclusive verse range without notifying.
    ///
    /// Values arrive unvalidated; the view is responsible for clamping
    /// or rejecting out-of-range input.
    fn set_verse_range(&mut self, from: u32, to: u32);

    /// Moves the current verse without notifying.
    fn set_current_verse(&mut self, verse: u32);

    /// Currently selected verse, if any.
    fn current_verse_number(&self) -> Option<u32>;

    /// Intrinsic size of the view's content.
    fn size(&self) -> Size;

    /// Moves and resizes the view inside the container.
    fn set_bounds(&mut self, bounds: Rect);

    /// Shows or hides the view.
    fn set_visible(&mut self, visible: bool);

    /// Whether the view is currently shown.
    fn is_visible(&self) -> bool;
}

/// The audio-recitation view.
///
/// Its three selector controls duplicate what the reader already
/// displays, so they are redundant UI whenever the reader is shown.
pub trait ReciterView: PositionView {
    /// Shows or hides the chapter picker.
    fn set_chapter_selector_visible(&mut self, visible: bool);

    /// Shows or hides the verse-range picker.
    fn set_verse_range_selector_visible(&mut self, visible: bool);

    /// Shows or hides the current-verse picker.
    fn set_current_verse_selector_visible(&mut self, visible: bool);

    /// Stops playback if a recitation is running. Called on plugin
    /// deactivation; a no-op when idle.
    fn stop_if_playing(&mut self);
}

/// The textual-reading view.
pub trait ReaderView: PositionView {
    /// Visually emphasizes a verse at the existing scroll position.
    ///
    /// This is weaker than [`PositionView::set_current_verse`]: no jump,
    /// no scroll, just emphasis following the recitation.
    fn highlight_verse(&mut self, verse: u32);
}
