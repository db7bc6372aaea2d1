//! Cross-view position synchronization.
//!
//! The coordinator is a pure router: it holds no position of its own
//! and keeps no state between events. Each user-driven change arrives
//! tagged with its origin view and is applied to the other view through
//! mutators that never self-notify, so a propagated change can never
//! bounce back to its origin.

use std::sync::Weak;

use {
    parking_lot::RwLock,
    tracing::{debug, trace},
};

use crate::{
    bookmarks::Bookmark,
    view::{
        PositionChange,
        ViewOrigin::{self, Reader, Reciter},
        traits::{PositionView, ReaderView, ReciterView},
    },
};

/// Routes position changes between the reciter and the reader.
///
/// Holds only non-owning references; an absent collaborator (not yet
/// constructed, or already torn down) turns the corresponding
/// propagation step into a silent no-op.
pub struct SyncCoordinator {
    reciter: Weak<RwLock<dyn ReciterView>>,
    reader: Weak<RwLock<dyn ReaderView>>,
}

impl SyncCoordinator {
    /// Creates a coordinator over the two view handles.
    pub fn new(
        reciter: Weak<RwLock<dyn ReciterView>>,
        reader: Weak<RwLock<dyn ReaderView>>,
    ) -> Self {
        Self { reciter, reader }
    }

    /// Applies a user-driven change from `origin` to the other view.
    ///
    /// Chapter and verse-range changes are routed unconditionally and
    /// unvalidated (the originating view owns validation). Current-verse
    /// changes are routed only when the destination's current verse
    /// differs, which stops no-op echoes from re-triggering highlight or
    /// layout work.
    pub fn on_position_changed(&self, origin: ViewOrigin, change: PositionChange) {
        trace!(?origin, ?change, "Routing position change");
        match origin {
            Reciter => self.apply_to_reader(change),
            Reader => self.apply_to_reciter(change),
        }
    }

    /// Navigates to a selected bookmark.
    ///
    /// The reader is the canonical target: it adopts the bookmark's
    /// chapter and range directly. Because mutators never self-notify,
    /// the coordinator then forwards the same two changes on the
    /// reader's behalf, so the reciter follows through the normal
    /// propagation rules rather than a special-case path.
    pub fn on_bookmark_selected(&self, bookmark: &Bookmark) {
        debug!(
            chapter = bookmark.chapter.index(),
            from = bookmark.verse_from,
            to = bookmark.verse_to,
            "Bookmark selected"
        );
        if let Some(reader) = self.reader.upgrade() {
            let mut reader = reader.write();
            reader.set_chapter(bookmark.chapter);
            reader.set_verse_range(bookmark.verse_from, bookmark.verse_to);
        }

        self.on_position_changed(Reader, PositionChange::Chapter(bookmark.chapter));
        self.on_position_changed(
            Reader,
            PositionChange::VerseRange {
                from: bookmark.verse_from,
                to: bookmark.verse_to,
            },
        );
    }

    fn apply_to_reader(&self, change: PositionChange) {
        let Some(reader) = self.reader.upgrade() else {
            trace!("Reader absent; dropping propagation");
            return;
        };
        let mut reader = reader.write();
        match change {
            PositionChange::Chapter(chapter) => reader.set_chapter(chapter),
            PositionChange::VerseRange { from, to } => reader.set_verse_range(from, to),
            // The reciter drives a highlight, not a jump: the reader
            // keeps its scroll position and only emphasizes the verse.
            PositionChange::CurrentVerse(verse) => {
                if reader.current_verse_number() != Some(verse) {
                    reader.highlight_verse(verse);
                }
            }
        }
    }

    fn apply_to_reciter(&self, change: PositionChange) {
        let Some(reciter) = self.reciter.upgrade() else {
            trace!("Reciter absent; dropping propagation");
            return;
        };
        let mut reciter = reciter.write();
        match change {
            PositionChange::Chapter(chapter) => reciter.set_chapter(chapter),
            PositionChange::VerseRange { from, to } => reciter.set_verse_range(from, to),
            // The reader drives an authoritative move: the reciter
            // advances its playback cue to the selected verse.
            PositionChange::CurrentVerse(verse) => {
                if reciter.current_verse_number() != Some(verse) {
                    reciter.set_current_verse(verse);
                }
            }
        }
    }
}
