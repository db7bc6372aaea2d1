//! The three view-visibility toggles and their side effects.
//!
//! Each toggle persists its flag and applies the visual effect on its
//! collaborator. Two couplings live here and nowhere else: the reader
//! flag drives the reciter's redundant selectors, and the bookmarks
//! flag drives a layout recompute (the strip changes the reader's
//! available width). Reader/reciter toggles never relayout.

use std::sync::{Arc, Weak};

use {parking_lot::RwLock, tracing::debug};

use crate::{
    bookmarks::BookmarkBar,
    config::{SettingsManager, UserSettings},
    layout::LayoutCoordinator,
    view::traits::{PositionView, ReaderView, ReciterView},
};

/// The three independent visibility flags.
///
/// No combination is forbidden; all three may be on or off at once.
/// Mutated only through [`VisibilityController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewVisibility {
    /// Textual-reading view shown.
    pub reader: bool,
    /// Audio-recitation view shown.
    pub reciter: bool,
    /// Bookmark bar shown.
    pub bookmarks: bool,
}

impl Default for ViewVisibility {
    fn default() -> Self {
        Self {
            reader: true,
            reciter: true,
            bookmarks: true,
        }
    }
}

impl ViewVisibility {
    /// Initial flags as read from persisted settings.
    #[must_use]
    pub fn from_settings(settings: &UserSettings) -> Self {
        Self {
            reader: settings.show_reader,
            reciter: settings.show_reciter,
            bookmarks: settings.show_bookmarks,
        }
    }
}

/// Owns the visibility flags and applies toggle side effects.
#[derive(Clone)]
pub struct VisibilityController {
    /// Shared flag state, also read by the layout coordinator.
    visibility: Arc<RwLock<ViewVisibility>>,
    /// Settings manager reference for persistence.
    settings_manager: Arc<RwLock<SettingsManager>>,
    reciter: Weak<RwLock<dyn ReciterView>>,
    reader: Weak<RwLock<dyn ReaderView>>,
    bookmark_bar: Weak<RwLock<dyn BookmarkBar>>,
    layout: Arc<LayoutCoordinator>,
}

impl VisibilityController {
    /// Creates a controller over the shared flag state and collaborators.
    pub fn new(
        visibility: Arc<RwLock<ViewVisibility>>,
        settings_manager: Arc<RwLock<SettingsManager>>,
        reciter: Weak<RwLock<dyn ReciterView>>,
        reader: Weak<RwLock<dyn ReaderView>>,
        bookmark_bar: Weak<RwLock<dyn BookmarkBar>>,
        layout: Arc<LayoutCoordinator>,
    ) -> Self {
        Self {
            visibility,
            settings_manager,
            reciter,
            reader,
            bookmark_bar,
            layout,
        }
    }

    /// Current flag values.
    #[must_use]
    pub fn current(&self) -> ViewVisibility {
        *self.visibility.read()
    }

    /// Shows or hides the reader.
    ///
    /// The reciter's own chapter/range/verse pickers duplicate what the
    /// reader displays, so they appear exactly when the reader is gone.
    /// Does not relayout: the reader keeps its anchoring either way.
    pub fn toggle_reader(&self, shown: bool) -> bool {
        debug!(shown, "Toggling reader visibility");
        self.visibility.write().reader = shown;
        if let Some(reader) = self.reader.upgrade() {
            reader.write().set_visible(shown);
        }
        if let Some(reciter) = self.reciter.upgrade() {
            let mut reciter = reciter.write();
            reciter.set_chapter_selector_visible(!shown);
            reciter.set_verse_range_selector_visible(!shown);
            reciter.set_current_verse_selector_visible(!shown);
        }
        self.persist(|settings| settings.show_reader = shown);
        shown
    }

    /// Shows or hides the reciter. Does not relayout.
    pub fn toggle_reciter(&self, shown: bool) -> bool {
        debug!(shown, "Toggling reciter visibility");
        self.visibility.write().reciter = shown;
        if let Some(reciter) = self.reciter.upgrade() {
            reciter.write().set_visible(shown);
        }
        self.persist(|settings| settings.show_reciter = shown);
        shown
    }

    /// Shows or hides the bookmark bar and recomputes the layout.
    pub fn toggle_bookmark_bar(&self, shown: bool) -> bool {
        debug!(shown, "Toggling bookmark bar visibility");
        self.visibility.write().bookmarks = shown;
        if let Some(bar) = self.bookmark_bar.upgrade() {
            bar.write().set_visible(shown);
        }
        self.layout.relayout();
        self.persist(|settings| settings.show_bookmarks = shown);
        shown
    }

    /// Persists the flags; failures are logged, never raised.
    fn persist(&self, apply: impl FnOnce(&mut UserSettings)) {
        let settings_manager = self.settings_manager.write();
        let mut current = *settings_manager.get_settings();
        apply(&mut current);
        if let Err(e) = settings_manager.update_settings(current) {
            debug!("Failed to persist visibility flags: {}", e);
        }
    }
}
