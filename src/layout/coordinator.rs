//! Deterministic view placement inside the host container.
//!
//! The bounds computation is a pure function of the container size, the
//! reciter's intrinsic size and the visibility flags; the coordinator
//! wraps it with the plumbing that queries collaborators and pushes the
//! results back into whichever of them currently exist.

use std::sync::{Arc, Weak};

use {parking_lot::RwLock, tracing::debug};

use crate::{
    bookmarks::{BOOKMARK_BAR_WIDTH, BookmarkBar},
    layout::geometry::{Rect, Size},
    plugin::host::Container,
    view::traits::{PositionView, ReaderView, ReciterView},
    visibility::ViewVisibility,
};

/// Computed bounds for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Reciter bounds, anchored bottom-center at its intrinsic size.
    pub reciter: Rect,
    /// Reader bounds, filling the area the other two leave over.
    pub reader: Rect,
    /// Bookmark bar bounds; `None` while the bar is hidden.
    pub bookmark_bar: Option<Rect>,
}

/// Computes all view bounds for the given inputs.
///
/// Pure and idempotent: identical inputs always produce identical
/// bounds. Only the bookmarks flag participates; reader and reciter
/// visibility never moves anything (both views keep their anchoring
/// whether shown or not).
#[must_use]
pub fn compute_layout(container: Size, reciter: Size, visibility: &ViewVisibility) -> FrameLayout {
    // The reciter's height carves the bottom strip off everything else,
    // so it is fixed first.
    let reciter_rect = Rect::new(
        container.width / 2 - reciter.width / 2,
        container.height - reciter.height,
        reciter.width,
        reciter.height,
    );
    let remaining_height = container.height - reciter.height;

    let bookmark_bar = visibility.bookmarks.then(|| {
        Rect::new(
            container.width - BOOKMARK_BAR_WIDTH,
            0,
            BOOKMARK_BAR_WIDTH,
            remaining_height,
        )
    });

    let reader_width = if visibility.bookmarks {
        container.width - BOOKMARK_BAR_WIDTH
    } else {
        container.width
    };

    FrameLayout {
        reciter: reciter_rect,
        reader: Rect::new(0, 0, reader_width, remaining_height),
        bookmark_bar,
    }
}

/// Applies layout passes to the live collaborators.
///
/// Invoked once at initialization with the container's current size,
/// on every container geometry notification, and on bookmark-bar
/// visibility toggles. Absent collaborators are skipped; an absent
/// reciter contributes zero size.
pub struct LayoutCoordinator {
    container: Weak<RwLock<dyn Container>>,
    reciter: Weak<RwLock<dyn ReciterView>>,
    reader: Weak<RwLock<dyn ReaderView>>,
    bookmark_bar: Weak<RwLock<dyn BookmarkBar>>,
    visibility: Arc<RwLock<ViewVisibility>>,
}

impl LayoutCoordinator {
    /// Creates a coordinator over the container and view handles.
    pub fn new(
        container: Weak<RwLock<dyn Container>>,
        reciter: Weak<RwLock<dyn ReciterView>>,
        reader: Weak<RwLock<dyn ReaderView>>,
        bookmark_bar: Weak<RwLock<dyn BookmarkBar>>,
        visibility: Arc<RwLock<ViewVisibility>>,
    ) -> Self {
        Self {
            container,
            reciter,
            reader,
            bookmark_bar,
            visibility,
        }
    }

    /// Handles a container geometry notification.
    pub fn on_container_geometry_changed(&self, width: i32, height: i32) {
        self.apply(Size::new(width, height));
    }

    /// Recomputes the layout from the container's current size.
    ///
    /// Used for the forced initial pass and after bookmark-bar toggles;
    /// a no-op while the container is absent.
    pub fn relayout(&self) {
        let Some(container) = self.container.upgrade() else {
            return;
        };
        let size = {
            let container = container.read();
            Size::new(container.width(), container.height())
        };
        self.apply(size);
    }

    fn apply(&self, container: Size) {
        let reciter_size = self
            .reciter
            .upgrade()
            .map(|reciter| reciter.read().size())
            .unwrap_or_default();
        let visibility = *self.visibility.read();
        let layout = compute_layout(container, reciter_size, &visibility);
        debug!(?container, ?layout, "Applying layout");

        if let Some(reciter) = self.reciter.upgrade() {
            reciter.write().set_bounds(layout.reciter);
        }
        if let (Some(bounds), Some(bar)) = (layout.bookmark_bar, self.bookmark_bar.upgrade()) {
            bar.write().set_bounds(bounds);
        }
        if let Some(reader) = self.reader.upgrade() {
            reader.write().set_bounds(layout.reader);
        }
    }
}
