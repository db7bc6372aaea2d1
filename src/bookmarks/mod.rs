//! Bookmark targets and the bookmark bar collaborator contract.
//!
//! Bookmarks are owned and persisted by the host's bookmark store; this
//! core only consumes selection notifications and positions the bar.

use crate::{layout::Rect, position::ChapterId};

/// Fixed width of the bookmark bar strip, in container units.
pub const BOOKMARK_BAR_WIDTH: i32 = 200;

/// A saved navigation target. Read-only to this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bookmark {
    /// Chapter the bookmark points into.
    pub chapter: ChapterId,
    /// First verse of the bookmarked range (inclusive).
    pub verse_from: u32,
    /// Last verse of the bookmarked range (inclusive).
    pub verse_to: u32,
}

/// The vertical bookmark strip on the container's right edge.
pub trait BookmarkBar {
    /// Shows or hides the bar.
    fn set_visible(&mut self, visible: bool);

    /// Whether the bar is currently shown.
    fn is_visible(&self) -> bool;

    /// Moves and resizes the bar inside the container.
    fn set_bounds(&mut self, bounds: Rect);
}
