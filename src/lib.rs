//! Mushaf - synchronized Qur'an recitation and reading
//!
//! The plugin core of a host reading/recitation application: an
//! audio-recitation view and a textual-reading view stay synchronized
//! on the same position (chapter, verse range, current verse) without
//! feedback loops, alongside a bookmark bar, inside a host-supplied
//! container. The widgets themselves belong to the host; this crate
//! holds the coordination logic and the trait contracts it consumes.

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod layout;
pub mod plugin;
pub mod position;
pub mod sync;
pub mod view;
pub mod visibility;

// Re-export key types for convenience
pub use {
    bookmarks::{BOOKMARK_BAR_WIDTH, Bookmark, BookmarkBar},
    config::{SettingsManager, UserSettings},
    error::{PositionError, Result},
    layout::{FrameLayout, LayoutCoordinator, Rect, Size, compute_layout},
    plugin::{Container, MenuHost, MushafPlugin, PluginCollaborators},
    position::{CHAPTER_COUNT, ChapterId, Position, VerseRange},
    sync::SyncCoordinator,
    view::{PositionChange, PositionView, ReaderView, ReciterView, ViewOrigin},
    visibility::{ViewVisibility, VisibilityController},
};
