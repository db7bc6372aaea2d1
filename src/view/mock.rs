//! Mock collaborators for crate-internal tests.
//!
//! Every mock records the mutator calls it receives, so tests can
//! assert not just final state but also that a propagation step did or
//! did not happen (echo suppression, equality short-circuits, layout
//! trigger scope).

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::{
    bookmarks::BookmarkBar,
    layout::{Rect, Size},
    plugin::host::{Container, MenuHost},
    position::ChapterId,
    view::traits::{PositionView, ReaderView, ReciterView},
};

/// Visibility of the reciter's three redundant selector controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SelectorVisibility {
    pub chapter: bool,
    pub verse_range: bool,
    pub current_verse: bool,
}

impl SelectorVisibility {
    pub(crate) fn all(visible: bool) -> Self {
        Self {
            chapter: visible,
            verse_range: visible,
            current_verse: visible,
        }
    }
}

/// Recording stand-in for the audio-recitation view.
#[derive(Debug)]
pub(crate) struct MockReciter {
    pub chapter: Option<ChapterId>,
    pub verse_range: Option<(u32, u32)>,
    pub current_verse: Option<u32>,
    pub selectors: SelectorVisibility,
    pub visible: bool,
    pub intrinsic_size: Size,
    pub bounds: Option<Rect>,
    pub stopped: bool,
    pub set_chapter_calls: usize,
    pub set_verse_range_calls: usize,
    pub set_current_verse_calls: usize,
}

impl Default for MockReciter {
    fn default() -> Self {
        Self {
            chapter: None,
            verse_range: None,
            current_verse: None,
            selectors: SelectorVisibility::all(true),
            visible: true,
            intrinsic_size: Size::new(400, 150),
            bounds: None,
            stopped: false,
            set_chapter_calls: 0,
            set_verse_range_calls: 0,
            set_current_verse_calls: 0,
        }
    }
}

impl PositionView for MockReciter {
    fn set_chapter(&mut self, chapter: ChapterId) {
        self.chapter = Some(chapter);
        self.set_chapter_calls += 1;
    }

    fn set_verse_range(&mut self, from: u32, to: u32) {
        self.verse_range = Some((from, to));
        self.set_verse_range_calls += 1;
    }

    fn set_current_verse(&mut self, verse: u32) {
        self.current_verse = Some(verse);
        self.set_current_verse_calls += 1;
    }

    fn current_verse_number(&self) -> Option<u32> {
        self.current_verse
    }

    fn size(&self) -> Size {
        self.intrinsic_size
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ReciterView for MockReciter {
    fn set_chapter_selector_visible(&mut self, visible: bool) {
        self.selectors.chapter = visible;
    }

    fn set_verse_range_selector_visible(&mut self, visible: bool) {
        self.selectors.verse_range = visible;
    }

    fn set_current_verse_selector_visible(&mut self, visible: bool) {
        self.selectors.current_verse = visible;
    }

    fn stop_if_playing(&mut self) {
        self.stopped = true;
    }
}

/// Recording stand-in for the textual-reading view.
#[derive(Debug)]
pub(crate) struct MockReader {
    pub chapter: Option<ChapterId>,
    pub verse_range: Option<(u32, u32)>,
    pub current_verse: Option<u32>,
    pub visible: bool,
    pub intrinsic_size: Size,
    pub bounds: Option<Rect>,
    pub highlight_calls: Vec<u32>,
    pub set_chapter_calls: usize,
    pub set_verse_range_calls: usize,
    pub set_current_verse_calls: usize,
}

impl Default for MockReader {
    fn default() -> Self {
        Self {
            chapter: None,
            verse_range: None,
            current_verse: None,
            visible: true,
            intrinsic_size: Size::new(0, 0),
            bounds: None,
            highlight_calls: Vec::new(),
            set_chapter_calls: 0,
            set_verse_range_calls: 0,
            set_current_verse_calls: 0,
        }
    }
}

impl PositionView for MockReader {
    fn set_chapter(&mut self, chapter: ChapterId) {
        self.chapter = Some(chapter);
        self.set_chapter_calls += 1;
    }

    fn set_verse_range(&mut self, from: u32, to: u32) {
        self.verse_range = Some((from, to));
        self.set_verse_range_calls += 1;
    }

    fn set_current_verse(&mut self, verse: u32) {
        self.current_verse = Some(verse);
        self.set_current_verse_calls += 1;
    }

    fn current_verse_number(&self) -> Option<u32> {
        self.current_verse
    }

    fn size(&self) -> Size {
        self.intrinsic_size
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ReaderView for MockReader {
    fn highlight_verse(&mut self, verse: u32) {
        self.highlight_calls.push(verse);
    }
}

/// Recording stand-in for the bookmark bar.
#[derive(Debug)]
pub(crate) struct MockBookmarkBar {
    pub visible: bool,
    pub bounds: Option<Rect>,
}

impl Default for MockBookmarkBar {
    fn default() -> Self {
        Self {
            visible: true,
            bounds: None,
        }
    }
}

impl BookmarkBar for MockBookmarkBar {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }
}

/// Fixed-size container stand-in.
#[derive(Debug)]
pub(crate) struct MockContainer {
    pub size: Size,
}

impl Container for MockContainer {
    fn width(&self) -> i32 {
        self.size.width
    }

    fn height(&self) -> i32 {
        self.size.height
    }
}

/// Menu stand-in that records registered toggles and lets tests fire
/// them as if the user clicked the checkable action.
#[derive(Default)]
pub(crate) struct MockMenu {
    entries: Vec<(String, bool, Box<dyn FnMut(bool)>)>,
}

impl MockMenu {
    /// Labels and initial checked states, in registration order.
    pub(crate) fn registered(&self) -> Vec<(String, bool)> {
        self.entries
            .iter()
            .map(|(label, checked, _)| (label.clone(), *checked))
            .collect()
    }

    /// Simulates the user toggling the action with the given label.
    ///
    /// # Panics
    ///
    /// Panics if no action with that label was registered.
    pub(crate) fn trigger(&mut self, label: &str, checked: bool) {
        let entry = self
            .entries
            .iter_mut()
            .find(|(entry_label, _, _)| entry_label == label)
            .unwrap_or_else(|| panic!("no menu action labelled {label:?}"));
        entry.1 = checked;
        (entry.2)(checked);
    }
}

impl MenuHost for MockMenu {
    fn add_toggle(&mut self, label: &str, checked: bool, handler: Box<dyn FnMut(bool)>) {
        self.entries.push((label.to_string(), checked, handler));
    }
}

/// Coerces a mock into the shared handle type the plugin consumes.
pub(crate) fn reciter_shared(mock: MockReciter) -> Arc<RwLock<MockReciter>> {
    Arc::new(RwLock::new(mock))
}

pub(crate) fn reciter_dyn(mock: &Arc<RwLock<MockReciter>>) -> Arc<RwLock<dyn ReciterView>> {
    mock.clone()
}

pub(crate) fn reciter_weak(mock: &Arc<RwLock<MockReciter>>) -> Weak<RwLock<dyn ReciterView>> {
    Arc::downgrade(&reciter_dyn(mock))
}

pub(crate) fn reader_shared(mock: MockReader) -> Arc<RwLock<MockReader>> {
    Arc::new(RwLock::new(mock))
}

pub(crate) fn reader_dyn(mock: &Arc<RwLock<MockReader>>) -> Arc<RwLock<dyn ReaderView>> {
    mock.clone()
}

pub(crate) fn reader_weak(mock: &Arc<RwLock<MockReader>>) -> Weak<RwLock<dyn ReaderView>> {
    Arc::downgrade(&reader_dyn(mock))
}

pub(crate) fn bar_shared(mock: MockBookmarkBar) -> Arc<RwLock<MockBookmarkBar>> {
    Arc::new(RwLock::new(mock))
}

pub(crate) fn bar_dyn(mock: &Arc<RwLock<MockBookmarkBar>>) -> Arc<RwLock<dyn BookmarkBar>> {
    mock.clone()
}

pub(crate) fn bar_weak(mock: &Arc<RwLock<MockBookmarkBar>>) -> Weak<RwLock<dyn BookmarkBar>> {
    Arc::downgrade(&bar_dyn(mock))
}

pub(crate) fn container_shared(size: Size) -> Arc<RwLock<MockContainer>> {
    Arc::new(RwLock::new(MockContainer { size }))
}

pub(crate) fn container_dyn(mock: &Arc<RwLock<MockContainer>>) -> Arc<RwLock<dyn Container>> {
    mock.clone()
}

pub(crate) fn container_weak(mock: &Arc<RwLock<MockContainer>>) -> Weak<RwLock<dyn Container>> {
    Arc::downgrade(&container_dyn(mock))
}
