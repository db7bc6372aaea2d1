//! Plugin assembly and host lifecycle.
//!
//! `MushafPlugin` follows the host's staged construction: a freshly
//! constructed plugin has no collaborators ("uninitialized"), and
//! `initialize` wires the coordinators, builds the menu toggles and
//! forces an initial layout pass ("ready"). Every event handler treats
//! the uninitialized state as absent collaborators: a silent no-op.

use std::sync::{Arc, Weak};

use {
    anyhow::{Context, bail},
    parking_lot::RwLock,
    tracing::{debug, trace},
};

use crate::{
    bookmarks::{Bookmark, BookmarkBar},
    config::SettingsManager,
    error::Result,
    layout::LayoutCoordinator,
    plugin::host::{Container, MenuHost},
    sync::SyncCoordinator,
    view::{
        PositionChange, ViewOrigin,
        traits::{ReaderView, ReciterView},
    },
    visibility::{ViewVisibility, VisibilityController},
};

/// The host-constructed widgets the plugin coordinates.
///
/// The plugin owns these exclusively for its activation lifetime; the
/// coordinators hold only `Weak` references into them.
pub struct PluginCollaborators {
    /// The audio-recitation view.
    pub reciter: Arc<RwLock<dyn ReciterView>>,
    /// The textual-reading view.
    pub reader: Arc<RwLock<dyn ReaderView>>,
    /// The bookmark strip.
    pub bookmark_bar: Arc<RwLock<dyn BookmarkBar>>,
    /// The container the host hands the plugin.
    pub container: Arc<RwLock<dyn Container>>,
}

/// The recitation/reading plugin core.
#[derive(Default)]
pub struct MushafPlugin {
    collaborators: Option<PluginCollaborators>,
    sync: Option<SyncCoordinator>,
    layout: Option<Arc<LayoutCoordinator>>,
    visibility: Option<VisibilityController>,
}

impl MushafPlugin {
    /// Plugin name as registered with the host.
    pub const NAME: &'static str = "mushaf";
    /// Human-readable title.
    pub const TITLE: &'static str = "Al-Qur'an";
    /// Menu/About description.
    pub const DESCRIPTION: &'static str =
        "Al-Qur'an recitation and reading with synchronized views.";
    /// Author string reported to the host.
    pub const AUTHOR: &'static str = "Mushaf Authors";
    /// Plugin major version reported to the host.
    pub const MAJOR_VERSION: u8 = 0;
    /// Plugin minor version reported to the host.
    pub const MINOR_VERSION: u8 = 1;

    /// Creates an uninitialized plugin with all collaborators absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `initialize` has completed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.visibility.is_some()
    }

    /// Wires the plugin using the default settings path.
    ///
    /// # Errors
    ///
    /// Fails if the settings directory cannot be created or if the
    /// plugin was already initialized.
    pub fn initialize(
        &mut self,
        collaborators: PluginCollaborators,
        menu: &mut dyn MenuHost,
    ) -> Result<()> {
        let settings = SettingsManager::new().context("creating plugin settings manager")?;
        self.initialize_with_settings(collaborators, menu, settings)
    }

    /// Wires the plugin with an explicit settings manager (for testing).
    ///
    /// Builds the coordinators over weak view handles, registers the
    /// three checkable menu actions with their persisted initial state,
    /// and forces one layout pass at the container's current size.
    ///
    /// # Errors
    ///
    /// Fails if the plugin was already initialized.
    pub fn initialize_with_settings(
        &mut self,
        collaborators: PluginCollaborators,
        menu: &mut dyn MenuHost,
        settings: SettingsManager,
    ) -> Result<()> {
        if self.is_initialized() {
            bail!("plugin already initialized");
        }
        debug!(name = Self::NAME, "Initializing plugin");
        let settings_manager = Arc::new(RwLock::new(settings));

        let reciter: Weak<RwLock<dyn ReciterView>> = Arc::downgrade(&collaborators.reciter);
        let reader: Weak<RwLock<dyn ReaderView>> = Arc::downgrade(&collaborators.reader);
        let bookmark_bar: Weak<RwLock<dyn BookmarkBar>> =
            Arc::downgrade(&collaborators.bookmark_bar);
        let container: Weak<RwLock<dyn Container>> = Arc::downgrade(&collaborators.container);

        // Selectors start hidden; the menu pass below re-applies them
        // from the persisted reader flag.
        {
            let mut reciter = collaborators.reciter.write();
            reciter.set_chapter_selector_visible(false);
            reciter.set_verse_range_selector_visible(false);
            reciter.set_current_verse_selector_visible(false);
        }

        let visibility = Arc::new(RwLock::new(ViewVisibility::from_settings(
            &settings_manager.read().get_settings(),
        )));
        let layout = Arc::new(LayoutCoordinator::new(
            container,
            reciter.clone(),
            reader.clone(),
            bookmark_bar.clone(),
            visibility.clone(),
        ));
        let controller = VisibilityController::new(
            visibility,
            settings_manager,
            reciter.clone(),
            reader.clone(),
            bookmark_bar,
            layout.clone(),
        );
        let sync = SyncCoordinator::new(reciter, reader);

        Self::initialize_menu(menu, &controller);

        // Force the initial layout pass at the container's current size.
        layout.relayout();

        self.collaborators = Some(collaborators);
        self.sync = Some(sync);
        self.layout = Some(layout);
        self.visibility = Some(controller);
        Ok(())
    }

    /// Registers the three checkable actions, applying each persisted
    /// flag as it goes (same as a user toggling to that state).
    fn initialize_menu(menu: &mut dyn MenuHost, controller: &VisibilityController) {
        let initial = controller.current();

        let checked = controller.toggle_reader(initial.reader);
        let reader_controller = controller.clone();
        menu.add_toggle(
            "Show Reader",
            checked,
            Box::new(move |shown| {
                reader_controller.toggle_reader(shown);
            }),
        );

        let checked = controller.toggle_reciter(initial.reciter);
        let reciter_controller = controller.clone();
        menu.add_toggle(
            "Show Reciter",
            checked,
            Box::new(move |shown| {
                reciter_controller.toggle_reciter(shown);
            }),
        );

        let checked = controller.toggle_bookmark_bar(initial.bookmarks);
        let bookmarks_controller = controller.clone();
        menu.add_toggle(
            "Bookmarks",
            checked,
            Box::new(move |shown| {
                bookmarks_controller.toggle_bookmark_bar(shown);
            }),
        );
    }

    /// Host activation notification. Nothing to do.
    pub fn on_activated(&self) {}

    /// Host deactivation notification: stop a running recitation.
    pub fn on_deactivated(&self) {
        if let Some(collaborators) = &self.collaborators {
            collaborators.reciter.write().stop_if_playing();
        }
    }

    /// A user-driven position change reported by one of the views.
    pub fn handle_position_changed(&self, origin: ViewOrigin, change: PositionChange) {
        match &self.sync {
            Some(sync) => sync.on_position_changed(origin, change),
            None => trace!("Position change before initialization; ignored"),
        }
    }

    /// A bookmark selection reported by the bookmark store.
    pub fn handle_bookmark_selected(&self, bookmark: &Bookmark) {
        match &self.sync {
            Some(sync) => sync.on_bookmark_selected(bookmark),
            None => trace!("Bookmark selection before initialization; ignored"),
        }
    }

    /// A geometry change reported by the container.
    pub fn handle_container_geometry_changed(&self, width: i32, height: i32) {
        match &self.layout {
            Some(layout) => layout.on_container_geometry_changed(width, height),
            None => trace!("Geometry change before initialization; ignored"),
        }
    }

    /// The visibility controller, once initialized.
    #[must_use]
    pub fn visibility(&self) -> Option<&VisibilityController> {
        self.visibility.as_ref()
    }
}
