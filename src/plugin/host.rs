//! Contracts for the host-supplied container and menu.

/// The widget container the host hands the plugin.
///
/// Geometry-change notifications arrive as calls to
/// [`crate::layout::LayoutCoordinator::on_container_geometry_changed`];
/// these queries cover the forced initial layout pass and relayouts
/// triggered by visibility toggles.
pub trait Container {
    /// Current container width.
    fn width(&self) -> i32;

    /// Current container height.
    fn height(&self) -> i32;
}

/// The host's menu surface for this plugin.
///
/// Each registered toggle is a checkable action wired 1:1 to one
/// visibility flag; the host invokes the handler with the new checked
/// state on every user click.
pub trait MenuHost {
    /// Adds a checkable action with its initial checked state.
    fn add_toggle(&mut self, label: &str, checked: bool, handler: Box<dyn FnMut(bool)>);
}
