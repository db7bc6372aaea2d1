//! Plugin lifecycle, host contracts and top-level wiring.

pub mod extension;
pub mod host;

pub use {
    extension::{MushafPlugin, PluginCollaborators},
    host::{Container, MenuHost},
};
